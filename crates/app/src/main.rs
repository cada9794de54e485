use dioxus::prelude::*;

mod components;
mod config;
mod navigation;
mod notify;
mod routes;
mod session;
mod storage;

use config::{app_config, load_config, log_level};
use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config_error = load_config();

    if let Err(e) = dioxus::logger::init(log_level(app_config())) {
        eprintln!("failed to initialize logger: {e}");
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "config.toml invalid, using defaults");
    }
    tracing::info!(
        site = %app_config().site.name,
        platform = client_platform(),
        "starting"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
