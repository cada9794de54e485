use crate::config::app_config;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Page;

/// Show `page` and bring the viewport back to the top.
pub fn navigate(page: Page) {
    tracing::info!(page = page.as_str(), "navigate");
    navigator().push(Route::from(page));
    document::eval(&scroll_to_top_script(app_config().navigation.smooth_scroll));
}

fn scroll_to_top_script(smooth: bool) -> String {
    let behavior = if smooth { "smooth" } else { "auto" };
    format!("window.scrollTo({{ top: 0, behavior: '{behavior}' }});")
}
