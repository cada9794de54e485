use dioxus::prelude::*;

/// Fill color of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProgressTone {
    #[default]
    Teal,
    Blue,
    Green,
}

impl ProgressTone {
    fn class(&self) -> &'static str {
        match self {
            ProgressTone::Teal => "teal",
            ProgressTone::Blue => "blue",
            ProgressTone::Green => "green",
        }
    }
}

/// Horizontal percentage bar. Values above 100 render as a full bar.
#[component]
pub fn ProgressBar(
    value: u8,
    #[props(default)] tone: ProgressTone,
    /// Caption above the bar, e.g. "Progress". The value is appended.
    #[props(default)]
    label: String,
    /// Show the value to the right of the bar instead of in the caption.
    #[props(default = false)]
    inline_value: bool,
) -> Element {
    let value = value.min(100);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress",
            if !label.is_empty() && !inline_value {
                p { class: "progress-caption",
                    span { class: "progress-label", "{label}:" }
                    " {value}%"
                }
            }
            div { class: "progress-row",
                div {
                    class: "progress-track",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{value}",
                    div {
                        class: "progress-fill",
                        "data-tone": tone.class(),
                        style: "width: {value}%",
                    }
                }
                if inline_value {
                    span { class: "progress-inline-value", "{value}%" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: u8, inline_value: bool) -> String {
        dioxus_ssr::render_element(rsx! {
            ProgressBar { value, label: "Progress", inline_value, tone: ProgressTone::Blue }
        })
    }

    #[test]
    fn renders_width_and_caption() {
        let html = render(65, false);
        assert!(html.contains("width: 65%"), "{html}");
        assert!(html.contains("Progress:"), "{html}");
        assert!(html.contains("data-tone=\"blue\""), "{html}");
    }

    #[test]
    fn clamps_overflowing_values() {
        let html = render(180, false);
        assert!(html.contains("width: 100%"), "{html}");
        assert!(!html.contains("width: 180%"), "{html}");
    }

    #[test]
    fn inline_value_moves_out_of_caption() {
        let html = render(40, true);
        assert!(!html.contains("Progress:"), "{html}");
        assert!(html.contains("progress-inline-value"), "{html}");
    }
}
