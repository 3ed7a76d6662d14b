use dioxus::prelude::*;
use shared_types::ViewMode;
use shared_ui::components::{Button, ButtonVariant};

/// Segmented control switching a collection page between table and grid.
///
/// Only writes `mode`; whatever renders the rows reads it.
///
/// ```rust,ignore
/// let mode = use_signal(|| ViewMode::Table);
/// rsx! {
///     ViewToggle { mode }
/// }
/// ```
#[component]
pub fn ViewToggle(mut mode: Signal<ViewMode>) -> Element {
    let current = mode();

    rsx! {
        div { class: "view-toggle", role: "group", aria_label: "View mode",
            for option in [ViewMode::Table, ViewMode::Grid] {
                Button {
                    key: "{option.label()}",
                    variant: if current == option { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    pressed: current == option,
                    onclick: move |_| {
                        if mode() != option {
                            tracing::debug!(view = option.label(), "view mode changed");
                            mode.set(option);
                        }
                    },
                    "{option.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(initial: ViewMode) -> Element {
        let mode = use_signal(|| initial);
        rsx! { ViewToggle { mode } }
    }

    fn render(initial: ViewMode) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { initial });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn pressed_label(html: &str) -> &str {
        let idx = html
            .find("aria-pressed=\"true\"")
            .expect("one button must be pressed");
        let rest = &html[idx..];
        let start = rest.find('>').expect("button closes") + 1;
        let end = rest.find("</button>").expect("button ends");
        &rest[start..end]
    }

    #[test]
    fn renders_both_modes() {
        let html = render(ViewMode::Table);
        assert!(html.contains("Table"), "{html}");
        assert!(html.contains("Grid"), "{html}");
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1, "{html}");
        assert_eq!(html.matches("aria-pressed=\"false\"").count(), 1, "{html}");
    }

    #[test]
    fn active_mode_is_highlighted() {
        assert_eq!(pressed_label(&render(ViewMode::Table)), "Table");
        assert_eq!(pressed_label(&render(ViewMode::Grid)), "Grid");
    }
}
