use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
///
/// Renders `rows` bars stacked vertically; extra attributes such as `class`
/// or `style` apply to every bar.
#[component]
pub fn Skeleton(
    #[props(default = 1)] rows: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "skeleton-stack",
            aria_busy: "true",
            aria_hidden: "true",
            for i in 0..rows {
                div { key: "{i}", ..merged.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(rows: usize) -> Element {
        rsx! {
            Skeleton { rows, class: "row-placeholder" }
        }
    }

    fn render(rows: usize) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { rows });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_one_bar_per_row() {
        let html = render(3);
        assert_eq!(html.matches("row-placeholder").count(), 3, "{html}");
        assert_eq!(html.matches("skeleton-stack").count(), 1, "{html}");
    }

    #[test]
    fn zero_rows_renders_an_empty_stack() {
        let html = render(0);
        assert!(!html.contains("row-placeholder"), "{html}");
    }
}
