use dioxus::prelude::*;

/// Bordered surface used for dashboard tiles, grid items and empty states.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer row, typically for per-item actions.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Responsive grid of cards.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_wraps_cards() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                CardGrid {
                    Card {
                        CardHeader { CardTitle { "Acme" } }
                        CardContent { "ops@acme.test" }
                    }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("class=\"card-grid\""), "{html}");
        assert!(html.contains("<h3 class=\"card-title\">Acme</h3>"), "{html}");
    }
}
