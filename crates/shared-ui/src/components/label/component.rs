use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label bound to the field with id `html_for`. Required fields get a
/// trailing marker that screen readers skip.
#[component]
pub fn Label(
    html_for: String,
    #[props(default)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "console-label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { html_for, attributes: merged,
            {children}
            if required {
                span { class: "console-label-required", aria_hidden: "true", "*" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(required: bool) -> Element {
        rsx! {
            Label { html_for: "email", required, "Email" }
        }
    }

    fn render(required: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { required });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn required_fields_are_marked() {
        let html = render(true);
        assert!(html.contains("for=\"email\""), "{html}");
        assert!(html.contains("console-label-required"), "{html}");
        assert!(!render(false).contains("console-label-required"));
    }
}
