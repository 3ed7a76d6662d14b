use dioxus::prelude::*;

/// Single-line text input with an optional inline label and error text.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Validation message shown under the field.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: if error.is_some() { "input-wrapper invalid" } else { "input-wrapper" },
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error.as_ref() {
                span { class: "input-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_marks_wrapper_invalid() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                Input { value: "ops@", label: "Email", error: "must be a valid address".to_string() }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("input-wrapper invalid"), "{html}");
        assert!(html.contains("must be a valid address"), "{html}");
        assert!(html.contains("Email"), "{html}");
    }
}
