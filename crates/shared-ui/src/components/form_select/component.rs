use dioxus::prelude::*;

/// Native `<select>` for small fixed option sets such as a status field.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
