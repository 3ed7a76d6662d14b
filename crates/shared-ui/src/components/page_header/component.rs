use dioxus::prelude::*;

/// Title row for a console page.
///
/// `children` are the page's actions and sit on the right; `subtitle` is a
/// muted line under the title.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
