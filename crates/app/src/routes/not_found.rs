use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                NotFoundMessage { route }
                Link { to: Route::Dashboard {},
                    class: "not-found-link",
                    "Back to Dashboard"
                }
            }
        }
    }
}

#[component]
fn NotFoundMessage(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        p { class: "not-found-message",
            "The page "
            code { "{path}" }
            " could not be found."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_echoes_the_requested_path() {
        let mut dom = VirtualDom::new_with_props(
            NotFoundMessage,
            NotFoundMessageProps {
                route: vec!["reports".to_string(), "q3".to_string()],
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<code>/reports/q3</code>"), "{html}");
    }
}
