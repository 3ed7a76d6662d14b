use dioxus::prelude::*;

use crate::routes::Route;

/// Where `/` sends every visitor, signed in or not.
pub fn landing_target() -> Route {
    Route::Auth {}
}

/// Root route: shows a redirect notice and replaces itself with the
/// sign-in page. The effect reads no signals, so it runs once per mount.
#[component]
pub fn Landing() -> Element {
    use_effect(|| {
        tracing::debug!(to = %landing_target(), "landing redirect");
        navigator().replace(landing_target());
    });

    rsx! {
        RedirectNotice {}
    }
}

#[component]
fn RedirectNotice() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }
        div { class: "landing-redirect", role: "status",
            span { class: "landing-spinner", aria_hidden: "true" }
            p { "Redirecting…" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_always_targets_sign_in() {
        assert_eq!(landing_target(), Route::Auth {});
        assert_eq!(landing_target().to_string(), "/auth");
    }

    #[test]
    fn notice_shows_loading_text() {
        let mut dom = VirtualDom::new(RedirectNotice);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Redirecting…"), "{html}");
        assert!(html.contains("role=\"status\""), "{html}");
    }
}
