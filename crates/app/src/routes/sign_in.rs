use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::{use_toast, Card, CardContent, CardHeader, CardTitle, Input, Label, ToastOptions};

use crate::auth::use_auth;
use crate::routes::Route;
use crate::services::Services;

/// Sign-in page. Signed-in visitors, including ones who just signed in here,
/// are sent on to the dashboard.
#[component]
pub fn Auth() -> Element {
    let mut auth = use_auth();
    let services = use_context::<Services>();
    let config = use_context::<AppConfig>();
    let toast = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();

        match services.sessions.sign_in(&username(), &password()) {
            Ok(user) => {
                password.set(String::new());
                auth.set_user(user);
            }
            Err(err) => {
                tracing::warn!(username = %username(), error = %err, "sign-in rejected");
                toast.error(err.user_message(), ToastOptions::new());
            }
        }
    };

    // Nothing to show until the session restore settles.
    if auth.status().is_loading {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sign_in.css") }
        document::Title { "Sign In · {config.console.title}" }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    p { class: "auth-subtitle", "{config.console.title}" }
                }

                CardContent {
                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "username", required: true, "Username" }
                            Input {
                                id: "username",
                                placeholder: "admin",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", required: true, "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: username().trim().is_empty() || password().is_empty(),
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
