use dioxus::prelude::*;

mod auth;
mod components;
mod config;
mod guard;
mod hooks;
mod routes;
mod services;
#[cfg(test)]
mod testing;

use auth::{use_session_restore, AuthState};
use routes::Route;
use services::{load_seed, Services};

const CONSOLE_CSS: Asset = asset!("/assets/console.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::app_config().clone());
    use_context_provider(|| Services::in_memory(load_seed()));
    use_context_provider(AuthState::new);

    // Auth starts in `Loading`; guarded pages stay empty until this settles.
    use_session_restore();

    rsx! {
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
