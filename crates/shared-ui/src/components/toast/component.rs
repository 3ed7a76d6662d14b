use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Hosts the toast stack; wrap the router in this so any page can toast.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
