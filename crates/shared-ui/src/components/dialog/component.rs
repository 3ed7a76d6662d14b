use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal dialog root; `open` and `on_open_change` drive visibility.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "console-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("console-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "console-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "console-dialog-description",
        None,
        false,
    ));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Vertical stack of labelled fields inside a dialog.
#[component]
pub fn DialogForm(children: Element) -> Element {
    rsx! {
        div { class: "console-dialog-form", {children} }
    }
}

/// Right-aligned button row at the bottom of a dialog.
#[component]
pub fn DialogActions(children: Element) -> Element {
    rsx! {
        div { class: "console-dialog-actions", {children} }
    }
}
