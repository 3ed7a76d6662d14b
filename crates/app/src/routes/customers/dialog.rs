use dioxus::prelude::*;
use shared_types::{CustomerStatus, ALL_CUSTOMER_STATUSES};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant,
    DialogActions, DialogContent, DialogDescription, DialogForm, DialogRoot, DialogTitle,
    FormSelect, Input,
};

use crate::hooks::{CustomerActions, DialogMode};

/// Create, edit or view dialog for a single customer.
#[component]
pub fn CustomerDialog(actions: CustomerActions) -> Element {
    let mode = (actions.mode)();
    let read_only = mode.is_read_only();
    let form = actions.form.read().clone();
    let errors = actions.field_errors.read().clone();
    let since = actions
        .selected
        .read()
        .as_ref()
        .map(|c| c.created_at.format("%b %-d, %Y").to_string());
    let mut fields = actions.form;

    rsx! {
        DialogRoot {
            open: (actions.dialog_open)(),
            on_open_change: move |open: bool| {
                if !open {
                    actions.close();
                }
            },
            DialogContent {
                DialogTitle { "{mode.title()}" }
                DialogDescription {
                    match (mode, since) {
                        (DialogMode::Create, _) => rsx! { "Add a new customer record." },
                        (_, Some(since)) => rsx! { "Customer since {since}." },
                        (_, None) => rsx! {},
                    }
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        actions.submit();
                    },
                    DialogForm {
                        Input {
                            label: "Name",
                            value: form.name.clone(),
                            disabled: read_only,
                            error: errors.get("name").cloned(),
                            on_input: move |e: FormEvent| fields.write().name = e.value(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: form.email.clone(),
                            disabled: read_only,
                            error: errors.get("email").cloned(),
                            on_input: move |e: FormEvent| fields.write().email = e.value(),
                        }
                        Input {
                            label: "Company",
                            value: form.company.clone().unwrap_or_default(),
                            disabled: read_only,
                            on_input: move |e: FormEvent| fields.write().company = Some(e.value()),
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: form.phone.clone().unwrap_or_default(),
                            disabled: read_only,
                            on_input: move |e: FormEvent| fields.write().phone = Some(e.value()),
                        }
                        FormSelect {
                            label: "Status",
                            value: form.status.as_str(),
                            disabled: read_only,
                            onchange: move |e: FormEvent| {
                                fields.write().status = CustomerStatus::from_key(&e.value());
                            },
                            for status in ALL_CUSTOMER_STATUSES {
                                option {
                                    key: "{status.as_str()}",
                                    value: status.as_str(),
                                    selected: *status == form.status,
                                    "{status.display_name()}"
                                }
                            }
                        }
                    }

                    DialogActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| actions.close(),
                            if read_only { "Close" } else { "Cancel" }
                        }
                        if !read_only {
                            button {
                                r#type: "submit",
                                class: "button",
                                "data-style": "primary",
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Confirmation step before a customer is deleted.
#[component]
pub fn DeleteCustomerDialog(actions: CustomerActions) -> Element {
    let name = actions
        .selected
        .read()
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let deleting = (actions.is_deleting)();

    rsx! {
        AlertDialogRoot {
            open: (actions.confirm_open)(),
            on_open_change: move |open: bool| {
                if !open {
                    actions.cancel_delete();
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Delete Customer" }
                AlertDialogDescription {
                    "Delete {name}? This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_: MouseEvent| actions.confirm_delete(),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
