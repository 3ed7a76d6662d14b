use dioxus::prelude::*;
use shared_types::{Customer, CustomerPermissions, CustomerStatus, ViewMode};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardFooter, CardGrid,
    CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, Skeleton,
};

use crate::hooks::ListingState;

/// Number of skeleton rows shown while the list loads.
const SKELETON_ROWS: usize = 4;

pub fn status_badge_variant(status: CustomerStatus) -> BadgeVariant {
    match status {
        CustomerStatus::Active => BadgeVariant::Success,
        CustomerStatus::Lead => BadgeVariant::Warning,
        CustomerStatus::Inactive => BadgeVariant::Neutral,
    }
}

/// Customers in the current view mode, or the loading, error or empty state.
///
/// A failed load renders only the error text so stale rows never show.
#[component]
pub fn CustomerListing(
    state: ListingState,
    view: ViewMode,
    permissions: CustomerPermissions,
    #[props(default)] on_view: EventHandler<Customer>,
    #[props(default)] on_edit: EventHandler<Customer>,
    #[props(default)] on_delete: EventHandler<Customer>,
) -> Element {
    match state {
        ListingState::Loading => rsx! {
            div { class: "customer-listing-loading",
                Skeleton { rows: SKELETON_ROWS, class: "customer-skeleton-row" }
            }
        },
        ListingState::Failed(_) => rsx! {
            p { class: "customer-listing-error", "Failed to load customers" }
        },
        ListingState::Ready(customers) if customers.is_empty() => rsx! {
            Card { class: "customer-listing-empty",
                CardContent { "No customers yet." }
            }
        },
        ListingState::Ready(customers) => match view {
            ViewMode::Table => rsx! {
                CustomerTable { customers, permissions, on_view, on_edit, on_delete }
            },
            ViewMode::Grid => rsx! {
                CustomerGrid { customers, permissions, on_view, on_edit, on_delete }
            },
        },
    }
}

#[component]
pub fn CustomerTable(
    customers: Vec<Customer>,
    permissions: CustomerPermissions,
    on_view: EventHandler<Customer>,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Company" }
                DataTableColumn { "Status" }
                if permissions.has_row_actions() {
                    DataTableColumn { "Actions" }
                }
            }
            DataTableBody {
                for customer in customers {
                    CustomerRow {
                        key: "{customer.id}",
                        customer,
                        permissions,
                        on_view,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn CustomerRow(
    customer: Customer,
    permissions: CustomerPermissions,
    on_view: EventHandler<Customer>,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let view_target = customer.clone();
    let company = customer.company.clone().unwrap_or_else(|| "—".to_string());

    rsx! {
        DataTableRow { onclick: move |_| on_view.call(view_target.clone()),
            DataTableCell { span { class: "customer-name", "{customer.name}" } }
            DataTableCell { "{customer.email}" }
            DataTableCell { "{company}" }
            DataTableCell {
                Badge { variant: status_badge_variant(customer.status), "{customer.status.display_name()}" }
            }
            if permissions.has_row_actions() {
                DataTableCell {
                    RowActions { customer: customer.clone(), permissions, on_edit, on_delete }
                }
            }
        }
    }
}

/// Edit and delete buttons for one customer. Clicks stay inside the buttons
/// so the row's own click (view) does not fire as well.
#[component]
fn RowActions(
    customer: Customer,
    permissions: CustomerPermissions,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let edit_target = customer.clone();
    let delete_target = customer;

    rsx! {
        div { class: "customer-row-actions",
            if permissions.can_edit_customer {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_edit.call(edit_target.clone());
                    },
                    "Edit"
                }
            }
            if permissions.can_delete_customer {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(delete_target.clone());
                    },
                    "Delete"
                }
            }
        }
    }
}

#[component]
pub fn CustomerGrid(
    customers: Vec<Customer>,
    permissions: CustomerPermissions,
    on_view: EventHandler<Customer>,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    rsx! {
        CardGrid {
            for customer in customers {
                CustomerCard {
                    key: "{customer.id}",
                    customer,
                    permissions,
                    on_view,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn CustomerCard(
    customer: Customer,
    permissions: CustomerPermissions,
    on_view: EventHandler<Customer>,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let view_target = customer.clone();

    rsx! {
        Card { class: "customer-card",
            CardHeader {
                div { class: "customer-card-heading",
                    CardTitle { span { class: "customer-name", "{customer.name}" } }
                    Badge { variant: status_badge_variant(customer.status), "{customer.status.display_name()}" }
                }
            }
            CardContent {
                p { "{customer.email}" }
                if let Some(company) = &customer.company {
                    p { "{company}" }
                }
                if let Some(phone) = &customer.phone {
                    p { "{phone}" }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_view.call(view_target.clone()),
                    "View"
                }
                RowActions { customer: customer.clone(), permissions, on_edit, on_delete }
            }
        }
    }
}
