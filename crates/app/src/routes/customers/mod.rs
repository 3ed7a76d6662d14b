pub mod dialog;
pub mod listing;

use dioxus::prelude::*;
use shared_types::{AppConfig, Customer, ViewMode};
use shared_ui::{Button, PageHeader};

use crate::auth::use_customer_permissions;
use crate::components::{PageShell, ViewToggle};
use crate::guard::{GuardPolicy, RouteGuard};
use crate::hooks::{use_customer_actions, use_customers};

use dialog::{CustomerDialog, DeleteCustomerDialog};
use listing::CustomerListing;

/// Customer management, open to every signed-in user. What each user may
/// change comes from their customer permissions.
#[component]
pub fn Customers() -> Element {
    rsx! {
        RouteGuard { policy: GuardPolicy::authenticated(),
            PageShell { title: "Customers", CustomersPage {} }
        }
    }
}

#[component]
fn CustomersPage() -> Element {
    let config = use_context::<AppConfig>();
    let data = use_customers();
    let actions = use_customer_actions(data.refetch);
    let permissions = use_customer_permissions();
    let initial_view = config.initial_view();
    let view = use_signal(move || initial_view);

    let grid_enabled = config.features.customer_grid;
    let current_view = if grid_enabled { view() } else { ViewMode::Table };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./customers.css") }

        PageHeader { title: "Customers",
            if grid_enabled {
                ViewToggle { mode: view }
            }
            if permissions.can_add_customer {
                Button { onclick: move |_| actions.open_dialog(), "Add Customer" }
            }
        }

        CustomerListing {
            state: data.listing(),
            view: current_view,
            permissions,
            on_view: move |c: Customer| actions.view(c),
            on_edit: move |c: Customer| actions.edit(c),
            on_delete: move |c: Customer| actions.delete(c),
        }

        CustomerDialog { actions }
        DeleteCustomerDialog { actions }
    }
}
