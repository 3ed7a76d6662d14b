use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, Customer, CustomerForm};
use shared_ui::{use_toast, ToastOptions};

use crate::services::Services;

/// What the customers listing should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingState {
    Loading,
    Failed(AppError),
    Ready(Vec<Customer>),
}

/// Customer list as seen by a page.
#[derive(Clone, PartialEq)]
pub struct CustomersData {
    pub customers: Vec<Customer>,
    pub is_loading: bool,
    pub error: Option<AppError>,
    /// Reload the list from the customer service.
    pub refetch: Callback,
}

fn split(
    value: Option<&Result<Vec<Customer>, AppError>>,
) -> (Vec<Customer>, bool, Option<AppError>) {
    match value {
        None => (Vec::new(), true, None),
        Some(Ok(list)) => (list.clone(), false, None),
        Some(Err(err)) => (Vec::new(), false, Some(err.clone())),
    }
}

/// An error wins over stale rows; loading only shows before the first answer.
pub fn listing_state(
    customers: &[Customer],
    is_loading: bool,
    error: Option<&AppError>,
) -> ListingState {
    if let Some(err) = error {
        return ListingState::Failed(err.clone());
    }
    if is_loading && customers.is_empty() {
        return ListingState::Loading;
    }
    ListingState::Ready(customers.to_vec())
}

/// Any collaborator error surfaces to the listing as a fetch failure; the
/// original message is kept for the log.
fn as_fetch_error(err: AppError) -> AppError {
    if err.is_data_fetch() {
        err
    } else {
        AppError::data_fetch(err.message)
    }
}

impl CustomersData {
    pub fn listing(&self) -> ListingState {
        listing_state(&self.customers, self.is_loading, self.error.as_ref())
    }
}

/// Load customers from the injected [`CustomerService`](crate::services::CustomerService).
///
/// The resource reads no signals, so nothing but `refetch` reloads it.
pub fn use_customers() -> CustomersData {
    let services = use_context::<Services>();

    let mut resource = use_resource(move || {
        let customers = services.customers.clone();
        async move {
            customers.list().map_err(|err| {
                tracing::warn!(error = %err, "customer list failed");
                as_fetch_error(err)
            })
        }
    });

    let refetch = use_callback(move |_: ()| resource.restart());

    let (customers, is_loading, error) = split(resource.read().as_ref());
    CustomersData {
        customers,
        is_loading,
        error,
        refetch,
    }
}

/// Which flavour of the customer dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Create,
    Edit,
    View,
}

impl DialogMode {
    pub fn title(&self) -> &'static str {
        match self {
            DialogMode::Create => "Add Customer",
            DialogMode::Edit => "Edit Customer",
            DialogMode::View => "Customer Details",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, DialogMode::View)
    }
}

/// Outcome of an action, surfaced as a toast.
#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Selection, dialog and form state for the customers page plus the
/// handlers that mutate it.
///
/// Everything lives in signals owned by the page, so swapping the table for
/// the grid leaves an open dialog or a pending delete alone.
#[derive(Clone, Copy)]
pub struct CustomerActions {
    pub selected: Signal<Option<Customer>>,
    pub dialog_open: Signal<bool>,
    pub mode: Signal<DialogMode>,
    pub form: Signal<CustomerForm>,
    pub field_errors: Signal<HashMap<String, String>>,
    pub confirm_open: Signal<bool>,
    pub is_deleting: Signal<bool>,
    services: CopyValue<Services>,
    notify: Callback<Feedback>,
    refetch: Callback,
}

// Signals compare by identity, so two handles are equal when they drive the
// same page state.
impl PartialEq for CustomerActions {
    fn eq(&self, other: &Self) -> bool {
        self.selected == other.selected && self.form == other.form
    }
}

impl CustomerActions {
    /// Open an empty form for a new customer.
    pub fn open_dialog(mut self) {
        self.selected.set(None);
        self.form.set(CustomerForm::default());
        self.field_errors.set(HashMap::new());
        self.mode.set(DialogMode::Create);
        self.dialog_open.set(true);
    }

    pub fn edit(mut self, customer: Customer) {
        self.form.set(CustomerForm::from_customer(&customer));
        self.selected.set(Some(customer));
        self.field_errors.set(HashMap::new());
        self.mode.set(DialogMode::Edit);
        self.dialog_open.set(true);
    }

    pub fn view(mut self, customer: Customer) {
        self.form.set(CustomerForm::from_customer(&customer));
        self.selected.set(Some(customer));
        self.field_errors.set(HashMap::new());
        self.mode.set(DialogMode::View);
        self.dialog_open.set(true);
    }

    pub fn close(mut self) {
        self.dialog_open.set(false);
        self.field_errors.set(HashMap::new());
        if !(self.confirm_open)() {
            self.selected.set(None);
        }
    }

    /// Ask for confirmation before deleting `customer`.
    pub fn delete(mut self, customer: Customer) {
        self.selected.set(Some(customer));
        self.confirm_open.set(true);
    }

    pub fn cancel_delete(mut self) {
        self.confirm_open.set(false);
        // A running delete still needs the selection.
        if !(self.dialog_open)() && !(self.is_deleting)() {
            self.selected.set(None);
        }
    }

    /// Delete the customer awaiting confirmation. A second call while the
    /// first is in flight is ignored.
    pub fn confirm_delete(mut self) {
        if (self.is_deleting)() {
            return;
        }
        let pending = self.selected.read().clone();
        let Some(customer) = pending else {
            self.confirm_open.set(false);
            return;
        };

        self.is_deleting.set(true);
        spawn(async move {
            let mut actions = self;
            let customers = actions.services.read().customers.clone();
            match customers.delete(customer.id) {
                Ok(()) => {
                    tracing::info!(customer = %customer.id, "customer deleted");
                    actions
                        .notify
                        .call(Feedback::Success(format!("Deleted {}", customer.name)));
                    actions.refetch.call(());
                }
                Err(err) => {
                    tracing::warn!(customer = %customer.id, error = %err, "customer delete failed");
                    actions.notify.call(Feedback::Error(err.user_message()));
                }
            }
            actions.is_deleting.set(false);
            actions.confirm_open.set(false);
            actions.selected.set(None);
        });
    }

    /// Validate the form and create or update the customer.
    pub fn submit(mut self) {
        let mode = (self.mode)();
        if mode.is_read_only() {
            self.close();
            return;
        }

        let form = self.form.read().normalized();
        if let Err(err) = form.validate() {
            self.field_errors.set(err.field_errors);
            return;
        }
        self.field_errors.set(HashMap::new());

        let customers = self.services.read().customers.clone();
        let target = self.selected.read().as_ref().map(|c| c.id);
        let result = match (mode, target) {
            (DialogMode::Edit, Some(id)) => customers.update(id, form),
            _ => customers.create(form),
        };

        match result {
            Ok(saved) => {
                tracing::info!(customer = %saved.id, mode = ?mode, "customer saved");
                let verb = if mode == DialogMode::Edit { "Updated" } else { "Added" };
                self.notify
                    .call(Feedback::Success(format!("{verb} {}", saved.name)));
                self.close();
                self.refetch.call(());
            }
            Err(err) => {
                tracing::warn!(error = %err, "customer save failed");
                if !err.field_errors.is_empty() {
                    self.field_errors.set(err.field_errors.clone());
                }
                self.notify.call(Feedback::Error(err.user_message()));
            }
        }
    }
}

/// Page-local customer action state wired to toasts and the given `refetch`.
pub fn use_customer_actions(refetch: Callback) -> CustomerActions {
    let services = use_context::<Services>();
    let toast = use_toast();

    let notify = use_callback(move |feedback: Feedback| match feedback {
        Feedback::Success(msg) => {
            toast.success(msg, ToastOptions::new());
        }
        Feedback::Error(msg) => {
            toast.error(msg, ToastOptions::new());
        }
    });

    CustomerActions {
        selected: use_signal(|| None),
        dialog_open: use_signal(|| false),
        mode: use_signal(DialogMode::default),
        form: use_signal(CustomerForm::default),
        field_errors: use_signal(HashMap::new),
        confirm_open: use_signal(|| false),
        is_deleting: use_signal(|| false),
        services: use_hook(move || CopyValue::new(services)),
        notify,
        refetch,
    }
}
