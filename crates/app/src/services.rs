//! Collaborators the console pages talk to.
//!
//! Pages never reach these directly; they go through the `Services` context
//! so tests and alternative backends can swap implementations. The bundled
//! backend keeps everything in memory, seeded from `seed.json`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use shared_types::{
    AppError, AuthUser, Customer, CustomerForm, DirectoryUser, Notification,
};
use uuid::Uuid;

const SEED_JSON: &str = include_str!("../seed.json");

pub trait SessionService {
    /// Return the user of an existing session, if any.
    fn restore(&self) -> Result<Option<AuthUser>, AppError>;
    fn sign_in(&self, username: &str, password: &str) -> Result<AuthUser, AppError>;
    fn sign_out(&self) -> Result<(), AppError>;
}

pub trait CustomerService {
    fn list(&self) -> Result<Vec<Customer>, AppError>;
    fn create(&self, form: CustomerForm) -> Result<Customer, AppError>;
    fn update(&self, id: Uuid, form: CustomerForm) -> Result<Customer, AppError>;
    fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

pub trait UserDirectory {
    fn list_users(&self) -> Result<Vec<DirectoryUser>, AppError>;
}

pub trait NotificationFeed {
    fn list_notifications(&self) -> Result<Vec<Notification>, AppError>;
    /// Mark every notification read; returns how many changed.
    fn mark_all_read(&self) -> Result<usize, AppError>;
}

/// Collaborator handles provided to every page through context.
#[derive(Clone)]
pub struct Services {
    pub sessions: Rc<dyn SessionService>,
    pub customers: Rc<dyn CustomerService>,
    pub users: Rc<dyn UserDirectory>,
    pub notifications: Rc<dyn NotificationFeed>,
}

impl Services {
    /// All collaborators backed by one shared in-memory store.
    pub fn in_memory(seed: Seed) -> Self {
        let backend = Rc::new(InMemoryBackend::from_seed(seed));
        Self {
            sessions: backend.clone(),
            customers: backend.clone(),
            users: backend.clone(),
            notifications: backend,
        }
    }
}

/// An account in the seed file. The password is stored as a hex SHA-256
/// digest and never leaves the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    #[serde(flatten)]
    pub user: DirectoryUser,
    pub password_sha256: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Seed {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

/// Parse the bundled seed, falling back to empty stores if it is malformed.
pub fn load_seed() -> Seed {
    match Seed::from_json(SEED_JSON) {
        Ok(seed) => {
            tracing::debug!(
                accounts = seed.accounts.len(),
                customers = seed.customers.len(),
                notifications = seed.notifications.len(),
                "loaded seed data"
            );
            seed
        }
        Err(err) => {
            tracing::warn!(error = %err, "seed.json is malformed, starting with empty stores");
            Seed::default()
        }
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub struct InMemoryBackend {
    accounts: Vec<SeedAccount>,
    session: RefCell<Option<AuthUser>>,
    customers: RefCell<Vec<Customer>>,
    notifications: RefCell<Vec<Notification>>,
}

impl InMemoryBackend {
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            accounts: seed.accounts,
            session: RefCell::new(None),
            customers: RefCell::new(seed.customers),
            notifications: RefCell::new(seed.notifications),
        }
    }

    fn ensure_unique_email(&self, email: &str, except: Option<Uuid>) -> Result<(), AppError> {
        let taken = self
            .customers
            .borrow()
            .iter()
            .any(|c| Some(c.id) != except && c.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(AppError::conflict(format!(
                "A customer with email {email} already exists"
            )));
        }
        Ok(())
    }
}

impl SessionService for InMemoryBackend {
    fn restore(&self) -> Result<Option<AuthUser>, AppError> {
        Ok(self.session.borrow().clone())
    }

    fn sign_in(&self, username: &str, password: &str) -> Result<AuthUser, AppError> {
        let username = username.trim();
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.username.eq_ignore_ascii_case(username))
            .filter(|a| a.password_sha256.eq_ignore_ascii_case(&digest(password)))
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if !account.user.active {
            return Err(AppError::forbidden("This account has been disabled"));
        }

        let user = AuthUser::from(&account.user);
        *self.session.borrow_mut() = Some(user.clone());
        Ok(user)
    }

    fn sign_out(&self) -> Result<(), AppError> {
        self.session.borrow_mut().take();
        Ok(())
    }
}

impl CustomerService for InMemoryBackend {
    fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.borrow().clone())
    }

    fn create(&self, form: CustomerForm) -> Result<Customer, AppError> {
        let form = form.normalized();
        form.validate()?;
        self.ensure_unique_email(&form.email, None)?;

        let customer = form.into_customer(Uuid::new_v4(), Utc::now());
        self.customers.borrow_mut().push(customer.clone());
        Ok(customer)
    }

    fn update(&self, id: Uuid, form: CustomerForm) -> Result<Customer, AppError> {
        let form = form.normalized();
        form.validate()?;
        self.ensure_unique_email(&form.email, Some(id))?;

        let mut customers = self.customers.borrow_mut();
        let existing = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Customer {id} not found")))?;
        let updated = form.into_customer(existing.id, existing.created_at);
        *existing = updated.clone();
        Ok(updated)
    }

    fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut customers = self.customers.borrow_mut();
        let before = customers.len();
        customers.retain(|c| c.id != id);
        if customers.len() == before {
            return Err(AppError::not_found(format!("Customer {id} not found")));
        }
        Ok(())
    }
}

impl UserDirectory for InMemoryBackend {
    fn list_users(&self) -> Result<Vec<DirectoryUser>, AppError> {
        Ok(self.accounts.iter().map(|a| a.user.clone()).collect())
    }
}

impl NotificationFeed for InMemoryBackend {
    fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let mut items = self.notifications.borrow().clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    fn mark_all_read(&self) -> Result<usize, AppError> {
        let mut changed = 0;
        for n in self.notifications.borrow_mut().iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        Ok(changed)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, CustomerStatus, UserRole};

    pub(crate) fn backend() -> InMemoryBackend {
        InMemoryBackend::from_seed(load_seed())
    }

    fn form(name: &str, email: &str) -> CustomerForm {
        CustomerForm {
            name: name.to_string(),
            email: email.to_string(),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn bundled_seed_parses() {
        let seed = Seed::from_json(SEED_JSON).expect("seed.json must parse");
        assert!(!seed.accounts.is_empty());
        assert!(!seed.customers.is_empty());
        assert!(!seed.notifications.is_empty());
    }

    #[test]
    fn sign_in_checks_the_password_digest() {
        let backend = backend();
        let user = backend.sign_in("admin", "admin123").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(backend.restore().unwrap(), Some(user));

        let err = backend.sign_in("admin", "wrong").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn disabled_accounts_cannot_sign_in() {
        let err = backend().sign_in("former", "former123").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
    }

    #[test]
    fn sign_out_clears_the_session() {
        let backend = backend();
        backend.sign_in("member", "member123").unwrap();
        backend.sign_out().unwrap();
        assert_eq!(backend.restore().unwrap(), None);
    }

    #[test]
    fn create_update_delete_customer() {
        let backend = backend();
        let before = backend.list().unwrap().len();

        let created = backend.create(form(" Initech ", "it@initech.test")).unwrap();
        assert_eq!(created.name, "Initech");
        assert_eq!(backend.list().unwrap().len(), before + 1);

        let mut edit = CustomerForm::from_customer(&created);
        edit.status = CustomerStatus::Inactive;
        let updated = backend.update(created.id, edit).unwrap();
        assert_eq!(updated.status, CustomerStatus::Inactive);
        assert_eq!(updated.created_at, created.created_at);

        backend.delete(created.id).unwrap();
        assert_eq!(backend.list().unwrap().len(), before);
        assert_eq!(
            backend.delete(created.id).unwrap_err().kind,
            AppErrorKind::NotFound
        );
    }

    #[test]
    fn create_rejects_invalid_and_duplicate_customers() {
        let backend = backend();
        let err = backend.create(form("", "nobody")).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);

        let existing = backend.list().unwrap()[0].email.to_uppercase();
        let err = backend.create(form("Copy", &existing)).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
    }

    #[test]
    fn mark_all_read_reports_changes_once() {
        let backend = backend();
        let unread = shared_types::unread_count(&backend.list_notifications().unwrap());
        assert!(unread > 0);
        assert_eq!(backend.mark_all_read().unwrap(), unread);
        assert_eq!(backend.mark_all_read().unwrap(), 0);
    }

    #[test]
    fn notifications_are_newest_first() {
        let items = backend().list_notifications().unwrap();
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
