use dioxus::prelude::*;
use shared_types::{AuthStatus, AuthUser, CustomerPermissions};

use crate::services::Services;

/// Where the session is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthPhase {
    /// Session restore has not finished yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn(AuthUser),
}

impl AuthPhase {
    pub fn status(&self) -> AuthStatus {
        match self {
            AuthPhase::Loading => AuthStatus::loading(),
            AuthPhase::SignedOut => AuthStatus::signed_out(),
            AuthPhase::SignedIn(user) => AuthStatus::signed_in(user.role),
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthPhase::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Global authentication state.
///
/// Pages only read it; the session restore in `App`, the sign-in page and
/// the sign-out action are the writers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub phase: Signal<AuthPhase>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: Signal::new(AuthPhase::Loading),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.phase.read().status()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.phase.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated
    }

    pub fn set_user(&mut self, user: AuthUser) {
        tracing::info!(username = %user.username, role = user.role.as_str(), "signed in");
        self.phase.set(AuthPhase::SignedIn(user));
    }

    pub fn clear_auth(&mut self) {
        self.phase.set(AuthPhase::SignedOut);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Reactive view of the auth status; re-renders the caller on every change.
pub fn use_auth_status() -> AuthStatus {
    use_auth().status()
}

/// Hook to check if the current user has the admin role.
pub fn use_is_admin() -> bool {
    use_auth_status().is_admin
}

/// Customer capabilities of the signed-in user.
pub fn use_customer_permissions() -> CustomerPermissions {
    let auth = use_auth();
    let phase = auth.phase.read();
    CustomerPermissions::for_role(phase.user().map(|u| &u.role))
}

/// Resolve the session once on mount.
///
/// The phase stays `Loading` until the session source answers; a failed
/// restore is treated as signed out.
pub fn use_session_restore() {
    let mut auth = use_auth();
    let services = use_context::<Services>();

    use_hook(move || {
        spawn(async move {
            match services.sessions.restore() {
                Ok(Some(user)) => auth.set_user(user),
                Ok(None) => {
                    tracing::debug!("no session to restore");
                    auth.clear_auth();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "session restore failed, treating as signed out");
                    auth.clear_auth();
                }
            }
        });
    });
}

/// End the session and return to the sign-in page.
pub fn sign_out(mut auth: AuthState, services: &Services) {
    if let Err(err) = services.sessions.sign_out() {
        tracing::warn!(error = %err, "sign-out failed on the session source");
    }
    auth.clear_auth();
    navigator().replace(crate::routes::Route::Auth {});
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;

    fn user(role: UserRole) -> AuthUser {
        AuthUser {
            id: 7,
            username: "rin".into(),
            display_name: "Rin Tanaka".into(),
            email: "rin@example.com".into(),
            role,
        }
    }

    #[test]
    fn phase_starts_loading() {
        assert_eq!(AuthPhase::default(), AuthPhase::Loading);
        assert_eq!(AuthPhase::Loading.status(), AuthStatus::loading());
    }

    #[test]
    fn signed_in_phase_maps_role() {
        let status = AuthPhase::SignedIn(user(UserRole::Admin)).status();
        assert!(status.is_authenticated);
        assert!(status.is_admin);

        let status = AuthPhase::SignedIn(user(UserRole::Member)).status();
        assert!(status.is_authenticated);
        assert!(!status.is_admin);
    }

    #[test]
    fn signed_out_phase_has_no_user() {
        assert_eq!(AuthPhase::SignedOut.user(), None);
        assert_eq!(AuthPhase::SignedOut.status(), AuthStatus::signed_out());
    }
}
