//! Route guard shared by every protected page.
//!
//! A page declares a [`GuardPolicy`]; [`evaluate`] turns the current
//! [`AuthStatus`] into a [`GuardState`], and [`use_route_guard`] issues the
//! redirect for a denied state. Guards only shape the UI. The collaborators
//! behind the pages still have to enforce access on their own.

use dioxus::prelude::*;
use shared_types::{AuthStatus, UserRole};

use crate::auth::use_auth;
use crate::routes::Route;

/// Access rule for a page.
#[derive(Clone, Debug, PartialEq)]
pub struct GuardPolicy {
    /// Role the signed-in user must satisfy; `None` admits any signed-in user.
    pub required_role: Option<UserRole>,
    /// Where a signed-in user lacking `required_role` is sent.
    pub denied_route: Route,
}

impl GuardPolicy {
    pub fn authenticated() -> Self {
        Self {
            required_role: None,
            denied_route: Route::Dashboard {},
        }
    }

    pub fn admin_only() -> Self {
        Self {
            required_role: Some(UserRole::Admin),
            denied_route: Route::Dashboard {},
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    /// Auth status unresolved: render nothing, redirect nowhere.
    Pending,
    Allowed,
    /// Render nothing and navigate to the route.
    Denied(Route),
}

pub fn evaluate(status: &AuthStatus, policy: &GuardPolicy) -> GuardState {
    if status.is_loading {
        return GuardState::Pending;
    }
    if !status.is_authenticated {
        return GuardState::Denied(Route::Auth {});
    }
    match &policy.required_role {
        Some(required) if !status.has_role(required) => {
            GuardState::Denied(policy.denied_route.clone())
        }
        _ => GuardState::Allowed,
    }
}

/// Emits a redirect only when the guard enters a denied state.
///
/// Seeing the same denial again is a no-op; passing through `Pending` or
/// `Allowed` re-arms it.
#[derive(Debug, Default)]
pub struct RedirectTracker {
    issued: Option<Route>,
}

impl RedirectTracker {
    pub fn observe(&mut self, state: &GuardState) -> Option<Route> {
        match state {
            GuardState::Denied(target) => {
                if self.issued.as_ref() == Some(target) {
                    None
                } else {
                    self.issued = Some(target.clone());
                    Some(target.clone())
                }
            }
            GuardState::Pending | GuardState::Allowed => {
                self.issued = None;
                None
            }
        }
    }
}

/// Evaluate `policy` against the auth context and redirect when denied.
///
/// The evaluation is memoised over the auth phase, so the effect sees every
/// change and always acts on the latest status.
pub fn use_route_guard(policy: GuardPolicy) -> GuardState {
    let auth = use_auth();
    let mut tracker = use_signal(RedirectTracker::default);
    let state = use_memo(move || evaluate(&auth.status(), &policy));

    use_effect(move || {
        let current = state();
        if let Some(target) = tracker.with_mut(|t| t.observe(&current)) {
            tracing::info!(to = %target, "route guard redirect");
            navigator().replace(target);
        }
    });

    state()
}

/// Renders `children` once `policy` admits the current user, nothing otherwise.
#[component]
pub fn RouteGuard(policy: GuardPolicy, children: Element) -> Element {
    let state = use_route_guard(policy);

    rsx! {
        GuardView { state, {children} }
    }
}

/// Render half of [`RouteGuard`].
#[component]
pub fn GuardView(state: GuardState, children: Element) -> Element {
    match state {
        GuardState::Allowed => rsx! { {children} },
        GuardState::Pending | GuardState::Denied(_) => rsx! {},
    }
}
