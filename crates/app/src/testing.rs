//! Headless mounting for page-level tests.
//!
//! [`ConsoleDom`] renders the real router under a memory history with a
//! chosen auth phase, then drives effects and tasks until the dom is idle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use shared_types::{AuthUser, UserRole};

use crate::auth::{AuthPhase, AuthState};
use crate::config::app_config;
use crate::routes::Route;
use crate::services::{load_seed, Services};

/// Hands a value created inside a component back to the test body.
pub struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Slot<T> {
    pub fn fill(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    pub fn get(&self) -> T {
        self.0
            .borrow()
            .clone()
            .expect("slot is filled on the first render")
    }
}

/// Run queued effects, tasks and re-renders until nothing is left to do.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..32 {
        let idle = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_err();
        if idle {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

pub fn user(role: UserRole) -> AuthUser {
    AuthUser {
        id: 7,
        username: "kim".into(),
        display_name: "Kim Park".into(),
        email: "kim@example.com".into(),
        role,
    }
}

#[component]
fn Console(phase: AuthPhase, start: String, handles: Slot<(AuthState, Rc<dyn History>)>) -> Element {
    use_context_provider(|| app_config().clone());
    use_context_provider(|| Services::in_memory(load_seed()));
    let auth = use_context_provider(|| AuthState {
        phase: Signal::new(phase.clone()),
    });
    let history = use_context_provider(|| {
        Rc::new(MemoryHistory::with_initial_path(start.clone())) as Rc<dyn History>
    });
    use_hook(|| handles.fill((auth, history.clone())));

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// The whole console mounted at one path.
pub struct ConsoleDom {
    dom: VirtualDom,
    auth: AuthState,
    history: Rc<dyn History>,
}

impl ConsoleDom {
    pub async fn mount(phase: AuthPhase, path: &str) -> Self {
        let handles = Slot::default();
        let mut dom = VirtualDom::new_with_props(
            Console,
            ConsoleProps {
                phase,
                start: path.to_string(),
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let (auth, history) = handles.get();
        Self { dom, auth, history }
    }

    /// Path the router is showing now.
    pub fn route(&self) -> String {
        self.history.current_route()
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Replace the auth phase, as the session restore or sign-in would.
    pub async fn set_phase(&mut self, phase: AuthPhase) {
        let mut auth = self.auth;
        self.dom.in_runtime(|| auth.phase.set(phase));
        settle(&mut self.dom).await;
    }
}
