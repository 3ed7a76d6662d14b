pub mod customers;
pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod notifications;
pub mod sign_in;
pub mod users;

use dioxus::prelude::*;

use customers::Customers;
use dashboard::Dashboard;
use landing::Landing;
use not_found::NotFound;
use notifications::Notifications;
use sign_in::Auth;
use users::Users;

/// Application routes.
///
/// Guarded pages wrap their content in [`RouteGuard`](crate::guard::RouteGuard)
/// with their own policy instead of sharing a layout, since the required role
/// differs per page.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    Auth {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/customers")]
    Customers {},
    #[route("/users")]
    Users {},
    #[route("/notifications")]
    Notifications {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthPhase;
    use crate::testing::{user, ConsoleDom};
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;
    use std::str::FromStr;

    #[test]
    fn paths_are_exact() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Auth {}.to_string(), "/auth");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Customers {}.to_string(), "/customers");
        assert_eq!(Route::Users {}.to_string(), "/users");
        assert_eq!(Route::Notifications {}.to_string(), "/notifications");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let route = Route::from_str("/reports/2024").expect("catch-all route parses");
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["reports".to_string(), "2024".to_string()]
            }
        );
    }

    #[tokio::test]
    async fn signed_out_visitor_is_sent_to_sign_in() {
        for path in ["/notifications", "/users", "/customers", "/dashboard"] {
            let console = ConsoleDom::mount(AuthPhase::SignedOut, path).await;
            assert_eq!(console.route(), "/auth", "from {path}");
            assert!(console.html().contains("Sign In"), "from {path}");
        }
    }

    #[tokio::test]
    async fn non_admin_on_admin_pages_is_sent_to_dashboard() {
        for role in [UserRole::Member, UserRole::Manager] {
            for path in ["/users", "/notifications"] {
                let console = ConsoleDom::mount(AuthPhase::SignedIn(user(role)), path).await;
                assert_eq!(console.route(), "/dashboard", "{role:?} on {path}");
                assert!(!console.html().contains("Console accounts"), "{role:?} on {path}");
            }
        }
    }

    #[tokio::test]
    async fn admin_reaches_admin_pages() {
        let console = ConsoleDom::mount(AuthPhase::SignedIn(user(UserRole::Admin)), "/users").await;
        assert_eq!(console.route(), "/users");
        assert!(console.html().contains("Console accounts and their roles"));

        let console =
            ConsoleDom::mount(AuthPhase::SignedIn(user(UserRole::Admin)), "/notifications").await;
        assert_eq!(console.route(), "/notifications");
        assert!(console.html().contains("Mark all read"));
    }

    #[tokio::test]
    async fn member_stays_on_customer_pages() {
        let member = AuthPhase::SignedIn(user(UserRole::Member));
        let console = ConsoleDom::mount(member, "/customers").await;
        assert_eq!(console.route(), "/customers");
        assert!(console.html().contains("Acme Corporation"));
    }

    #[tokio::test]
    async fn loading_session_renders_nothing_and_stays_put() {
        let mut console = ConsoleDom::mount(AuthPhase::Loading, "/users").await;
        assert_eq!(console.route(), "/users");
        let html = console.html();
        assert!(!html.contains("Console accounts"), "{html}");
        assert!(!html.contains("Sign In"), "{html}");

        // The restore settles as signed out: only then does the guard redirect.
        console.set_phase(AuthPhase::SignedOut).await;
        assert_eq!(console.route(), "/auth");
    }

    #[tokio::test]
    async fn restore_to_admin_shows_the_page_without_redirecting() {
        let mut console = ConsoleDom::mount(AuthPhase::Loading, "/notifications").await;
        console
            .set_phase(AuthPhase::SignedIn(user(UserRole::Admin)))
            .await;
        assert_eq!(console.route(), "/notifications");
        assert!(console.html().contains("Mark all read"));
    }

    #[tokio::test]
    async fn sign_in_page_forwards_signed_in_users() {
        let console = ConsoleDom::mount(AuthPhase::SignedIn(user(UserRole::Member)), "/auth").await;
        assert_eq!(console.route(), "/dashboard");

        let console = ConsoleDom::mount(AuthPhase::SignedOut, "/auth").await;
        assert_eq!(console.route(), "/auth");
        assert!(console.html().contains("Sign In"));
    }

    #[tokio::test]
    async fn signing_in_on_the_auth_page_moves_to_dashboard() {
        let mut console = ConsoleDom::mount(AuthPhase::SignedOut, "/auth").await;
        console
            .set_phase(AuthPhase::SignedIn(user(UserRole::Admin)))
            .await;
        assert_eq!(console.route(), "/dashboard");
    }

    #[tokio::test]
    async fn landing_goes_to_sign_in() {
        let console = ConsoleDom::mount(AuthPhase::SignedOut, "/").await;
        assert_eq!(console.route(), "/auth");
    }
}
