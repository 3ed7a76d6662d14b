use serde::{Deserialize, Serialize};

/// Console role controlling which pages and actions a user may reach.
///
/// - `Member`: read-only access to the customer list.
/// - `Manager`: can add and edit customers.
/// - `Admin`: full access, including the users and notifications pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Member,
    Manager,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable label for badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Member => "Member",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Admin",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    /// Admin satisfies all roles. Manager satisfies itself + Member.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Manager => matches!(required, UserRole::Manager | UserRole::Member),
            UserRole::Member => matches!(required, UserRole::Member),
        }
    }
}

/// The signed-in user as seen by the console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl AuthUser {
    /// Up to two uppercase initials of the display name.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Snapshot of the session the pages make access decisions from.
///
/// While `is_loading` is set the other flags are false and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthStatus {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub is_admin: bool,
    /// Role of the signed-in user; `None` while loading or signed out.
    pub role: Option<UserRole>,
}

impl AuthStatus {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(role: UserRole) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            is_admin: role == UserRole::Admin,
            role: Some(role),
        }
    }

    /// True when the session is resolved, authenticated and the user's
    /// role satisfies `required`.
    pub fn has_role(&self, required: &UserRole) -> bool {
        !self.is_loading
            && self.is_authenticated
            && self.role.map(|r| r.satisfies(required)).unwrap_or(false)
    }
}

/// A console account as listed on the users page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<&DirectoryUser> for AuthUser {
    fn from(u: &DirectoryUser) -> Self {
        AuthUser {
            id: u.id,
            username: u.username.clone(),
            display_name: u.display_name.clone(),
            email: u.email.clone(),
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_satisfies_every_role() {
        for required in [UserRole::Member, UserRole::Manager, UserRole::Admin] {
            assert!(UserRole::Admin.satisfies(&required));
        }
    }

    #[test]
    fn member_only_satisfies_member() {
        assert!(UserRole::Member.satisfies(&UserRole::Member));
        assert!(!UserRole::Member.satisfies(&UserRole::Manager));
        assert!(!UserRole::Member.satisfies(&UserRole::Admin));
    }

    #[test]
    fn manager_does_not_satisfy_admin() {
        assert!(UserRole::Manager.satisfies(&UserRole::Member));
        assert!(!UserRole::Manager.satisfies(&UserRole::Admin));
    }

    #[test]
    fn roles_deserialize_lowercase() {
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::Manager);
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn loading_status_trusts_nothing() {
        let status = AuthStatus::loading();
        assert!(status.is_loading);
        assert!(!status.is_authenticated);
        assert!(!status.is_admin);
        assert!(!status.has_role(&UserRole::Member));
    }

    #[test]
    fn signed_in_status_derives_admin_flag() {
        assert!(AuthStatus::signed_in(UserRole::Admin).is_admin);
        assert!(!AuthStatus::signed_in(UserRole::Manager).is_admin);
        assert!(AuthStatus::signed_in(UserRole::Manager).has_role(&UserRole::Member));
    }

    #[test]
    fn initials_take_first_two_words() {
        let user = AuthUser {
            id: 1,
            username: "ada".into(),
            display_name: "ada byron lovelace".into(),
            email: "ada@example.com".into(),
            role: UserRole::Admin,
        };
        assert_eq!(user.initials(), "AB");
    }

    #[test]
    fn directory_user_defaults() {
        let user: DirectoryUser = serde_json::from_str(
            r#"{"id":3,"username":"kim","display_name":"Kim","email":"kim@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Member);
        assert!(user.active);
    }
}
