use crate::UserRole;

/// Capability flags for the customers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerPermissions {
    pub can_add_customer: bool,
    pub can_edit_customer: bool,
    pub can_delete_customer: bool,
}

impl CustomerPermissions {
    /// Admin → everything, Manager → add + edit, Member or no user → nothing.
    pub fn for_role(role: Option<&UserRole>) -> Self {
        match role {
            Some(UserRole::Admin) => Self {
                can_add_customer: true,
                can_edit_customer: true,
                can_delete_customer: true,
            },
            Some(UserRole::Manager) => Self {
                can_add_customer: true,
                can_edit_customer: true,
                can_delete_customer: false,
            },
            Some(UserRole::Member) | None => Self::default(),
        }
    }

    /// Whether any row-level action should be offered.
    pub fn has_row_actions(&self) -> bool {
        self.can_edit_customer || self.can_delete_customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_gets_everything() {
        let p = CustomerPermissions::for_role(Some(&UserRole::Admin));
        assert!(p.can_add_customer && p.can_edit_customer && p.can_delete_customer);
    }

    #[test]
    fn manager_cannot_delete() {
        let p = CustomerPermissions::for_role(Some(&UserRole::Manager));
        assert!(p.can_add_customer);
        assert!(p.can_edit_customer);
        assert!(!p.can_delete_customer);
        assert!(p.has_row_actions());
    }

    #[test]
    fn member_and_anonymous_get_nothing() {
        assert_eq!(
            CustomerPermissions::for_role(Some(&UserRole::Member)),
            CustomerPermissions::default()
        );
        assert_eq!(CustomerPermissions::for_role(None), CustomerPermissions::default());
        assert!(!CustomerPermissions::default().has_row_actions());
    }
}
