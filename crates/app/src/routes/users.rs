use dioxus::prelude::*;
use shared_types::{DirectoryUser, UserRole};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, Skeleton,
};

use crate::components::PageShell;
use crate::guard::{GuardPolicy, RouteGuard};
use crate::services::Services;

/// Badge colour for a role, shared with the page shell.
pub fn role_badge_variant(role: &UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Danger,
        UserRole::Manager => BadgeVariant::Warning,
        UserRole::Member => BadgeVariant::Neutral,
    }
}

/// User directory, admins only.
#[component]
pub fn Users() -> Element {
    rsx! {
        RouteGuard { policy: GuardPolicy::admin_only(),
            PageShell { title: "Users", UserDirectoryPanel {} }
        }
    }
}

#[component]
fn UserDirectoryPanel() -> Element {
    let services = use_context::<Services>();

    let users = use_resource(move || {
        let directory = services.users.clone();
        async move {
            directory.list_users().map_err(|err| {
                tracing::warn!(error = %err, "user directory failed");
                err
            })
        }
    });

    rsx! {
        PageHeader { title: "Users", subtitle: "Console accounts and their roles" }

        match users() {
            None => rsx! { Skeleton { rows: 5, style: "height: 2.25rem;" } },
            Some(Err(_)) => rsx! {
                p { class: "page-error", "Failed to load users" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                Card { CardContent { "No users found." } }
            },
            Some(Ok(list)) => rsx! { UserTable { users: list } },
        }
    }
}

#[component]
fn UserTable(users: Vec<DirectoryUser>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Username" }
                DataTableColumn { "Email" }
                DataTableColumn { "Role" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for user in users {
                    DataTableRow { key: "{user.id}",
                        DataTableCell { "{user.display_name}" }
                        DataTableCell { "{user.username}" }
                        DataTableCell { "{user.email}" }
                        DataTableCell {
                            Badge { variant: role_badge_variant(&user.role), "{user.role.display_name()}" }
                        }
                        DataTableCell {
                            if user.active {
                                Badge { variant: BadgeVariant::Success, "Active" }
                            } else {
                                Badge { variant: BadgeVariant::Neutral, "Disabled" }
                            }
                        }
                    }
                }
            }
        }
    }
}
