use dioxus::prelude::*;
use shared_types::{unread_count, AppError, CustomerStatus};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardGrid, CardHeader, CardTitle, PageHeader,
    Skeleton,
};

use crate::auth::use_is_admin;
use crate::components::PageShell;
use crate::guard::{GuardPolicy, RouteGuard};
use crate::services::Services;

/// Number of skeleton placeholders shown while data is loading.
const SKELETON_COUNT: usize = 3;

/// Counts shown on the dashboard. Admin-only figures stay `None` for
/// everyone else.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardSummary {
    pub customers: usize,
    pub active_customers: usize,
    pub users: Option<usize>,
    pub unread_notifications: Option<usize>,
}

impl DashboardSummary {
    pub fn load(services: &Services, include_admin: bool) -> Result<Self, AppError> {
        let customers = services.customers.list()?;
        let active_customers = customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active)
            .count();

        let (users, unread_notifications) = if include_admin {
            let users = services.users.list_users()?.len();
            let unread = unread_count(&services.notifications.list_notifications()?);
            (Some(users), Some(unread))
        } else {
            (None, None)
        };

        Ok(Self {
            customers: customers.len(),
            active_customers,
            users,
            unread_notifications,
        })
    }
}

/// Landing page after sign-in, open to every signed-in user.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RouteGuard { policy: GuardPolicy::authenticated(),
            PageShell { title: "Dashboard", DashboardContent {} }
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let services = use_context::<Services>();
    let is_admin = use_is_admin();

    let mut summary = use_resource(move || {
        let services = services.clone();
        async move {
            DashboardSummary::load(&services, is_admin).map_err(|err| {
                tracing::warn!(error = %err, "dashboard summary failed");
                err
            })
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader { title: "Dashboard" }

        match summary() {
            None => rsx! { LoadingSkeletons {} },
            Some(Err(_)) => rsx! {
                Card {
                    CardHeader { CardTitle { "Error" } }
                    CardContent {
                        p { class: "dashboard-error-text", "Failed to load dashboard data." }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| summary.restart(),
                            "Retry"
                        }
                    }
                }
            },
            Some(Ok(stats)) => rsx! { StatsGrid { stats } },
        }
    }
}

#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        CardGrid {
            for i in 0..SKELETON_COUNT {
                Card { key: "{i}",
                    CardHeader { Skeleton { style: "height: 1rem; width: 60%;" } }
                    CardContent { Skeleton { style: "height: 2rem; width: 40%;" } }
                }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: DashboardSummary) -> Element {
    rsx! {
        CardGrid {
            StatCard {
                title: "Customers",
                value: "{stats.customers}",
                detail: "{stats.active_customers} active",
            }
            if let Some(users) = stats.users {
                StatCard { title: "Users", value: "{users}" }
            }
            if let Some(unread) = stats.unread_notifications {
                StatCard { title: "Unread Notifications", value: "{unread}" }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                span { class: "stat-value", "{value}" }
                if let Some(detail) = &detail {
                    p { class: "stat-detail", "{detail}" }
                }
            }
        }
    }
}
