use dioxus::prelude::*;
use shared_types::{unread_count, AppConfig, Notification, NotificationLevel};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PageHeader, Skeleton, ToastOptions,
};

use crate::components::PageShell;
use crate::guard::{GuardPolicy, RouteGuard};
use crate::services::Services;

fn level_badge_variant(level: NotificationLevel) -> BadgeVariant {
    match level {
        NotificationLevel::Info => BadgeVariant::Neutral,
        NotificationLevel::Warning => BadgeVariant::Warning,
        NotificationLevel::Critical => BadgeVariant::Danger,
    }
}

/// System notifications. Uses the admin policy like the users page.
#[component]
pub fn Notifications() -> Element {
    rsx! {
        RouteGuard { policy: GuardPolicy::admin_only(),
            PageShell { title: "Notifications", NotificationsPanel {} }
        }
    }
}

#[component]
fn NotificationsPanel() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_context::<Services>();
    let toast = use_toast();

    let feed = services.notifications.clone();
    let mut items = use_resource(move || {
        let feed = feed.clone();
        async move {
            feed.list_notifications().map_err(|err| {
                tracing::warn!(error = %err, "notification feed failed");
                err
            })
        }
    });

    if !config.features.notifications {
        return rsx! {
            PageHeader { title: "Notifications" }
            Card { CardContent { "Notifications are turned off for this console." } }
        };
    }

    let unread = items()
        .and_then(Result::ok)
        .map(|list| unread_count(&list))
        .unwrap_or(0);
    let subtitle = (unread > 0).then(|| format!("{unread} unread"));

    let mark_all_read = move |_: MouseEvent| match services.notifications.mark_all_read() {
        Ok(changed) => {
            tracing::info!(changed, "notifications marked read");
            toast.success(
                format!("Marked {changed} notification(s) read"),
                ToastOptions::new(),
            );
            items.restart();
        }
        Err(err) => {
            tracing::warn!(error = %err, "mark all read failed");
            toast.error(err.user_message(), ToastOptions::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notifications.css") }

        PageHeader { title: "Notifications", subtitle,
            Button {
                variant: ButtonVariant::Secondary,
                disabled: unread == 0,
                onclick: mark_all_read,
                "Mark all read"
            }
        }

        match items() {
            None => rsx! { Skeleton { rows: 3, style: "height: 3rem;" } },
            Some(Err(_)) => rsx! {
                p { class: "page-error", "Failed to load notifications" }
            },
            Some(Ok(list)) => rsx! { NotificationList { items: list } },
        }
    }
}

#[component]
fn NotificationList(items: Vec<Notification>) -> Element {
    if items.is_empty() {
        return rsx! {
            Card { CardContent { "You're all caught up." } }
        };
    }

    rsx! {
        ul { class: "notification-list",
            for item in items {
                NotificationItem { key: "{item.id}", item }
            }
        }
    }
}

#[component]
fn NotificationItem(item: Notification) -> Element {
    let when = item.created_at.format("%Y-%m-%d %H:%M").to_string();

    rsx! {
        li { class: if item.read { "notification-item" } else { "notification-item unread" },
            Card {
                CardHeader {
                    div { class: "notification-heading",
                        CardTitle { "{item.title}" }
                        Badge { variant: level_badge_variant(item.level), "{item.level.display_name()}" }
                    }
                    span { class: "notification-time", "{when}" }
                }
                if !item.body.is_empty() {
                    CardContent { "{item.body}" }
                }
            }
        }
    }
}
