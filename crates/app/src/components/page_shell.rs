use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdBriefcase, LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, AuthStatus, FeatureFlags};
use shared_ui::{Badge, Button, ButtonVariant};

use crate::auth::{sign_out, use_auth};
use crate::routes::users::role_badge_variant;
use crate::routes::Route;
use crate::services::Services;

/// One entry of the top navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Links visible to `status`. Admin pages are listed only for admins, and
/// the notifications link also needs its feature flag.
pub fn nav_items(status: &AuthStatus, features: &FeatureFlags) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Dashboard",
            route: Route::Dashboard {},
        },
        NavItem {
            label: "Customers",
            route: Route::Customers {},
        },
    ];
    if status.is_admin {
        items.push(NavItem {
            label: "Users",
            route: Route::Users {},
        });
        if features.notifications {
            items.push(NavItem {
                label: "Notifications",
                route: Route::Notifications {},
            });
        }
    }
    items
}

fn nav_icon(route: &Route) -> Element {
    match route {
        Route::Dashboard {} => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
        },
        Route::Customers {} => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
        },
        Route::Users {} => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
        },
        Route::Notifications {} => rsx! {
            Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
        },
        _ => rsx! {},
    }
}

/// Console chrome around a guarded page: brand, navigation, current user
/// and sign-out.
#[component]
pub fn PageShell(title: String, children: Element) -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let services = use_context::<Services>();
    let config = use_context::<AppConfig>();

    let items = nav_items(&auth.status(), &config.features);
    let user = auth.current_user();
    let brand = config.console.title.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page_shell.css") }
        document::Title { "{title} · {brand}" }

        div { class: "console-shell",
            header { class: "console-topbar",
                span { class: "console-brand", "{brand}" }

                nav { class: "console-nav",
                    for item in items {
                        Link {
                            key: "{item.label}",
                            to: item.route.clone(),
                            class: if item.route == route { "console-nav-link active" } else { "console-nav-link" },
                            {nav_icon(&item.route)}
                            span { "{item.label}" }
                        }
                    }
                }

                div { class: "console-user",
                    if let Some(user) = user {
                        span { class: "console-user-initials", "{user.initials()}" }
                        span { class: "console-user-name", "{user.display_name}" }
                        Badge { variant: role_badge_variant(&user.role), "{user.role.display_name()}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| sign_out(auth, &services),
                        "Sign Out"
                    }
                }
            }

            main { class: "console-main", {children} }
        }
    }
}
