use serde::{Deserialize, Serialize};

use crate::ViewMode;

fn enabled() -> bool {
    true
}

/// Feature flags controlling which optional console surfaces are shown.
///
/// Loaded from the `[features]` table of `console.toml`. Every field
/// defaults to `true` so that a missing or incomplete config file keeps
/// the full console visible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the notifications page link in the navigation.
    #[serde(default = "enabled")]
    pub notifications: bool,
    /// Offer the grid presentation on the customers page.
    #[serde(default = "enabled")]
    pub customer_grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications: true,
            customer_grid: true,
        }
    }
}

/// Console-level presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial presentation of the customers page.
    #[serde(default)]
    pub default_view: ViewMode,
}

fn default_title() -> String {
    "Admin Console".to_string()
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_view: ViewMode::default(),
        }
    }
}

/// Top-level config file structure matching `console.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub console: ConsoleSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// View mode the customers page should open in, honouring the grid flag.
    pub fn initial_view(&self) -> ViewMode {
        if self.features.customer_grid {
            self.console.default_view
        } else {
            ViewMode::Table
        }
    }
}
