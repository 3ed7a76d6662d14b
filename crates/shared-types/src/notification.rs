use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl NotificationLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "Info",
            NotificationLevel::Warning => "Warning",
            NotificationLevel::Critical => "Critical",
        }
    }
}

/// A system notification shown to administrators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub level: NotificationLevel,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Count notifications that have not been read yet.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}
