//! Notification domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

/// An entry in the notification drawer.
///
/// The store keeps notifications newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification with a fresh id, stamped now.
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Warning)
    }
}
