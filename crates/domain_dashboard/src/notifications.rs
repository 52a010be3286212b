//! Notification feed
//!
//! Recent status events for the dashboard side panel. The feed can be
//! narrowed to one notification kind; unread counts are reported both for
//! the narrowed view and for the feed as a whole.

use serde::{Deserialize, Serialize};

use core_kernel::NotificationId;

use crate::record::PolicyStatus;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Warning,
        NotificationKind::Info,
        NotificationKind::Success,
        NotificationKind::Error,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// One entry in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub status: PolicyStatus,
    pub title: String,
    pub message: String,
    /// Relative age as displayed, e.g. "2 hours ago"
    pub age: String,
    pub is_read: bool,
    pub policy_number: Option<String>,
}

/// Ordered list of notifications, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Entries of `kind`, or every entry when `kind` is `None`
    pub fn filter(&self, kind: Option<NotificationKind>) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| kind.map_or(true, |k| n.kind == k))
            .collect()
    }

    /// Unread entries across the whole feed
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Unread entries within the `kind` view
    pub fn unread_in(&self, kind: Option<NotificationKind>) -> usize {
        self.filter(kind).into_iter().filter(|n| !n.is_read).count()
    }

    /// Entries that mention a policy number
    pub fn for_policy(&self, policy_number: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.policy_number.as_deref() == Some(policy_number))
            .collect()
    }
}
