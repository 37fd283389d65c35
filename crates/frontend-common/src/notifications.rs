//! Transient notifications
//!
//! A [`NotificationQueue`] holds the notifications currently on screen in
//! insertion order. It is a Yew reducer; [`crate::components::NotificationProvider`]
//! owns one and removes each notification again once its duration elapses.

use crate::config::NotificationConfig;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use uuid::Uuid;
use yew::Reducible;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// CSS modifier used by the display surface
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A single notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Auto-expiry in milliseconds; `None` keeps it until dismissed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Notification {
    /// Create a notification with a fresh id and the default duration
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            duration: Some(NotificationConfig::DEFAULT_DURATION_MS),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    /// Override the auto-expiry. Zero means the notification stays.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration = (duration_ms > 0).then_some(duration_ms);
        self
    }

    /// Keep the notification until it is dismissed
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// Notifications currently displayed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id
    pub fn push(&mut self, notification: Notification) -> String {
        let id = notification.id.clone();
        self.items.push(notification);
        id
    }

    /// Remove a notification. Unknown ids are ignored; returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Notification queue actions
pub enum NotificationAction {
    Push(Notification),
    Remove(String),
    Clear,
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Push(notification) => {
                let mut next = (*self).clone();
                next.push(notification);
                Rc::new(next)
            }
            NotificationAction::Remove(id) => {
                if self.get(&id).is_none() {
                    return self;
                }
                let mut next = (*self).clone();
                next.remove(&id);
                Rc::new(next)
            }
            NotificationAction::Clear => Rc::new(Self::new()),
        }
    }
}
