//! Transient user notifications ("toasts").
//!
//! Components push [`Notification`]s into a [`MessageService`]; the front end
//! drains and shows them after each user action.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// How a notification should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Lowercase label used when printing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// One toast: a summary line and its detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Shorthand for a warning, the severity used by form errors.
    pub fn warn(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warn, summary, detail)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.as_str(), self.summary, self.detail)
    }
}

/// Queue of pending notifications.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Vec<Notification>,
}

impl MessageService {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification.
    pub fn add(&mut self, notification: Notification) {
        debug!("notification: {notification}");
        self.messages.push(notification);
    }

    /// Notifications not yet drained, oldest first.
    pub fn messages(&self) -> &[Notification] {
        &self.messages
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take every pending notification, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.messages)
    }
}
