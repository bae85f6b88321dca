//! Transient user notifications.
//!
//! The toast abstraction of the ordering screens: every outcome of a
//! user-triggered action surfaces as exactly one dismissable notification,
//! and none is ever retried or queued.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mockall::automock;
use tracing::{error, info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A refused action; nothing was changed.
    Warning,
    /// A failed action.
    Error,
}

impl Display for NotificationLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };

        f.write_str(label)
    }
}

/// A fire-and-forget message for the person taking the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,

    /// Human-readable text. For backend rejections this carries the
    /// server's message verbatim.
    pub message: String,
}

impl Notification {
    /// An informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// A warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    /// An error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for notifications raised by the ordering workflow.
#[automock]
pub trait Notifier: Send + Sync {
    /// Deliver one notification. Best-effort; never blocks the workflow.
    fn notify(&self, notification: Notification);
}

/// Notifier that routes messages through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info | NotificationLevel::Success => {
                info!("{}", notification.message);
            }
            NotificationLevel::Warning => warn!("{}", notification.message),
            NotificationLevel::Error => error!("{}", notification.message),
        }
    }
}

/// Notifier for terminal sessions; prints to stderr so notifications do not
/// interleave with tabular stdout output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("[{}] {}", notification.level, notification.message);
    }
}
