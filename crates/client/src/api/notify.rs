//! User-facing notifications
//!
//! The facade emits at most one [`NotificationEvent`] per call and hands
//! it to an injected [`NotificationReporter`]. Reporters are called
//! synchronously and their outcome is never inspected; the UI layer
//! decides how (or whether) to display the event.

use tracing::{info, warn};

/// Whether a notification celebrates or complains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient success/error message surfaced to the user interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationEvent {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }
}

/// Sink for notification events
///
/// Implementations must be cheap and non-blocking; the facade calls
/// `report` inline on the request path and ignores the result.
pub trait NotificationReporter: Send + Sync {
    fn report(&self, event: NotificationEvent);
}

/// Default reporter that writes events to the tracing log
pub struct TracingReporter;

impl NotificationReporter for TracingReporter {
    fn report(&self, event: NotificationEvent) {
        match event.kind {
            NotificationKind::Success => info!(message = %event.message, "notification"),
            NotificationKind::Error => warn!(message = %event.message, "notification"),
        }
    }
}

/// Reporter that drops every event
pub struct NullReporter;

impl NotificationReporter for NullReporter {
    fn report(&self, _event: NotificationEvent) {}
}
