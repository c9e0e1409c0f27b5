//! Error types used by observers and the notification loop.
//!
//! This module defines two error enums:
//!
//! - [`ObserverError`] - raised by an individual [`Observer::update`](crate::Observer::update).
//! - [`NotifyError`] - raised by a notification pass that was aborted by an observer.
//!
//! Registry misuse (re-attach, detaching something absent, empty filters) is never
//! an error. The only failure path is an observer refusing an event.

use thiserror::Error;

/// # Errors produced by an observer's `update`.
///
/// Returning any of these from [`Observer::update`](crate::Observer::update)
/// aborts the current notification pass.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ObserverError {
    /// The observer could not handle the event.
    #[error("update failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Any other error source bubbled up from observer internals.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ObserverError {
    /// Shorthand for [`ObserverError::Fail`].
    ///
    /// # Example
    /// ```
    /// use eventvisor::ObserverError;
    ///
    /// let err = ObserverError::fail("disk full");
    /// assert_eq!(err.to_string(), "update failed: disk full");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        ObserverError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::Fail { .. } => "observer_failed",
            ObserverError::Other(_) => "observer_error",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ObserverError::Fail { error } => format!("error: {error}"),
            ObserverError::Other(source) => format!("source: {source}"),
        }
    }
}

/// # Errors produced by a notification pass.
///
/// The pass stops at the first failing observer. Results gathered before the
/// failure are discarded and the remaining observers are not invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// An observer failed while handling the event.
    #[error("observer '{observer}' aborted event '{event}' at position {position}: {source}")]
    Aborted {
        /// Kind of the failing observer.
        observer: String,
        /// Event name being dispatched.
        event: String,
        /// Zero-based position of the observer in notification order.
        position: usize,
        /// The observer's own error.
        source: ObserverError,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::{NotifyError, ObserverError};
    ///
    /// let err = NotifyError::Aborted {
    ///     observer: "audit".into(),
    ///     event: "request.sent".into(),
    ///     position: 2,
    ///     source: ObserverError::fail("boom"),
    /// };
    /// assert_eq!(err.as_label(), "notify_aborted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Aborted { .. } => "notify_aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::Aborted {
                observer,
                event,
                position,
                source,
            } => format!(
                "aborted event={event} observer={observer} position={position}; {}",
                source.as_message()
            ),
        }
    }

    /// Returns the observer error that aborted the pass.
    pub fn observer_error(&self) -> &ObserverError {
        match self {
            NotifyError::Aborted { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_observer_error_labels() {
        assert_eq!(ObserverError::fail("x").as_label(), "observer_failed");

        let io = std::io::Error::other("pipe closed");
        let other = ObserverError::from(Box::new(io) as Box<dyn std::error::Error + Send + Sync>);
        assert_eq!(other.as_label(), "observer_error");
        assert_eq!(other.to_string(), "pipe closed");
    }

    #[test]
    fn test_notify_error_exposes_source() {
        let err = NotifyError::Aborted {
            observer: "audit".into(),
            event: "sent".into(),
            position: 1,
            source: ObserverError::fail("boom"),
        };
        assert_eq!(
            err.to_string(),
            "observer 'audit' aborted event 'sent' at position 1: update failed: boom"
        );
        assert!(err.source().is_some());
        assert_eq!(err.observer_error().as_label(), "observer_failed");
        assert!(err.as_message().contains("position=1"));
    }
}
