//! # LogWriter - simple notification logger
//!
//! A minimal observer that records every notification through `tracing`.
//! Use it for tests or demos. It never reports an event as handled, so it does
//! not interfere with halt-on-first passes.
//!
//! ## Example output (with a `fmt` subscriber)
//! ```text
//! INFO eventvisor::observers::log: [notify] event="request.before_send" context="GET /"
//! INFO eventvisor::observers::log: [notify] event="request.complete"
//! ```

use std::fmt;

use crate::error::ObserverError;
use crate::observers::Observer;

/// Notification writer observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S, C> Observer<S, C> for LogWriter
where
    S: ?Sized,
    C: ?Sized + fmt::Debug,
{
    fn update(
        &self,
        _subject: &S,
        event: &str,
        context: Option<&C>,
    ) -> Result<bool, ObserverError> {
        match context {
            Some(ctx) => tracing::info!(event, context = ?ctx, "[notify]"),
            None => tracing::info!(event, "[notify]"),
        }
        Ok(false)
    }

    fn kind(&self) -> &str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_consumes() {
        let w = LogWriter::new();
        assert!(!Observer::<(), str>::update(&w, &(), "sent", Some("ctx")).unwrap());
        assert!(!Observer::<(), str>::update(&w, &(), "sent", None).unwrap());
        assert_eq!(Observer::<(), str>::kind(&w), "LogWriter");
    }
}
