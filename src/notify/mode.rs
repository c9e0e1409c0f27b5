//! # Notification modes.
//!
//! [`NotifyMode`] decides whether a notification pass reaches every observer.
//!
//! - [`NotifyMode::Broadcast`] every observer is invoked; one result per observer (default).
//! - [`NotifyMode::HaltOnFirst`] the pass stops at the first observer returning `true`.
//!
//! ## Result shapes
//! ```text
//! observers:        A(false)  B(true)  C(false)
//! Broadcast    ──►  [false, true, false]
//! HaltOnFirst  ──►  [true]                     (C never runs)
//!
//! observers:        A(false)  B(false)
//! HaltOnFirst  ──►  [false, false]             (nobody handled it)
//! ```

/// Policy controlling how far a notification pass runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyMode {
    /// Invoke every observer regardless of results (default).
    Broadcast,
    /// Stop as soon as one observer reports the event as handled.
    HaltOnFirst,
}

impl NotifyMode {
    /// True for [`NotifyMode::HaltOnFirst`].
    #[inline]
    pub fn halts_on_first(self) -> bool {
        matches!(self, NotifyMode::HaltOnFirst)
    }
}

impl Default for NotifyMode {
    /// Returns [`NotifyMode::Broadcast`].
    fn default() -> Self {
        NotifyMode::Broadcast
    }
}

impl From<bool> for NotifyMode {
    /// Maps a `halt_on_first` flag onto a mode.
    fn from(halt_on_first: bool) -> Self {
        if halt_on_first {
            NotifyMode::HaltOnFirst
        } else {
            NotifyMode::Broadcast
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_broadcasts() {
        assert_eq!(NotifyMode::default(), NotifyMode::Broadcast);
        assert!(!NotifyMode::default().halts_on_first());
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(NotifyMode::from(true), NotifyMode::HaltOnFirst);
        assert_eq!(NotifyMode::from(false), NotifyMode::Broadcast);
    }
}
