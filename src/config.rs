//! # Registry configuration.
//!
//! Provides [`RegistryConfig`], the settings a [`Registry`](crate::Registry) is built with.
//!
//! Config is used in two ways:
//! 1. **Registry creation**: `Registry::with_config(subject, observers, config)`
//! 2. **Default priority**: initial observers and `Registry::attach_default`
//!
//! ## Sentinel values
//! - `capacity = 0` → no preallocation (entries grow on demand)

/// Configuration for a [`Registry`](crate::Registry).
///
/// ## Field semantics
/// - `default_priority`: priority given to observers attached without one
/// - `capacity`: initial entry capacity (`0` = grow on demand)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Priority assigned to constructor-supplied observers and to
    /// `attach_default`. Higher runs earlier.
    pub default_priority: i32,

    /// Number of entries to preallocate.
    ///
    /// - `0` = no preallocation
    /// - `n > 0` = room for `n` observers before the first reallocation
    pub capacity: usize,
}

impl RegistryConfig {
    /// Returns the preallocation hint as an `Option`.
    ///
    /// - `None` → grow on demand
    /// - `Some(n)` → reserve `n` entries up front
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity)
        }
    }

    /// Returns a copy with another default priority.
    #[must_use]
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }

    /// Returns a copy with another capacity hint.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `default_priority = 0`
    /// - `capacity = 0` (grow on demand)
    fn default() -> Self {
        Self {
            default_priority: 0,
            capacity: 0,
        }
    }
}
