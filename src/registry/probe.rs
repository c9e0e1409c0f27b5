//! # Lookup key for `has_observer`.
//!
//! A [`Probe`] is either a concrete observer handle (matched by identity) or a
//! kind identifier (matched against [`Observer::kind`](crate::Observer::kind)).
//! Both convert implicitly, so callers write `has_observer(&obs)` or
//! `has_observer("audit")`.

use crate::observers::{ObserverRef, same_observer};
use crate::registry::entry::Entry;

/// What [`Registry::has_observer`](crate::Registry::has_observer) looks for.
pub enum Probe<'a, S: ?Sized, C: ?Sized = ()> {
    /// This exact observer instance.
    Instance(&'a ObserverRef<S, C>),
    /// Any observer whose kind equals this identifier.
    Kind(&'a str),
}

impl<S: ?Sized, C: ?Sized> Probe<'_, S, C> {
    /// True if `observer` satisfies the probe.
    pub fn matches(&self, observer: &ObserverRef<S, C>) -> bool {
        match self {
            Probe::Instance(target) => same_observer(target, observer),
            Probe::Kind(kind) => observer.kind() == *kind,
        }
    }

    /// Same as [`Probe::matches`], against the kind cached in `entry`.
    pub(crate) fn matches_entry(&self, entry: &Entry<S, C>) -> bool {
        match self {
            Probe::Instance(target) => same_observer(target, &entry.observer),
            Probe::Kind(kind) => &*entry.kind == *kind,
        }
    }
}

impl<'a, S: ?Sized, C: ?Sized> From<&'a ObserverRef<S, C>> for Probe<'a, S, C> {
    fn from(observer: &'a ObserverRef<S, C>) -> Self {
        Probe::Instance(observer)
    }
}

impl<'a, S: ?Sized, C: ?Sized> From<&'a str> for Probe<'a, S, C> {
    fn from(kind: &'a str) -> Self {
        Probe::Kind(kind)
    }
}

impl<'a, S: ?Sized, C: ?Sized> From<&'a String> for Probe<'a, S, C> {
    fn from(kind: &'a String) -> Self {
        Probe::Kind(kind.as_str())
    }
}
