//! Registration entry: observer + priority + attach sequence.

use std::fmt;

use crate::observers::ObserverRef;

/// One attached observer.
///
/// Entries are ordered by `(-priority, seq)`; `seq` only breaks priority ties.
/// `kind` is captured at attach time so lookups never run observer code.
pub(crate) struct Entry<S: ?Sized, C: ?Sized> {
    pub(crate) observer: ObserverRef<S, C>,
    pub(crate) kind: Box<str>,
    pub(crate) priority: i32,
    pub(crate) seq: u64,
}

impl<S: ?Sized, C: ?Sized> Entry<S, C> {
    pub(crate) fn new(observer: ObserverRef<S, C>, kind: String, priority: i32, seq: u64) -> Self {
        Self {
            observer,
            kind: kind.into_boxed_str(),
            priority,
            seq,
        }
    }

    /// True if `self` must run strictly before `other`.
    #[inline]
    pub(crate) fn runs_before(&self, other: &Self) -> bool {
        other
            .priority
            .cmp(&self.priority)
            .then(self.seq.cmp(&other.seq))
            .is_lt()
    }
}

impl<S: ?Sized, C: ?Sized> fmt::Debug for Entry<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .field("seq", &self.seq)
            .finish()
    }
}
