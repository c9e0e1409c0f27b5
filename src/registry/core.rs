//! # Registry - priority-ordered observer set bound to one subject.
//!
//! [`Registry`] owns the ordered list of observers attached to a subject and
//! drives them on [`Registry::notify`].
//!
//! ## Architecture
//! ```text
//! attach(obs, p) ──► entries: [(obs, priority, seq), ...]  sorted by (-priority, seq)
//!                         │
//! notify(event, ctx) ─────┴─► dispatch(subject, entries in order, event, ctx, mode)
//!                                   └─► Observer::update(subject, event, ctx)
//! ```
//!
//! ## Rules
//! - One entry per observer instance; attaching it again is a no-op.
//! - Higher priority runs first; equal priorities run in attach order.
//! - Detach never disturbs the relative order of the remaining entries.
//! - The subject is a shared handle; the registry never mutates it.

use std::fmt;
use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::error::NotifyError;
use crate::notify::{NotifyMode, dispatch};
use crate::observers::{ObserverRef, same_observer};
use crate::registry::Probe;
use crate::registry::entry::Entry;

/// Ordered observer registry for one subject `S`, with event context `C`.
pub struct Registry<S: ?Sized, C: ?Sized = ()> {
    subject: Arc<S>,
    entries: Vec<Entry<S, C>>,
    next_seq: u64,
    config: RegistryConfig,
}

impl<S: ?Sized, C: ?Sized> Registry<S, C> {
    /// Creates a registry bound to `subject`.
    ///
    /// `observers` are attached in order at the default priority (0).
    pub fn new(subject: Arc<S>, observers: Vec<ObserverRef<S, C>>) -> Self {
        Self::with_config(subject, observers, RegistryConfig::default())
    }

    /// Creates a registry with explicit configuration.
    ///
    /// `observers` are attached in order at `config.default_priority`.
    pub fn with_config(
        subject: Arc<S>,
        observers: Vec<ObserverRef<S, C>>,
        config: RegistryConfig,
    ) -> Self {
        let capacity = config.capacity_hint().unwrap_or(0).max(observers.len());
        let mut registry = Self {
            subject,
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
            config,
        };
        for observer in observers {
            registry.attach_default(observer);
        }
        registry
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the bound subject.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Returns a new handle to the bound subject.
    pub fn subject_handle(&self) -> Arc<S> {
        Arc::clone(&self.subject)
    }

    /// Attaches `observer` with `priority` (higher runs earlier).
    ///
    /// Returns `false` and leaves the registry untouched if this exact observer
    /// instance is already attached; its priority and position are kept.
    pub fn attach(&mut self, observer: ObserverRef<S, C>, priority: i32) -> bool {
        let kind = observer.kind().to_owned();
        self.insert(observer, kind, priority)
    }

    /// Attaches `observer` at the configured default priority.
    pub fn attach_default(&mut self, observer: ObserverRef<S, C>) -> bool {
        let priority = self.config.default_priority;
        self.attach(observer, priority)
    }

    /// Inserts with a kind read beforehand, so no observer code runs here.
    pub(crate) fn insert(
        &mut self,
        observer: ObserverRef<S, C>,
        kind: String,
        priority: i32,
    ) -> bool {
        if let Some(at) = self.position_of(&observer) {
            let entry = &self.entries[at];
            tracing::trace!(
                observer = &*entry.kind,
                priority = entry.priority,
                "observer already attached"
            );
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        // A fresh entry has the largest seq, so it goes after every entry of
        // equal or higher priority.
        let at = self.entries.partition_point(|e| e.priority >= priority);
        tracing::trace!(
            observer = kind.as_str(),
            priority,
            seq,
            position = at,
            "observer attached"
        );
        self.entries.insert(at, Entry::new(observer, kind, priority, seq));

        debug_assert!(self.is_ordered());
        true
    }

    /// Detaches this exact observer instance.
    ///
    /// Returns the removed handle, or `None` if it was not attached.
    pub fn detach(&mut self, observer: &ObserverRef<S, C>) -> Option<ObserverRef<S, C>> {
        let at = self.position_of(observer)?;
        let entry = self.entries.remove(at);
        tracing::trace!(
            observer = &*entry.kind,
            priority = entry.priority,
            "observer detached"
        );
        Some(entry.observer)
    }

    /// Detaches every observer of the same kind as `template`.
    ///
    /// `template` only supplies the kind; it does not have to be attached.
    /// Removed observers are returned in their prior notification order.
    pub fn detach_all(&mut self, template: &ObserverRef<S, C>) -> Vec<ObserverRef<S, C>> {
        self.detach_kind(template.kind())
    }

    /// Detaches every observer whose kind equals `kind`.
    pub fn detach_kind(&mut self, kind: &str) -> Vec<ObserverRef<S, C>> {
        let mut removed = Vec::new();
        self.entries.retain(|e| {
            if &*e.kind == kind {
                removed.push(Arc::clone(&e.observer));
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            tracing::trace!(kind, count = removed.len(), "observers detached by kind");
        }
        removed
    }

    /// Returns all attached observers in notification order.
    pub fn attached(&self) -> Vec<ObserverRef<S, C>> {
        self.iter().cloned().collect()
    }

    /// Returns attached observers whose kind equals `kind`, in notification order.
    pub fn attached_of(&self, kind: &str) -> Vec<ObserverRef<S, C>> {
        self.entries
            .iter()
            .filter(|e| &*e.kind == kind)
            .map(|e| Arc::clone(&e.observer))
            .collect()
    }

    /// Borrowing view of attached observers in notification order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ObserverRef<S, C>> {
        self.entries.iter().map(|e| &e.observer)
    }

    /// True if any attached observer matches `probe`.
    ///
    /// Accepts an observer handle (identity match) or a kind (`&str`).
    pub fn has_observer<'p>(&self, probe: impl Into<Probe<'p, S, C>>) -> bool
    where
        S: 'p,
        C: 'p,
    {
        let probe = probe.into();
        self.entries.iter().any(|e| probe.matches_entry(e))
    }

    /// Returns the priority `observer` was attached with.
    pub fn priority_of(&self, observer: &ObserverRef<S, C>) -> Option<i32> {
        self.position_of(observer).map(|at| self.entries[at].priority)
    }

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notifies every attached observer; one result per observer, in order.
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails; later observers do not run.
    pub fn notify(&self, event: &str, context: Option<&C>) -> Result<Vec<bool>, NotifyError> {
        self.notify_with(event, context, NotifyMode::Broadcast)
    }

    /// Notifies observers until one reports the event as handled.
    ///
    /// Returns `[true]` if someone handled it, otherwise every (`false`) result.
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails; later observers do not run.
    pub fn notify_until(&self, event: &str, context: Option<&C>) -> Result<Vec<bool>, NotifyError> {
        self.notify_with(event, context, NotifyMode::HaltOnFirst)
    }

    /// Notifies observers using an explicit [`NotifyMode`].
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails; later observers do not run.
    pub fn notify_with(
        &self,
        event: &str,
        context: Option<&C>,
        mode: NotifyMode,
    ) -> Result<Vec<bool>, NotifyError> {
        dispatch(&*self.subject, self.iter(), event, context, mode)
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    fn position_of(&self, observer: &ObserverRef<S, C>) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| same_observer(&e.observer, observer))
    }

    fn is_ordered(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].runs_before(&w[1]))
    }
}

impl<S: ?Sized, C: ?Sized> fmt::Debug for Registry<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries)
            .field("next_seq", &self.next_seq)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
