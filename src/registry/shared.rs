//! # SharedRegistry - lock-guarded registry handle.
//!
//! [`SharedRegistry`] wraps a [`Registry`] in `Arc<RwLock<..>>` so it can be
//! cloned into observers or across threads.
//!
//! ## Snapshot-then-iterate
//! ```text
//! notify(event, ctx)
//!   ├─ read lock ─► (subject handle, ordered observer handles) ─► unlock
//!   └─ dispatch over the snapshot (no lock held)
//!          └─ observer.update() may attach/detach on this same handle
//! ```
//!
//! ## Rules
//! - Attach/detach performed from inside `update` never deadlocks.
//! - Such changes apply from the **next** pass; the running pass keeps its snapshot
//!   (an observer detached mid-pass is still invoked if it had not run yet).
//! - Observer code (`update` and `kind`) never runs while the lock is held:
//!   kinds are read before locking and cached per entry, so `kind` may call
//!   back into this handle. A poisoned lock therefore still guards a
//!   consistent registry and is recovered transparently.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::NotifyError;
use crate::notify::{NotifyMode, dispatch};
use crate::observers::ObserverRef;
use crate::registry::{Probe, Registry};

/// Cloneable, thread-safe handle to a [`Registry`].
pub struct SharedRegistry<S: ?Sized, C: ?Sized = ()> {
    inner: Arc<RwLock<Registry<S, C>>>,
}

// Manual Clone: shares the same registry.
impl<S: ?Sized, C: ?Sized> Clone for SharedRegistry<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ?Sized, C: ?Sized> SharedRegistry<S, C> {
    /// Wraps an existing registry.
    #[must_use]
    pub fn new(registry: Registry<S, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Creates a shared registry bound to `subject` (see [`Registry::new`]).
    #[must_use]
    pub fn with_subject(subject: Arc<S>, observers: Vec<ObserverRef<S, C>>) -> Self {
        Self::new(Registry::new(subject, observers))
    }

    /// Runs `f` with read access to the underlying registry.
    ///
    /// Do not call back into this handle from `f` with a mutating method.
    pub fn with<R>(&self, f: impl FnOnce(&Registry<S, C>) -> R) -> R {
        f(&*self.read())
    }

    /// See [`Registry::subject_handle`].
    pub fn subject_handle(&self) -> Arc<S> {
        self.read().subject_handle()
    }

    /// See [`Registry::attach`].
    pub fn attach(&self, observer: ObserverRef<S, C>, priority: i32) -> bool {
        let kind = observer.kind().to_owned();
        self.write().insert(observer, kind, priority)
    }

    /// See [`Registry::attach_default`].
    pub fn attach_default(&self, observer: ObserverRef<S, C>) -> bool {
        let kind = observer.kind().to_owned();
        let mut registry = self.write();
        let priority = registry.config().default_priority;
        registry.insert(observer, kind, priority)
    }

    /// See [`Registry::detach`].
    pub fn detach(&self, observer: &ObserverRef<S, C>) -> Option<ObserverRef<S, C>> {
        self.write().detach(observer)
    }

    /// See [`Registry::detach_all`].
    pub fn detach_all(&self, template: &ObserverRef<S, C>) -> Vec<ObserverRef<S, C>> {
        let kind = template.kind().to_owned();
        self.write().detach_kind(&kind)
    }

    /// See [`Registry::detach_kind`].
    pub fn detach_kind(&self, kind: &str) -> Vec<ObserverRef<S, C>> {
        self.write().detach_kind(kind)
    }

    /// See [`Registry::attached`].
    pub fn attached(&self) -> Vec<ObserverRef<S, C>> {
        self.read().attached()
    }

    /// See [`Registry::attached_of`].
    pub fn attached_of(&self, kind: &str) -> Vec<ObserverRef<S, C>> {
        self.read().attached_of(kind)
    }

    /// See [`Registry::has_observer`].
    pub fn has_observer<'p>(&self, probe: impl Into<Probe<'p, S, C>>) -> bool
    where
        S: 'p,
        C: 'p,
    {
        self.read().has_observer(probe)
    }

    /// See [`Registry::priority_of`].
    pub fn priority_of(&self, observer: &ObserverRef<S, C>) -> Option<i32> {
        self.read().priority_of(observer)
    }

    /// See [`Registry::len`].
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// See [`Registry::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// See [`Registry::notify`]; runs over a snapshot.
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails.
    pub fn notify(&self, event: &str, context: Option<&C>) -> Result<Vec<bool>, NotifyError> {
        self.notify_with(event, context, NotifyMode::Broadcast)
    }

    /// See [`Registry::notify_until`]; runs over a snapshot.
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails.
    pub fn notify_until(&self, event: &str, context: Option<&C>) -> Result<Vec<bool>, NotifyError> {
        self.notify_with(event, context, NotifyMode::HaltOnFirst)
    }

    /// See [`Registry::notify_with`]; runs over a snapshot.
    ///
    /// # Errors
    /// [`NotifyError::Aborted`] if an observer fails.
    pub fn notify_with(
        &self,
        event: &str,
        context: Option<&C>,
        mode: NotifyMode,
    ) -> Result<Vec<bool>, NotifyError> {
        let (subject, snapshot) = {
            let registry = self.read();
            (registry.subject_handle(), registry.attached())
        };
        dispatch(&*subject, &snapshot, event, context, mode)
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<S, C>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<S, C>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ?Sized, C: ?Sized> From<Registry<S, C>> for SharedRegistry<S, C> {
    fn from(registry: Registry<S, C>) -> Self {
        Self::new(registry)
    }
}

impl<S: ?Sized, C: ?Sized> fmt::Debug for SharedRegistry<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry").field(&*self.read()).finish()
    }
}
