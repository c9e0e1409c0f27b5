//! # Observer: the capability a registry drives
//!
//! The [`Observer`] trait is the main **extension point** for users of the crate.
//! A [`Registry`](crate::Registry) calls [`Observer::update`] for every
//! notification, in priority order, on the caller's thread.
//!
//! ## Architecture
//! ```text
//! Registry::notify(event, context)
//!        │
//!        ├──► observer(p=999).update(subject, event, context) ─► Ok(false)
//!        ├──► observer(p=10) .update(subject, event, context) ─► Ok(true)  ── halt here (HaltOnFirst)
//!        └──► observer(p=0)  .update(subject, event, context) ─► ...
//! ```
//!
//! ## Contract
//! - `Ok(true)` means "handled"; in [`NotifyMode::HaltOnFirst`](crate::NotifyMode)
//!   the pass stops there.
//! - `Err(_)` aborts the whole pass (no later observer is invoked).
//! - [`Observer::kind`] is the observer's type identifier. It groups observers
//!   for [`Registry::detach_all`](crate::Registry::detach_all),
//!   [`Registry::attached_of`](crate::Registry::attached_of) and kind lookups.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventvisor::{Observer, ObserverError, ObserverRef, Registry};
//!
//! struct Request { url: String }
//!
//! struct Audit;
//!
//! impl Observer<Request, str> for Audit {
//!     fn update(
//!         &self,
//!         req: &Request,
//!         event: &str,
//!         ctx: Option<&str>,
//!     ) -> Result<bool, ObserverError> {
//!         let _ = (&req.url, event, ctx);
//!         Ok(false)
//!     }
//!
//!     fn kind(&self) -> &str { "audit" }
//! }
//!
//! let subject = Arc::new(Request { url: "/".into() });
//! let mut reg: Registry<Request, str> = Registry::new(subject, Vec::new());
//! let audit: ObserverRef<Request, str> = Arc::new(Audit);
//! reg.attach(audit, 0);
//! assert!(reg.has_observer("audit"));
//! ```

use std::sync::Arc;

use crate::error::ObserverError;

/// Capability to receive named events about a subject `S` with context `C`.
///
/// ### Implementation requirements
/// - Run synchronously; the registry waits for every call.
/// - Do not panic. Panics unwind through `notify` and are not caught.
/// - Keep [`Self::kind`] stable for the lifetime of the observer.
pub trait Observer<S: ?Sized, C: ?Sized = ()>: Send + Sync {
    /// Handles one event.
    ///
    /// # Parameters
    /// - `subject`: the entity the event is about (shared, never owned)
    /// - `event`: event name
    /// - `context`: per-call context, `None` when the caller passed none
    ///
    /// Returns `Ok(true)` if the observer considers the event handled.
    fn update(&self, subject: &S, event: &str, context: Option<&C>)
    -> Result<bool, ObserverError>;

    /// Returns the observer's type identifier.
    ///
    /// Read once when the observer is attached and cached by the registry.
    /// The default uses `type_name::<Self>()`; see [`kind_of`].
    fn kind(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an observer (`Arc<dyn Observer>`).
///
/// Two handles refer to the same observer when they share an allocation.
pub type ObserverRef<S, C = ()> = Arc<dyn Observer<S, C>>;

/// Returns the default [`Observer::kind`] of type `T`.
///
/// Only valid for observers that do not override `kind`.
///
/// ```rust
/// use eventvisor::{kind_of, Observer, ObserverError};
///
/// struct Noop;
/// impl Observer<()> for Noop {
///     fn update(&self, _: &(), _: &str, _: Option<&()>) -> Result<bool, ObserverError> {
///         Ok(false)
///     }
/// }
///
/// assert_eq!(<Noop as Observer<()>>::kind(&Noop), kind_of::<Noop>());
/// ```
#[inline]
pub fn kind_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Identity check for observer handles (same allocation).
#[inline]
pub(crate) fn same_observer<S: ?Sized, C: ?Sized>(
    a: &ObserverRef<S, C>,
    b: &ObserverRef<S, C>,
) -> bool {
    Arc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Observer<u32> for Plain {
        fn update(&self, subject: &u32, _: &str, _: Option<&()>) -> Result<bool, ObserverError> {
            Ok(*subject > 10)
        }
    }

    struct Named;

    impl Observer<u32> for Named {
        fn update(&self, _: &u32, _: &str, _: Option<&()>) -> Result<bool, ObserverError> {
            Ok(false)
        }

        fn kind(&self) -> &str {
            "named"
        }
    }

    #[test]
    fn test_default_kind_is_type_name() {
        let obs: ObserverRef<u32> = Arc::new(Plain);
        assert_eq!(obs.kind(), kind_of::<Plain>());
        assert!(obs.kind().ends_with("Plain"));
    }

    #[test]
    fn test_kind_override() {
        let obs: ObserverRef<u32> = Arc::new(Named);
        assert_eq!(obs.kind(), "named");
        assert_ne!(obs.kind(), kind_of::<Named>());
    }

    #[test]
    fn test_identity_is_allocation() {
        let a: ObserverRef<u32> = Arc::new(Plain);
        let b: ObserverRef<u32> = Arc::new(Plain);
        let a2 = Arc::clone(&a);
        assert!(same_observer(&a, &a2));
        assert!(!same_observer(&a, &b));
    }

    #[test]
    fn test_update_receives_subject() {
        let obs: ObserverRef<u32> = Arc::new(Plain);
        assert!(obs.update(&11, "e", None).unwrap());
        assert!(!obs.update(&3, "e", None).unwrap());
    }
}
