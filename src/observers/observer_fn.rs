//! # Function-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&S, &str, Option<&C>) -> Result<bool, ObserverError>`
//! so a plain function can be attached wherever an [`Observer`] is expected.
//!
//! Every `ObserverFn` carries an explicit kind, so closures can still be grouped
//! for kind queries and group detach.
//!
//! ## Example
//! ```rust
//! use eventvisor::{ObserverFn, ObserverRef};
//!
//! let o: ObserverRef<String, str> =
//!     ObserverFn::arc("retry", |subject: &String, event: &str, _ctx| {
//!         Ok(event == "request.error" && subject.starts_with("GET"))
//!     });
//!
//! assert_eq!(o.kind(), "retry");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ObserverError;
use crate::observers::{Observer, ObserverRef};

/// Function-backed observer implementation.
pub struct ObserverFn<F> {
    kind: Cow<'static, str>,
    f: F,
}

impl<F> ObserverFn<F> {
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need an [`ObserverRef`].
    pub fn new(kind: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            kind: kind.into(),
            f,
        }
    }

    /// Creates the observer and returns it as a shared handle (`Arc<dyn Observer>`).
    pub fn arc<S, C>(kind: impl Into<Cow<'static, str>>, f: F) -> ObserverRef<S, C>
    where
        S: ?Sized,
        C: ?Sized,
        F: Fn(&S, &str, Option<&C>) -> Result<bool, ObserverError> + Send + Sync + 'static,
    {
        Arc::new(Self::new(kind, f))
    }
}

impl<F> fmt::Debug for ObserverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverFn")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<S, C, F> Observer<S, C> for ObserverFn<F>
where
    S: ?Sized,
    C: ?Sized,
    F: Fn(&S, &str, Option<&C>) -> Result<bool, ObserverError> + Send + Sync + 'static,
{
    fn update(
        &self,
        subject: &S,
        event: &str,
        context: Option<&C>,
    ) -> Result<bool, ObserverError> {
        (self.f)(subject, event, context)
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}
