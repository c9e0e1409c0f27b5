//! # Observers: the capability side of the registry.
//!
//! - [`Observer`] - trait every registered listener implements
//! - [`ObserverRef`] - shared handle (`Arc<dyn Observer>`)
//! - [`ObserverFn`] - closure-backed observer with an explicit kind
//! - [`kind_of`] - default kind identifier of a type
//! - `LogWriter` - reference observer logging through `tracing` (`logging` feature)

#[cfg(feature = "logging")]
mod log;
mod observer;
mod observer_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub(crate) use observer::same_observer;
pub use observer::{Observer, ObserverRef, kind_of};
pub use observer_fn::ObserverFn;
