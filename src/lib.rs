//! # eventvisor
//!
//! **Eventvisor** is a small, synchronous observer registry for Rust.
//!
//! A [`Registry`] is bound to one subject. Observers are attached with an
//! integer priority and receive named events, with optional context, in a
//! deterministic order. A notification pass either reaches everyone or stops
//! at the first observer that reports the event as handled.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Observer A  │   │  Observer B  │   │ ObserverFn C │
//!     │  (p = 999)   │   │   (p = 10)   │   │   (p = 0)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ attach           ▼ attach           ▼ attach
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry<S, C>                                                   │
//! │  - subject: Arc<S> (shared, never mutated)                        │
//! │  - entries sorted by (-priority, attach seq)                      │
//! │  - RegistryConfig (default priority, capacity)                    │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼ notify(event, ctx, mode)
//!                       ┌────────────────────────┐
//!                       │       dispatch         │
//!                       └───┬────────┬───────┬───┘
//!                           ▼        ▼       ▼
//!                        A.update B.update C.update   (stop early on `true`
//!                                                      in HaltOnFirst)
//! ```
//!
//! ### Ordering
//! ```text
//! attach(o1, 10) attach(o2, 0) attach(o3, 999) attach(o4, 0) attach(o5, -10)
//!
//! notification order: o3(999) → o1(10) → o2(0) → o4(0) → o5(-10)
//!                                        └── equal priority: attach order
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                        |
//! |-------------------|---------------------------------------------------------------|-------------------------------------------|
//! | **Observer API**  | Implement a listener or wrap a closure.                       | [`Observer`], [`ObserverFn`], [`ObserverRef`] |
//! | **Registry**      | Attach, detach (by instance or kind), query, notify.          | [`Registry`], [`Probe`]                   |
//! | **Sharing**       | Lock-guarded handle, snapshot notification, re-entrant safe.  | [`SharedRegistry`]                        |
//! | **Modes**         | Broadcast or halt on the first handled result.                | [`NotifyMode`]                            |
//! | **Errors**        | Typed observer and notification errors.                       | [`ObserverError`], [`NotifyError`]        |
//! | **Configuration** | Default priority and preallocation.                           | [`RegistryConfig`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventvisor::{ObserverFn, ObserverRef, Registry};
//!
//! struct Request { method: &'static str }
//!
//! let subject = Arc::new(Request { method: "GET" });
//! let mut reg: Registry<Request, str> = Registry::new(subject, Vec::new());
//!
//! let cache: ObserverRef<Request, str> =
//!     ObserverFn::arc("cache", |req: &Request, event: &str, _ctx| {
//!         Ok(event == "request.before_send" && req.method == "GET")
//!     });
//! let audit: ObserverRef<Request, str> =
//!     ObserverFn::arc("audit", |_: &Request, _: &str, _| Ok(false));
//!
//! reg.attach(audit, 0);
//! reg.attach(cache, 100);
//!
//! // Broadcast: one result per observer, highest priority first.
//! assert_eq!(reg.notify("request.before_send", Some("GET /"))?, vec![true, false]);
//!
//! // Halt on first: the cache answers and the audit observer is skipped.
//! assert_eq!(reg.notify_until("request.before_send", None)?, vec![true]);
//! # Ok::<(), eventvisor::NotifyError>(())
//! ```
mod config;
mod error;
mod notify;
mod observers;
mod registry;

// ---- Public re-exports ----

pub use config::RegistryConfig;
pub use error::{NotifyError, ObserverError};
pub use notify::NotifyMode;
pub use observers::{Observer, ObserverFn, ObserverRef, kind_of};
pub use registry::{Probe, Registry, SharedRegistry};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
