//! Notification: modes and the dispatch loop.
//!
//! ## Contents
//! - [`NotifyMode`] broadcast vs. halt-on-first
//! - `dispatch` the ordered fan-out used by [`Registry`](crate::Registry) and
//!   [`SharedRegistry`](crate::SharedRegistry)

mod dispatch;
mod mode;

pub(crate) use dispatch::dispatch;
pub use mode::NotifyMode;
