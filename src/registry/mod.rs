//! # Observer registries.
//!
//! - [`Registry`] - ordered observer set bound to one subject (single owner)
//! - [`SharedRegistry`] - `Arc<RwLock<Registry>>` handle with snapshot notification
//! - [`Probe`] - instance-or-kind lookup key for `has_observer`

mod core;
mod entry;
mod probe;
mod shared;

pub use self::core::Registry;
pub use probe::Probe;
pub use shared::SharedRegistry;
