//! # Dispatch loop shared by every registry flavour.
//!
//! Walks an already ordered sequence of observers and calls `update` on each.
//!
//! ## Rules
//! - Order is whatever the caller passes in (registries pass priority order).
//! - `Err` from an observer aborts immediately → [`NotifyError::Aborted`].
//! - In [`NotifyMode::HaltOnFirst`] the first `true` ends the pass and is the
//!   only element returned.

use crate::error::NotifyError;
use crate::notify::NotifyMode;
use crate::observers::ObserverRef;

/// Notifies `observers` in iteration order.
pub(crate) fn dispatch<'a, S, C, I>(
    subject: &S,
    observers: I,
    event: &str,
    context: Option<&C>,
    mode: NotifyMode,
) -> Result<Vec<bool>, NotifyError>
where
    S: ?Sized + 'a,
    C: ?Sized + 'a,
    I: IntoIterator<Item = &'a ObserverRef<S, C>>,
{
    let observers = observers.into_iter();
    let mut results = Vec::with_capacity(observers.size_hint().0);

    for (position, observer) in observers.enumerate() {
        let handled = match observer.update(subject, event, context) {
            Ok(handled) => handled,
            Err(source) => {
                tracing::warn!(
                    event,
                    observer = observer.kind(),
                    position,
                    error = source.as_label(),
                    "notification aborted by observer"
                );
                return Err(NotifyError::Aborted {
                    observer: observer.kind().to_string(),
                    event: event.to_string(),
                    position,
                    source,
                });
            }
        };

        if handled && mode.halts_on_first() {
            tracing::debug!(event, observer = observer.kind(), position, "event handled; halting");
            return Ok(vec![handled]);
        }
        results.push(handled);
    }

    Ok(results)
}
