//! Guard predicates and actions attached to transitions.
//!
//! Guards are boolean functions over the incoming event. A guard that
//! returns `false` vetoes the transition it is attached to.

use std::fmt;
use std::sync::Arc;

/// Side-effecting function run when a transition fires.
pub type Action<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Predicate that determines if a transition can fire for an event.
///
/// Guards are evaluated after the transition has been selected and before
/// its action runs.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// struct Walk {
///     ready: bool,
/// }
///
/// let is_ready = Guard::new(|w: &Walk| w.ready);
///
/// assert!(is_ready.check(&Walk { ready: true }));
/// assert!(!is_ready.check(&Walk { ready: false }));
/// ```
pub struct Guard<E> {
    predicate: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Guard<E> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be thread-safe (Send + Sync) since tables are
    /// shared between machines.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this event.
    pub fn check(&self, event: &E) -> bool {
        (self.predicate)(event)
    }
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Walk {
        ready: bool,
        distance: u32,
    }

    #[test]
    fn guard_reads_payload() {
        let guard = Guard::new(|w: &Walk| w.ready);

        assert!(guard.check(&Walk {
            ready: true,
            distance: 5
        }));
        assert!(!guard.check(&Walk {
            ready: false,
            distance: 5
        }));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|w: &Walk| w.ready && w.distance <= 10);

        assert!(guard.check(&Walk {
            ready: true,
            distance: 10
        }));
        assert!(!guard.check(&Walk {
            ready: true,
            distance: 11
        }));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = Guard::new(move |w: &Walk| {
            counter.fetch_add(1, Ordering::SeqCst);
            w.ready
        });
        let cloned = guard.clone();

        let walk = Walk {
            ready: true,
            distance: 1,
        };
        assert_eq!(guard.check(&walk), cloned.check(&walk));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
