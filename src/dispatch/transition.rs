//! Transition records.

use crate::core::{Action, Event, Guard, State};
use std::fmt;
use std::sync::Arc;

/// One rule of a transition table.
///
/// Fires when the machine is in `from` and receives an event of kind
/// `event`: the guard (if any) is consulted, then the action runs and the
/// machine moves to `to`.
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub event: E::Kind,
    pub to: S,
    pub action: Action<E>,
    pub guard: Option<Guard<E>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Check if this transition is declared for the given event kind.
    pub fn applies_to(&self, kind: E::Kind) -> bool {
        self.event == kind
    }

    /// Evaluate the guard and, if it passes, run the action.
    ///
    /// Returns `false` without running the action when the guard vetoes.
    pub fn fire(&self, event: &E) -> bool {
        if let Some(guard) = &self.guard {
            if !guard.check(event) {
                return false;
            }
        }
        (self.action)(event);
        true
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event,
            to: self.to.clone(),
            action: Arc::clone(&self.action),
            guard: self.guard.clone(),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
