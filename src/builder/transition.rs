//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::dispatch::Transition;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    from: Option<S>,
    event: Option<E::Kind>,
    to: Option<S>,
    action: Option<Action<E>>,
    guard: Option<Guard<E>>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            action: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.event = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the action run when the transition fires (required).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;

        if from == to {
            return Err(BuildError::SelfLoop {
                state: from.name().to_string(),
            });
        }

        Ok(Transition {
            from,
            event,
            to,
            action,
            guard: self.guard,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
