//! Validated, immutable transition tables.

use crate::builder::BuildError;
use crate::core::{Event, State, StateRegistry};
use crate::dispatch::machine::Machine;
use crate::dispatch::router::EventRouter;
use crate::dispatch::transition::Transition;
use std::sync::Arc;

/// A transition with its source and target resolved to state indices.
pub(crate) struct Entry<S: State, E: Event> {
    pub(crate) transition: Transition<S, E>,
    pub(crate) source: usize,
    pub(crate) target: usize,
}

/// Ordered set of transitions, validated once and never mutated.
///
/// Tables are only produced by [`TableBuilder`](crate::builder::TableBuilder),
/// which guarantees that the table is non-empty, has no self-loops, has at
/// most one transition per (source state, event kind) pair and that the
/// initial state is one of the states the table references.
///
/// A table is shared read-only by every [`Machine`] created from it.
pub struct TransitionTable<S: State, E: Event> {
    entries: Vec<Entry<S, E>>,
    registry: StateRegistry<S>,
    router: EventRouter<E::Kind>,
    initial: usize,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Derive the state set and event routes for transitions that already
    /// passed the per-record checks, and position the initial state.
    pub(crate) fn assemble(
        initial: &S,
        transitions: Vec<Transition<S, E>>,
    ) -> Result<Self, BuildError> {
        let registry = StateRegistry::from_pairs(transitions.iter().map(|t| (&t.from, &t.to)));
        let initial = registry
            .index_of(initial)
            .ok_or_else(|| BuildError::UnknownInitialState {
                state: initial.name().to_string(),
            })?;

        let resolve = |state: &S| {
            registry.index_of(state).ok_or_else(|| BuildError::UnknownState {
                state: state.name().to_string(),
            })
        };
        let entries = transitions
            .into_iter()
            .map(|transition| -> Result<Entry<S, E>, BuildError> {
                Ok(Entry {
                    source: resolve(&transition.from)?,
                    target: resolve(&transition.to)?,
                    transition,
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;
        let router = EventRouter::new(entries.iter().map(|entry| entry.transition.event));

        Ok(Self {
            entries,
            registry,
            router,
            initial,
        })
    }

    /// Number of transitions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transitions in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E>> {
        self.entries.iter().map(|entry| &entry.transition)
    }

    /// The derived state set.
    pub fn states(&self) -> &StateRegistry<S> {
        &self.registry
    }

    /// State every new machine starts in.
    pub fn initial_state(&self) -> &S {
        self.state_at(self.initial)
    }

    pub(crate) fn initial_index(&self) -> usize {
        self.initial
    }

    /// Index assigned to `state`, if the table references it.
    pub fn index_of(&self, state: &S) -> Option<usize> {
        self.registry.index_of(state)
    }

    /// Transitions declared for `kind`, in declaration order.
    pub fn route(&self, kind: E::Kind) -> impl Iterator<Item = &Transition<S, E>> {
        self.routed_entries(kind).map(|entry| &entry.transition)
    }

    pub(crate) fn routed_entries(&self, kind: E::Kind) -> impl Iterator<Item = &Entry<S, E>> {
        self.router
            .route(kind)
            .iter()
            .map(move |&position| &self.entries[position])
    }

    /// State stored at a registry index handed out by this table.
    pub(crate) fn state_at(&self, index: usize) -> &S {
        match self.registry.state(index) {
            Some(state) => state,
            None => panic!(
                "state index {index} outside a table of {} states",
                self.registry.len()
            ),
        }
    }

    /// Create a machine positioned at the initial state.
    pub fn machine(self: &Arc<Self>) -> Machine<S, E> {
        Machine::new(Arc::clone(self))
    }
}
