//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::dispatch::{Machine, Transition, TransitionTable};
use std::sync::Arc;
use tracing::debug;

/// Builder for constructing transition tables with a fluent API.
///
/// All configuration checks run in [`TableBuilder::build`], once, before
/// any machine exists.
pub struct TableBuilder<S: State, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> TableBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the transition table.
    ///
    /// Rejects, in this order: a missing initial state, an empty table, any
    /// self-loop, two transitions leaving the same state on the same event
    /// kind, and an initial state no transition references.
    pub fn build(self) -> Result<TransitionTable<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Some(looping) = self.transitions.iter().find(|t| t.from == t.to) {
            return Err(BuildError::SelfLoop {
                state: looping.from.name().to_string(),
            });
        }

        check_unique_triggers(&self.transitions)?;

        let table = TransitionTable::assemble(&initial, self.transitions)?;
        debug!(
            transitions = table.len(),
            states = table.states().len(),
            initial = table.initial_state().name(),
            "built transition table"
        );
        Ok(table)
    }

    /// Build the table behind an `Arc`, ready to be shared by many machines.
    pub fn build_shared(self) -> Result<Arc<TransitionTable<S, E>>, BuildError> {
        self.build().map(Arc::new)
    }

    /// Build the table and a first machine running it.
    pub fn build_machine(self) -> Result<Machine<S, E>, BuildError> {
        self.build_shared().map(Machine::new)
    }
}

impl<S: State, E: Event> Default for TableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject two transitions sharing a (source state, event kind) pair: only
/// the first could ever fire.
fn check_unique_triggers<S: State, E: Event>(
    transitions: &[Transition<S, E>],
) -> Result<(), BuildError> {
    for (second, later) in transitions.iter().enumerate() {
        let earlier = transitions[..second]
            .iter()
            .position(|t| t.from == later.from && t.event == later.event);
        if let Some(first) = earlier {
            return Err(BuildError::DuplicateTransition {
                first,
                second,
                state: later.from.name().to_string(),
                event: format!("{:?}", later.event),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::simple_transition;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Closed,
        Opened,
        Walking,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Opened => "Opened",
                Self::Walking => "Walking",
                Self::Broken => "Broken",
            }
        }
    }

    enum TestEvent {
        Open,
        Close,
        Walk,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestEventKind {
        Open,
        Close,
        Walk,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            match self {
                Self::Open => TestEventKind::Open,
                Self::Close => TestEventKind::Close,
                Self::Walk => TestEventKind::Walk,
            }
        }
    }

    fn noop(_: &TestEvent) {}

    fn rule(
        from: TestState,
        event: TestEventKind,
        to: TestState,
    ) -> Transition<TestState, TestEvent> {
        simple_transition(from, event, to, noop)
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TableBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = TableBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Closed)
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn builder_rejects_self_loop() {
        let looping = Transition {
            from: TestState::Opened,
            event: TestEventKind::Walk,
            to: TestState::Opened,
            action: Arc::new(noop),
            guard: None,
        };

        let result = TableBuilder::new()
            .initial(TestState::Closed)
            .add_transition(rule(TestState::Closed, TestEventKind::Open, TestState::Opened))
            .add_transition(looping)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::SelfLoop { state }) if state == "Opened"
        ));
    }

    #[test]
    fn builder_rejects_duplicate_trigger() {
        let result = TableBuilder::new()
            .initial(TestState::Closed)
            .transitions(vec![
                rule(TestState::Closed, TestEventKind::Open, TestState::Opened),
                rule(TestState::Opened, TestEventKind::Close, TestState::Closed),
                rule(TestState::Opened, TestEventKind::Close, TestState::Walking),
            ])
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::DuplicateTransition {
                first: 1,
                second: 2,
                state: "Opened".to_string(),
                event: "Close".to_string(),
            })
        );
    }

    #[test]
    fn shared_kind_from_different_states_is_allowed() {
        let table = TableBuilder::new()
            .initial(TestState::Closed)
            .transitions(vec![
                rule(TestState::Closed, TestEventKind::Open, TestState::Opened),
                rule(TestState::Opened, TestEventKind::Close, TestState::Closed),
                rule(TestState::Walking, TestEventKind::Close, TestState::Closed),
            ])
            .build()
            .unwrap();

        assert_eq!(table.route(TestEventKind::Close).count(), 2);
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = TableBuilder::new()
            .initial(TestState::Broken)
            .add_transition(rule(TestState::Closed, TestEventKind::Open, TestState::Opened))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::UnknownInitialState { state }) if state == "Broken"
        ));
    }

    #[test]
    fn transition_builder_errors_propagate() {
        let result = TableBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Closed)
            .transition(TransitionBuilder::new().from(TestState::Closed));

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::new()
            .initial(TestState::Closed)
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Closed)
                    .on(TestEventKind::Open)
                    .to(TestState::Opened)
                    .action(noop),
            )
            .unwrap()
            .add_transition(rule(TestState::Opened, TestEventKind::Walk, TestState::Walking))
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.initial_state(), &TestState::Closed);
        assert_eq!(table.index_of(&TestState::Walking), Some(2));
        assert_eq!(table.index_of(&TestState::Broken), None);
    }

    #[test]
    fn build_machine_starts_at_initial_state() {
        let machine = TableBuilder::new()
            .initial(TestState::Opened)
            .add_transition(rule(TestState::Closed, TestEventKind::Open, TestState::Opened))
            .build_machine()
            .unwrap();

        assert!(machine.is(&TestState::Opened));
        assert_eq!(machine.current_index(), 1);
    }
}
