//! Runtime machine driven by a shared transition table.

use crate::builder::BuildError;
use crate::core::{Event, State};
use crate::dispatch::dispatcher::{dispatch, Outcome};
use crate::dispatch::table::TransitionTable;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A single running instance of a transition table.
///
/// The only mutable data is the index of the current state. Every call to
/// [`Machine::on`] either completes a full guard, action, state update
/// sequence or leaves the machine untouched.
///
/// Machines are not synchronized. Wrap one in a `Mutex` to drive it from
/// several threads; the table itself can be shared freely.
pub struct Machine<S: State, E: Event> {
    table: Arc<TransitionTable<S, E>>,
    current: usize,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in the table's initial state.
    pub fn new(table: Arc<TransitionTable<S, E>>) -> Self {
        let current = table.initial_index();
        Self { table, current }
    }

    /// Feed an event to the machine.
    ///
    /// Returns `true` if a transition fired. Returns `false`, with no side
    /// effects, when no transition for the event's kind leaves the current
    /// state or when that transition's guard rejects the event.
    pub fn on(&mut self, event: &E) -> bool {
        let kind = event.kind();
        let outcome = dispatch(&self.table, self.current, event);
        match outcome {
            Outcome::Fired { position, target } => {
                trace!(
                    position,
                    from = self.current_state().name(),
                    to = self.table.state_at(target).name(),
                    event = ?kind,
                    "transition fired"
                );
                self.current = target;
            }
            Outcome::Rejected { position } => {
                debug!(
                    position,
                    state = self.current_state().name(),
                    event = ?kind,
                    "guard rejected event"
                );
            }
            Outcome::Unmatched => {
                debug!(
                    state = self.current_state().name(),
                    event = ?kind,
                    "no transition for event"
                );
            }
        }
        outcome.fired()
    }

    /// Check whether the machine is currently in `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not referenced by the table. Asking about a
    /// state the table cannot reach is a configuration error; use
    /// [`Machine::try_is`] to handle it as a value.
    pub fn is(&self, state: &S) -> bool {
        match self.try_is(state) {
            Ok(is) => is,
            Err(err) => panic!("{err}"),
        }
    }

    /// Check whether the machine is currently in `state`, reporting states
    /// outside the table as [`BuildError::UnknownState`].
    pub fn try_is(&self, state: &S) -> Result<bool, BuildError> {
        let index = self
            .table
            .index_of(state)
            .ok_or_else(|| BuildError::UnknownState {
                state: state.name().to_string(),
            })?;
        Ok(index == self.current)
    }

    /// Get current state.
    pub fn current_state(&self) -> &S {
        self.table.state_at(self.current)
    }

    /// Index of the current state in the table's state set.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The table this machine runs.
    pub fn table(&self) -> &Arc<TransitionTable<S, E>> {
        &self.table
    }
}

impl<S: State, E: Event> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", self.current_state())
            .field("transitions", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{guarded_transition, simple_transition, TableBuilder};
    use std::sync::Mutex;

    #[derive(Clone, PartialEq, Debug)]
    enum DoorState {
        Closed,
        Opened,
        Walking,
        Broken,
    }

    impl State for DoorState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Opened => "Opened",
                Self::Walking => "Walking",
                Self::Broken => "Broken",
            }
        }
    }

    #[derive(Debug)]
    enum DoorEvent {
        Open,
        Close,
        Walk { ready: bool, distance: u32 },
        Stop,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum DoorEventKind {
        Open,
        Close,
        Walk,
        Stop,
    }

    impl Event for DoorEvent {
        type Kind = DoorEventKind;

        fn kind(&self) -> DoorEventKind {
            match self {
                Self::Open => DoorEventKind::Open,
                Self::Close => DoorEventKind::Close,
                Self::Walk { .. } => DoorEventKind::Walk,
                Self::Stop => DoorEventKind::Stop,
            }
        }
    }

    type Log = Arc<Mutex<Vec<String>>>;

    fn recorder(log: &Log, label: &'static str) -> impl Fn(&DoorEvent) + Send + Sync + 'static {
        let log = Arc::clone(log);
        move |event: &DoorEvent| {
            let entry = match event {
                DoorEvent::Walk { distance, .. } => format!("{label} {distance}m"),
                _ => label.to_string(),
            };
            log.lock().unwrap().push(entry);
        }
    }

    fn machine(log: &Log) -> Machine<DoorState, DoorEvent> {
        TableBuilder::new()
            .initial(DoorState::Closed)
            .transitions(vec![
                simple_transition(
                    DoorState::Closed,
                    DoorEventKind::Open,
                    DoorState::Opened,
                    recorder(log, "open"),
                ),
                simple_transition(
                    DoorState::Opened,
                    DoorEventKind::Close,
                    DoorState::Closed,
                    recorder(log, "close"),
                ),
                guarded_transition(
                    DoorState::Opened,
                    DoorEventKind::Walk,
                    DoorState::Walking,
                    recorder(log, "walking"),
                    |e: &DoorEvent| matches!(e, DoorEvent::Walk { ready: true, .. }),
                ),
                simple_transition(
                    DoorState::Walking,
                    DoorEventKind::Stop,
                    DoorState::Opened,
                    recorder(log, "stop"),
                ),
                simple_transition(
                    DoorState::Walking,
                    DoorEventKind::Close,
                    DoorState::Closed,
                    recorder(log, "close"),
                ),
            ])
            .build_machine()
            .unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = machine(&Log::default());

        assert!(machine.is(&DoorState::Closed));
        assert!(!machine.is(&DoorState::Opened));
        assert!(!machine.is(&DoorState::Walking));
        assert_eq!(machine.current_state(), &DoorState::Closed);
        assert_eq!(machine.current_index(), 0);
    }

    #[test]
    fn on_moves_to_target_and_runs_action_once() {
        let log = Log::default();
        let mut machine = machine(&log);

        assert!(machine.on(&DoorEvent::Open));
        assert!(machine.is(&DoorState::Opened));
        assert!(!machine.is(&DoorState::Closed));
        assert_eq!(*log.lock().unwrap(), vec!["open"]);
    }

    #[test]
    fn unmatched_event_is_idempotent_no_op() {
        let log = Log::default();
        let mut machine = machine(&log);

        for _ in 0..3 {
            assert!(!machine.on(&DoorEvent::Stop));
            assert!(machine.is(&DoorState::Closed));
        }
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn guard_rejection_leaves_state_and_skips_action() {
        let log = Log::default();
        let mut machine = machine(&log);
        machine.on(&DoorEvent::Open);

        assert!(!machine.on(&DoorEvent::Walk {
            ready: false,
            distance: 12
        }));
        assert!(machine.is(&DoorState::Opened));
        assert_eq!(*log.lock().unwrap(), vec!["open"]);
    }

    #[test]
    fn guarded_transition_passes_payload_to_action() {
        let log = Log::default();
        let mut machine = machine(&log);
        machine.on(&DoorEvent::Open);

        assert!(machine.on(&DoorEvent::Walk {
            ready: true,
            distance: 5
        }));
        assert!(machine.is(&DoorState::Walking));
        assert_eq!(*log.lock().unwrap(), vec!["open", "walking 5m"]);
    }

    #[test]
    fn try_is_reports_unknown_state() {
        let machine = machine(&Log::default());

        assert!(matches!(machine.try_is(&DoorState::Closed), Ok(true)));
        assert!(matches!(
            machine.try_is(&DoorState::Broken),
            Err(BuildError::UnknownState { state }) if state == "Broken"
        ));
    }

    #[test]
    #[should_panic(expected = "Broken")]
    fn is_panics_on_unknown_state() {
        let machine = machine(&Log::default());

        machine.is(&DoorState::Broken);
    }

    #[test]
    fn machines_from_one_table_are_independent() {
        let log = Log::default();
        let table = machine(&log).table().clone();
        let mut first = table.machine();
        let second = table.machine();

        first.on(&DoorEvent::Open);

        assert!(first.is(&DoorState::Opened));
        assert!(second.is(&DoorState::Closed));
    }
}
