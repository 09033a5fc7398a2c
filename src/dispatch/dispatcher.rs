//! Resolution of one event against a table for the current state.

use crate::core::{Event, State};
use crate::dispatch::table::TransitionTable;

/// What happened to an event offered to the dispatcher.
///
/// `position` counts within the transitions routed for the event's kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The candidate fired; the machine moves to `target`.
    Fired { position: usize, target: usize },

    /// The candidate's guard vetoed the event.
    Rejected { position: usize },

    /// No transition for the event kind starts at the current state.
    Unmatched,
}

impl Outcome {
    pub(crate) fn fired(self) -> bool {
        matches!(self, Self::Fired { .. })
    }
}

/// Offer `event` to the first transition of its kind whose source is
/// `current`.
///
/// Only that one candidate is considered: a guard veto ends the dispatch
/// without looking further down the table.
pub(crate) fn dispatch<S: State, E: Event>(
    table: &TransitionTable<S, E>,
    current: usize,
    event: &E,
) -> Outcome {
    let candidate = table
        .routed_entries(event.kind())
        .enumerate()
        .find(|(_, entry)| entry.source == current);

    let Some((position, entry)) = candidate else {
        return Outcome::Unmatched;
    };

    if entry.transition.fire(event) {
        Outcome::Fired {
            position,
            target: entry.target,
        }
    } else {
        Outcome::Rejected { position }
    }
}
