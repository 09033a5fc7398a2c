//! Build errors for transition tables and transitions.

use thiserror::Error;

/// Errors that can occur when building transition tables and transitions.
///
/// All of them describe a defect in the table's configuration and are
/// reported before any machine runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition event kind not specified. Call .on(kind)")]
    MissingEvent,

    #[error("Transition action not specified. Call .action(f)")]
    MissingAction,

    #[error("Transition loops on state '{state}'; source and target must differ")]
    SelfLoop { state: String },

    #[error(
        "Transitions {first} and {second} both leave '{state}' on event {event}; \
         only one transition per state and event kind is allowed"
    )]
    DuplicateTransition {
        first: usize,
        second: usize,
        state: String,
        event: String,
    },

    #[error("Initial state '{state}' does not appear in any transition")]
    UnknownInitialState { state: String },

    #[error("State '{state}' is not referenced by the transition table")]
    UnknownState { state: String },
}
