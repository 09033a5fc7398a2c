//! Table-driven dispatch of events.
//!
//! This module turns a validated list of transitions into something a
//! machine can run cheaply many times.
//!
//! # Key Concepts
//!
//! - **Transitions**: source state, event kind, target state, action and optional guard
//! - **Tables**: the immutable, shareable set of transitions plus its derived state set
//! - **Routing**: each event kind maps to its transitions in declaration order
//! - **Machines**: one current-state index per instance, advanced by `on`

mod dispatcher;
mod machine;
mod router;
mod table;
mod transition;

pub use machine::Machine;
pub use router::EventRouter;
pub use table::TransitionTable;
pub use transition::Transition;
