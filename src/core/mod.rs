//! Core state machine types.
//!
//! This module contains the application-facing vocabulary of the machine:
//! - State definitions via the `State` trait
//! - Event definitions via the `Event` trait
//! - Guard predicates and actions attached to transitions
//! - The state registry derived from a transition table

mod event;
mod guard;
mod registry;
mod state;

pub use event::Event;
pub use guard::{Action, Guard};
pub use registry::StateRegistry;
pub use state::State;
