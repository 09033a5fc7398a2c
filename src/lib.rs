//! Switchyard: a table-driven finite state machine
//!
//! A machine is described by a fixed table of transitions, each one a
//! (source state, event kind, target state, action, optional guard) tuple.
//! The table is validated once when it is built; afterwards any number of
//! lightweight machines can run it, each holding nothing but the index of
//! its current state.
//!
//! # Core Concepts
//!
//! - **State**: Application-declared tags via the `State` trait
//! - **Event**: Tagged values via the `Event` trait; routing keys on the tag
//! - **Guards**: Predicates over the event that can veto a transition
//! - **Tables**: Immutable, shareable transition tables built by `TableBuilder`
//! - **Machines**: `on(event)` dispatches, `is(state)` inspects
//!
//! # Example
//!
//! ```rust
//! use switchyard::{event_enum, state_enum, transition_table};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Opened,
//!     }
//! }
//!
//! event_enum! {
//!     enum DoorEvent: DoorEventKind {
//!         Open,
//!         Close,
//!     }
//! }
//!
//! fn log(_: &DoorEvent) {}
//!
//! let table = transition_table! {
//!     initial: Door::Closed;
//!     Door::Closed, DoorEventKind::Open  => Door::Opened, log;
//!     Door::Opened, DoorEventKind::Close => Door::Closed, log;
//! }
//! .unwrap();
//!
//! let mut door = Arc::new(table).machine();
//! assert!(door.is(&Door::Closed));
//! assert!(door.on(&DoorEvent::Open));
//! assert!(door.is(&Door::Opened));
//! assert!(!door.on(&DoorEvent::Open));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use builder::{BuildError, TableBuilder, TransitionBuilder};
pub use self::core::{Event, Guard, State};
pub use dispatch::{Machine, Transition, TransitionTable};
