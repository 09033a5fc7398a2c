//! Builder API for ergonomic transition table construction.
//!
//! This module provides fluent builders and macros for declaring states,
//! events and transition tables with minimal boilerplate. Every table is
//! validated once, when it is built.

pub mod error;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::BuildError;
pub use table::TableBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, Guard, State};
use crate::dispatch::Transition;
use std::sync::Arc;

/// Create an unguarded transition.
///
/// Self-loops are not rejected here; [`TableBuilder::build`] refuses them.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Opened,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent: DoorEventKind {
///         Open,
///     }
/// }
///
/// let transition = simple_transition(
///     Door::Closed,
///     DoorEventKind::Open,
///     Door::Opened,
///     |_: &DoorEvent| println!("open"),
/// );
/// assert!(transition.guard.is_none());
/// ```
pub fn simple_transition<S, E, F>(from: S, event: E::Kind, to: S, action: F) -> Transition<S, E>
where
    S: State,
    E: Event,
    F: Fn(&E) + Send + Sync + 'static,
{
    Transition {
        from,
        event,
        to,
        action: Arc::new(action),
        guard: None,
    }
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use switchyard::builder::guarded_transition;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Opened,
///         Walking,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent: DoorEventKind {
///         Walk { ready: bool },
///     }
/// }
///
/// let transition = guarded_transition(
///     Door::Opened,
///     DoorEventKind::Walk,
///     Door::Walking,
///     |_: &DoorEvent| println!("walking"),
///     |e: &DoorEvent| matches!(e, DoorEvent::Walk { ready: true }),
/// );
///
/// assert!(transition.fire(&DoorEvent::Walk { ready: true }));
/// assert!(!transition.fire(&DoorEvent::Walk { ready: false }));
/// ```
pub fn guarded_transition<S, E, F, G>(
    from: S,
    event: E::Kind,
    to: S,
    action: F,
    guard: G,
) -> Transition<S, E>
where
    S: State,
    E: Event,
    F: Fn(&E) + Send + Sync + 'static,
    G: Fn(&E) -> bool + Send + Sync + 'static,
{
    Transition {
        guard: Some(Guard::new(guard)),
        ..simple_transition(from, event, to, action)
    }
}
