//! Events fed into a machine.
//!
//! An event is a tagged value: the tag (its kind) selects which
//! transitions are considered, the payload is only seen by guards and
//! actions.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for event instances.
///
/// Routing keys on [`Event::kind`] alone. Two events with the same kind
/// reach the same transitions regardless of payload.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
///
/// #[derive(Debug)]
/// enum DoorEvent {
///     Open,
///     Walk { ready: bool },
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorEventKind {
///     Open,
///     Walk,
/// }
///
/// impl Event for DoorEvent {
///     type Kind = DoorEventKind;
///
///     fn kind(&self) -> DoorEventKind {
///         match self {
///             Self::Open => DoorEventKind::Open,
///             Self::Walk { .. } => DoorEventKind::Walk,
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Walk { ready: true }.kind(), DoorEventKind::Walk);
/// ```
pub trait Event {
    /// Tag identifying the class of an event.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    /// The kind this instance belongs to.
    fn kind(&self) -> Self::Kind;
}
