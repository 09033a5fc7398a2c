//! Core State trait for state machine states.
//!
//! States are opaque tags declared by the application. The machine only
//! ever compares them for equality; any data a state needs lives elsewhere.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the derived state set
/// - `PartialEq`: identity of a state is its equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: tables are shared between threads
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorState {
///     Closed,
///     Opened,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opened => "Opened",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Opened.name(), "Opened");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
