//! Derivation of the state set referenced by a transition table.
//!
//! Every state that appears as a source or a target gets exactly one
//! slot, in the order it is first seen. The slot position is the dense
//! index the machine stores as its current state.

use super::state::State;

/// Ordered, duplicate-free set of states with dense indices.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, StateRegistry};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Light {
///     Red,
///     Green,
///     Yellow,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///             Self::Yellow => "Yellow",
///         }
///     }
/// }
///
/// let edges = [
///     (Light::Red, Light::Green),
///     (Light::Green, Light::Yellow),
///     (Light::Yellow, Light::Red),
/// ];
/// let registry = StateRegistry::from_pairs(edges.iter().map(|(a, b)| (a, b)));
///
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.index_of(&Light::Yellow), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct StateRegistry<S: State> {
    states: Vec<S>,
}

impl<S: State> StateRegistry<S> {
    /// Build the registry from (source, target) pairs in declaration order.
    ///
    /// Within each pair the source is registered before the target.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a S, &'a S)>,
        S: 'a,
    {
        let mut states: Vec<S> = Vec::new();
        for (source, target) in pairs {
            for state in [source, target] {
                if !states.contains(state) {
                    states.push(state.clone());
                }
            }
        }
        Self { states }
    }

    /// Index assigned to `state`, if it belongs to the set.
    pub fn index_of(&self, state: &S) -> Option<usize> {
        self.states.iter().position(|s| s == state)
    }

    /// State stored at `index`.
    pub fn state(&self, index: usize) -> Option<&S> {
        self.states.get(index)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index_of(state).is_some()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States in index order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }
}
