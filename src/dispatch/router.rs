//! Routing of events to the transitions declared for their kind.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps each event kind to the positions of its transitions in the table.
///
/// Positions are kept in declaration order. Kinds with no transitions
/// route to an empty slice.
#[derive(Clone, Debug)]
pub struct EventRouter<K> {
    routes: HashMap<K, Vec<usize>>,
}

impl<K: Copy + Eq + Hash> EventRouter<K> {
    /// Build the router from the event kind of each transition, in table order.
    pub fn new<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut routes: HashMap<K, Vec<usize>> = HashMap::new();
        for (position, kind) in kinds.into_iter().enumerate() {
            routes.entry(kind).or_default().push(position);
        }
        Self { routes }
    }

    /// Table positions of transitions declared for `kind`.
    pub fn route(&self, kind: K) -> &[usize] {
        self.routes.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct kinds with at least one transition.
    pub fn kinds(&self) -> usize {
        self.routes.len()
    }
}
