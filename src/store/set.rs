//! Hash-set-backed transition store.

use super::TransitionStore;
use crate::core::{Event, State, Transition};
use std::collections::HashSet;

/// Transition store over a hash set.
///
/// Duplicates are dropped by the set itself. The set gives no indexed
/// lookup by component, so queries still filter the full relation.
#[derive(Clone, Debug)]
pub struct SetStore<S, E> {
    transitions: HashSet<Transition<S, E>>,
}

impl<S, E> Default for SetStore<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> SetStore<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: HashSet::new(),
        }
    }
}

impl<S: State, E: Event> TransitionStore<S, E> for SetStore<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> bool {
        self.transitions.insert(transition)
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_> {
        Box::new(self.transitions.iter())
    }

    fn contains(&self, transition: &Transition<S, E>) -> bool {
        self.transitions.contains(transition)
    }
}
