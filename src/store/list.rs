//! Vector-backed transition store.

use super::TransitionStore;
use crate::core::{Event, State, Transition};

/// Transition store over an unordered list.
///
/// Insert checks every stored triple for structural equality before
/// appending, and every query scans the whole list.
#[derive(Clone, Debug)]
pub struct ListStore<S, E> {
    transitions: Vec<Transition<S, E>>,
}

impl<S, E> Default for ListStore<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> ListStore<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }
}

impl<S: State, E: Event> TransitionStore<S, E> for ListStore<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> bool {
        if self.transitions.contains(&transition) {
            return false;
        }
        self.transitions.push(transition);
        true
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_> {
        Box::new(self.transitions.iter())
    }
}
