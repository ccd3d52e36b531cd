//! Non-deterministic automaton.

use super::{Automaton, AutomatonError};
use crate::core::{Event, State, Transition};
use crate::store::{StorageStrategy, TransitionStore};
use tracing::trace;

/// Non-deterministic automaton over a boxed transition store.
///
/// Any number of end states may exist for the same (start, event). Inserting
/// a triple that is already stored is a no-op, never an error.
pub struct Nfa<S, E> {
    store: Box<dyn TransitionStore<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> Nfa<S, E> {
    /// Create an empty automaton on the default storage strategy.
    pub fn new() -> Self {
        Self::with_strategy(StorageStrategy::default())
    }

    pub fn with_strategy(strategy: StorageStrategy) -> Self {
        Self::with_store(strategy.create())
    }

    /// Create an automaton over an existing store, keeping its contents.
    pub fn with_store(store: Box<dyn TransitionStore<S, E>>) -> Self {
        Self { store }
    }

    /// Add a transition, returning the automaton for chained calls.
    pub fn add(&mut self, start: S, event: E, end: S) -> &mut Self {
        self.record(Transition::new(start, event, end));
        self
    }

    fn record(&mut self, transition: Transition<S, E>) -> bool {
        trace!(
            start = transition.start.name(),
            event = transition.event.name(),
            end = transition.end.name(),
            "inserting transition"
        );
        let inserted = self.store.insert(transition);
        if !inserted {
            trace!("transition already present, ignored");
        }
        inserted
    }
}

impl<S: State + 'static, E: Event + 'static> Default for Nfa<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State + 'static, E: Event + 'static> Automaton<S, E> for Nfa<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> Result<bool, AutomatonError> {
        Ok(self.record(transition))
    }

    fn store(&self) -> &dyn TransitionStore<S, E> {
        self.store.as_ref()
    }
}

impl<S: State + 'static, E: Event + 'static> Extend<Transition<S, E>> for Nfa<S, E> {
    fn extend<I: IntoIterator<Item = Transition<S, E>>>(&mut self, iter: I) {
        for transition in iter {
            self.record(transition);
        }
    }
}

impl<S: State + 'static, E: Event + 'static> FromIterator<Transition<S, E>> for Nfa<S, E> {
    fn from_iter<I: IntoIterator<Item = Transition<S, E>>>(iter: I) -> Self {
        let mut nfa = Self::new();
        nfa.extend(iter);
        nfa
    }
}
