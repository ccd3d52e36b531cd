//! Deterministic automaton enforcing its invariant directly.

use super::{Automaton, AutomatonError, DeterministicAutomaton};
use crate::core::{Event, State, Transition};
use crate::store::{StorageStrategy, TransitionStore};
use tracing::{debug, trace};

/// Deterministic automaton over its own store.
///
/// Each (start, event) pair has at most one end state. Once a pair is
/// defined, every later insertion for it fails with
/// [`AutomatonError::DuplicateTransition`], including one that repeats the
/// stored triple exactly. Failed insertions leave the store untouched.
pub struct Dfa<S, E> {
    store: Box<dyn TransitionStore<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> Dfa<S, E> {
    pub fn new() -> Self {
        Self::with_strategy(StorageStrategy::default())
    }

    pub fn with_strategy(strategy: StorageStrategy) -> Self {
        Self {
            store: strategy.create(),
        }
    }

    /// Add a transition, returning the automaton for chained calls.
    pub fn add(&mut self, start: S, event: E, end: S) -> Result<&mut Self, AutomatonError> {
        self.insert(Transition::new(start, event, end))?;
        Ok(self)
    }
}

impl<S: State + 'static, E: Event + 'static> Default for Dfa<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State + 'static, E: Event + 'static> Automaton<S, E> for Dfa<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> Result<bool, AutomatonError> {
        let Transition { start, event, end } = &transition;

        if !self.store.derivate(start, event).is_empty() {
            debug!(
                start = start.name(),
                event = event.name(),
                "rejected transition for an already defined pair"
            );
            return Err(AutomatonError::duplicate(start, event));
        }

        trace!(
            start = start.name(),
            event = event.name(),
            end = end.name(),
            "transition added"
        );
        Ok(self.store.insert(transition))
    }

    fn store(&self) -> &dyn TransitionStore<S, E> {
        self.store.as_ref()
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

impl<S: State + 'static, E: Event + 'static> DeterministicAutomaton<S, E> for Dfa<S, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StandardEvent, StandardState};
    use std::collections::HashSet;
    use stillwater::validation::Validation;

    fn st(name: &str) -> StandardState {
        StandardState::new(name)
    }

    fn ev(name: &str) -> StandardEvent {
        StandardEvent::new(name)
    }

    #[test]
    fn first_insertion_for_a_pair_succeeds() {
        let mut dfa = Dfa::new();
        let result = dfa
            .add(st("1"), ev("a"), st("2"))
            .and_then(|dfa| dfa.add(st("1"), ev("b"), st("3")))
            .map(|dfa| dfa.len());

        assert_eq!(result, Ok(2));
    }

    #[test]
    fn second_insertion_for_a_pair_fails_without_mutation() {
        for strategy in [
            StorageStrategy::List,
            StorageStrategy::Set,
            StorageStrategy::Indexed,
        ] {
            let mut dfa = Dfa::with_strategy(strategy);
            dfa.add(st("1"), ev("a"), st("2")).unwrap();

            let result = dfa.add(st("1"), ev("a"), st("3"));
            assert!(matches!(
                result,
                Err(AutomatonError::DuplicateTransition { .. })
            ));
            assert_eq!(dfa.derivate(&st("1"), &ev("a")), HashSet::from([st("2")]));
            assert_eq!(dfa.len(), 1);
        }
    }

    #[test]
    fn repeating_the_same_triple_is_rejected() {
        let mut dfa = Dfa::new();
        dfa.add(st("1"), ev("a"), st("2")).unwrap();

        let error = dfa.add(st("1"), ev("a"), st("2")).map(|_| ()).unwrap_err();
        assert_eq!(error.to_string(), "(1, a) is already defined");
    }

    #[test]
    fn derivate_single_returns_unique_or_none() {
        let mut dfa = Dfa::new();
        dfa.add(st("1"), ev("a"), st("2")).unwrap();

        assert_eq!(dfa.derivate_single(&st("1"), &ev("a")), Some(st("2")));
        assert_eq!(dfa.derivate_single(&st("1"), &ev("b")), None);
        assert_eq!(dfa.derivate_single(&st("2"), &ev("a")), None);
        assert!(dfa.is_deterministic());
    }

    #[test]
    fn try_extend_is_all_or_nothing() {
        let mut dfa = Dfa::new();
        dfa.add(st("1"), ev("a"), st("2")).unwrap();

        let result = dfa.try_extend(vec![
            Transition::new(st("2"), ev("a"), st("3")),
            Transition::new(st("1"), ev("a"), st("3")),
            Transition::new(st("3"), ev("b"), st("1")),
            Transition::new(st("3"), ev("b"), st("2")),
        ]);

        match result {
            Validation::Failure(errors) => assert_eq!(errors.len(), 2),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
        assert_eq!(dfa.len(), 1);

        let result = dfa.try_extend(vec![
            Transition::new(st("2"), ev("a"), st("3")),
            Transition::new(st("3"), ev("b"), st("1")),
        ]);
        assert!(matches!(result, Validation::Success(2)));
        assert_eq!(dfa.len(), 3);
    }
}
