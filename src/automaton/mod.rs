//! Automata over a transition relation.
//!
//! An automaton wraps a [`TransitionStore`] and exposes the full
//! bidirectional query surface plus insertion. Three variants share the
//! [`Automaton`] trait:
//!
//! - [`Nfa`]: non-deterministic, insertion never fails
//! - [`Dfa`]: deterministic, enforces a single end state per (start, event)
//! - [`DfaDecorator`]: adds the same guarantee on top of any boxed
//!   non-deterministic automaton
//!
//! The states and events an automaton knows about are derived from its
//! stored transitions; nothing else is tracked.
//!
//! # Example
//!
//! ```rust
//! use automata_runner::automaton::{Automaton, Dfa, DeterministicAutomaton, Nfa};
//! use automata_runner::core::{StandardEvent, StandardState};
//!
//! let (a, b, c) = (
//!     StandardState::new("A"),
//!     StandardState::new("B"),
//!     StandardState::new("C"),
//! );
//! let x = StandardEvent::new("x");
//!
//! let mut nfa = Nfa::new();
//! nfa.add(a.clone(), x.clone(), b.clone())
//!     .add(a.clone(), x.clone(), c.clone());
//! assert_eq!(nfa.derivate(&a, &x).len(), 2);
//!
//! let mut dfa = Dfa::new();
//! dfa.add(a.clone(), x.clone(), b.clone()).unwrap();
//! assert!(dfa.add(a.clone(), x.clone(), c).is_err());
//! assert_eq!(dfa.derivate_single(&a, &x), Some(b));
//! ```

mod decorator;
mod dfa;
mod error;
mod nfa;

pub use decorator::DfaDecorator;
pub use dfa::Dfa;
pub use error::AutomatonError;
pub use nfa::Nfa;

use crate::core::{Event, State, Transition};
use crate::store::TransitionStore;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A set of states plus a relation of labeled transitions between them.
///
/// Every query is total: absence of a match is an empty set. The query
/// methods default to the backing store's answers.
pub trait Automaton<S: State, E: Event> {
    /// Insert a transition.
    ///
    /// Returns `Ok(false)` when the exact triple was already stored, which
    /// is not an error. Deterministic automata fail with
    /// [`AutomatonError::DuplicateTransition`] when the (start, event) pair
    /// is already defined.
    fn insert(&mut self, transition: Transition<S, E>) -> Result<bool, AutomatonError>;

    /// The store holding this automaton's transitions.
    fn store(&self) -> &dyn TransitionStore<S, E>;

    /// Whether this automaton guarantees at most one end state per
    /// (start, event).
    fn is_deterministic(&self) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.store().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn transitions(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_> {
        self.store().iter()
    }

    /// Forward query: states reachable from `start` on `event`.
    fn derivate(&self, start: &S, event: &E) -> HashSet<S> {
        self.store().derivate(start, event)
    }

    /// Backward query: states that reach `end` on `event`.
    fn integrate(&self, event: &E, end: &S) -> HashSet<S> {
        self.store().integrate(event, end)
    }

    /// Events with at least one transition leaving `start`.
    fn events_from(&self, start: &S) -> HashSet<E> {
        self.store().events_from(start)
    }

    /// Events with at least one transition entering `end`.
    fn events_to(&self, end: &S) -> HashSet<E> {
        self.store().events_to(end)
    }

    /// Events labeling a direct `start` -> `end` transition.
    fn events_between(&self, start: &S, end: &S) -> HashSet<E> {
        self.store().events_between(start, end)
    }

    fn end_states_from(&self, start: &S) -> HashSet<S> {
        self.store().end_states_from(start)
    }

    fn start_states_from(&self, end: &S) -> HashSet<S> {
        self.store().start_states_from(end)
    }

    /// States entered by `event` from any start.
    fn event_destinations(&self, event: &E) -> HashSet<S> {
        self.store().event_destinations(event)
    }

    /// States `event` fires from, to any end.
    fn event_origins(&self, event: &E) -> HashSet<S> {
        self.store().event_origins(event)
    }

    fn states(&self) -> HashSet<S> {
        self.store().states()
    }

    fn events(&self) -> HashSet<E> {
        self.store().events()
    }
}

/// An automaton with at most one end state for every (start, event).
pub trait DeterministicAutomaton<S: State, E: Event>: Automaton<S, E> {
    /// The unique end state for (start, event), or `None` if undefined.
    ///
    /// If the relation was corrupted into holding several end states, the
    /// first match in the store's iteration order is returned, so repeated
    /// calls on the same automaton always agree.
    fn derivate_single(&self, start: &S, event: &E) -> Option<S> {
        self.transitions()
            .find(|t| t.fires_from(start, event))
            .map(|t| t.end.clone())
    }

    /// Check a batch of transitions against the stored relation and against
    /// itself, accumulating every conflicting (start, event) pair.
    fn validate_batch(
        &self,
        batch: &[Transition<S, E>],
    ) -> Validation<(), NonEmptyVec<AutomatonError>> {
        check_deterministic(batch, |start, event| {
            !self.derivate(start, event).is_empty()
        })
    }

    /// Insert a batch of transitions, all or nothing.
    ///
    /// Nothing is inserted unless the whole batch validates. On success the
    /// number of newly inserted transitions is returned.
    fn try_extend(
        &mut self,
        batch: Vec<Transition<S, E>>,
    ) -> Validation<usize, NonEmptyVec<AutomatonError>> {
        if let Validation::Failure(errors) = self.validate_batch(&batch) {
            return Validation::Failure(errors);
        }

        let mut inserted = 0;
        for transition in batch {
            match self.insert(transition) {
                Ok(true) => inserted += 1,
                Ok(false) => {}
                Err(error) => return Validation::fail(error),
            }
        }
        Validation::success(inserted)
    }
}

/// Validate that `batch` can be added to a deterministic relation.
///
/// A transition conflicts when `already_defined` reports its (start, event)
/// pair, or when an earlier transition in the batch used the same pair.
pub(crate) fn check_deterministic<S, E, F>(
    batch: &[Transition<S, E>],
    already_defined: F,
) -> Validation<(), NonEmptyVec<AutomatonError>>
where
    S: State,
    E: Event,
    F: Fn(&S, &E) -> bool,
{
    let mut seen: HashSet<(&S, &E)> = HashSet::new();

    let checks: Vec<Validation<(), NonEmptyVec<AutomatonError>>> = batch
        .iter()
        .map(|t| {
            let first_in_batch = seen.insert((&t.start, &t.event));
            if first_in_batch && !already_defined(&t.start, &t.event) {
                Validation::success(())
            } else {
                Validation::fail(AutomatonError::duplicate(&t.start, &t.event))
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StandardEvent, StandardState};

    fn st(name: &str) -> StandardState {
        StandardState::new(name)
    }

    fn ev(name: &str) -> StandardEvent {
        StandardEvent::new(name)
    }

    #[test]
    fn check_accumulates_all_conflicts() {
        let batch = vec![
            Transition::new(st("1"), ev("a"), st("2")),
            Transition::new(st("1"), ev("a"), st("3")),
            Transition::new(st("2"), ev("b"), st("3")),
            Transition::new(st("4"), ev("c"), st("1")),
        ];

        let result = check_deterministic(&batch, |start, _| *start == st("2"));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| *e
                    == AutomatonError::DuplicateTransition {
                        start: "1".to_string(),
                        event: "a".to_string(),
                    }));
                assert!(errors.iter().any(|e| *e
                    == AutomatonError::DuplicateTransition {
                        start: "2".to_string(),
                        event: "b".to_string(),
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn check_passes_disjoint_batch() {
        let batch = vec![
            Transition::new(st("1"), ev("a"), st("2")),
            Transition::new(st("1"), ev("b"), st("2")),
            Transition::new(st("2"), ev("a"), st("2")),
        ];

        assert!(check_deterministic(&batch, |_, _| false).is_success());
    }

    struct Unchecked(Nfa<StandardState, StandardEvent>);

    impl Automaton<StandardState, StandardEvent> for Unchecked {
        fn insert(
            &mut self,
            transition: Transition<StandardState, StandardEvent>,
        ) -> Result<bool, AutomatonError> {
            self.0.insert(transition)
        }

        fn store(&self) -> &dyn TransitionStore<StandardState, StandardEvent> {
            self.0.store()
        }

        fn is_deterministic(&self) -> bool {
            true
        }
    }

    impl DeterministicAutomaton<StandardState, StandardEvent> for Unchecked {}

    #[test]
    fn derivate_single_is_stable_on_a_corrupted_relation() {
        let mut nfa = Nfa::with_strategy(crate::store::StorageStrategy::List);
        for end in 0..8 {
            nfa.add(st("s"), ev("e"), st(&end.to_string()));
        }
        let corrupted = Unchecked(nfa);

        let picks: HashSet<Option<StandardState>> = (0..200)
            .map(|_| corrupted.derivate_single(&st("s"), &ev("e")))
            .collect();

        assert_eq!(picks, HashSet::from([Some(st("0"))]));
        assert_eq!(corrupted.derivate_single(&st("s"), &ev("z")), None);
    }

    #[test]
    fn trait_objects_answer_queries() {
        let mut nfa = Nfa::new();
        nfa.add(st("1"), ev("a"), st("2"));
        let automaton: &dyn Automaton<StandardState, StandardEvent> = &nfa;

        assert!(!automaton.is_deterministic());
        assert_eq!(automaton.len(), 1);
        assert_eq!(automaton.derivate(&st("1"), &ev("a")), HashSet::from([st("2")]));
    }
}
