//! Builder for constructing automata.

use crate::automaton::{
    check_deterministic, Automaton, AutomatonError, DeterministicAutomaton, Dfa, DfaDecorator,
    Nfa,
};
use crate::builder::error::BuildError;
use crate::core::{Event, State, Transition};
use crate::store::StorageStrategy;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Which automaton variant a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutomatonKind {
    /// [`Nfa`]: any number of end states per (start, event)
    #[default]
    Nondeterministic,
    /// [`Dfa`]: single end state enforced directly
    Deterministic,
    /// [`DfaDecorator`] around an [`Nfa`]
    DeterministicDecorator,
}

impl AutomatonKind {
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::Nondeterministic)
    }
}

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```
/// use automata_runner::builder::{AutomatonBuilder, AutomatonKind, BuildError};
/// use automata_runner::core::{StandardEvent, StandardState};
/// use automata_runner::store::StorageStrategy;
///
/// let (a, b) = (StandardState::new("A"), StandardState::new("B"));
/// let x = StandardEvent::new("x");
///
/// let automaton = AutomatonBuilder::new()
///     .storage(StorageStrategy::Indexed)
///     .kind(AutomatonKind::Deterministic)
///     .transition(a.clone(), x.clone(), b.clone())
///     .transition(b.clone(), x.clone(), a.clone())
///     .build()
///     .unwrap();
/// assert!(automaton.is_deterministic());
///
/// let result = AutomatonBuilder::new()
///     .kind(AutomatonKind::Deterministic)
///     .transition(a.clone(), x.clone(), b.clone())
///     .transition(a.clone(), x.clone(), a.clone())
///     .build();
/// assert!(matches!(result, Err(BuildError::ConflictingTransitions(_))));
/// ```
pub struct AutomatonBuilder<S, E> {
    storage: StorageStrategy,
    kind: AutomatonKind,
    transitions: Vec<Transition<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> AutomatonBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            storage: StorageStrategy::default(),
            kind: AutomatonKind::default(),
            transitions: Vec::new(),
        }
    }

    /// Set the storage strategy.
    pub fn storage(mut self, storage: StorageStrategy) -> Self {
        self.storage = storage;
        self
    }

    /// Set the storage strategy by name, as read from configuration.
    /// Returns an error if the name is not recognized.
    pub fn storage_named(self, name: &str) -> Result<Self, BuildError> {
        let storage = name.parse()?;
        Ok(self.storage(storage))
    }

    /// Set the automaton variant.
    pub fn kind(mut self, kind: AutomatonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a transition.
    pub fn transition(mut self, start: S, event: E, end: S) -> Self {
        self.transitions.push(Transition::new(start, event, end));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Check the collected transitions against the selected variant.
    ///
    /// Non-deterministic automata accept anything. For deterministic ones,
    /// every (start, event) pair defined more than once is reported, not
    /// just the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<AutomatonError>> {
        if self.kind.is_deterministic() {
            check_deterministic(&self.transitions, |_, _| false)
        } else {
            Validation::success(())
        }
    }

    /// Build the automaton.
    /// Returns an error listing every conflict if validation fails.
    pub fn build(self) -> Result<Box<dyn Automaton<S, E>>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::ConflictingTransitions(
                errors.iter().cloned().collect(),
            ));
        }

        match self.kind {
            AutomatonKind::Nondeterministic => {
                let mut nfa = Nfa::with_strategy(self.storage);
                nfa.extend(self.transitions);
                Ok(Box::new(nfa))
            }
            AutomatonKind::Deterministic => {
                let mut dfa = Dfa::with_strategy(self.storage);
                fill(&mut dfa, self.transitions)?;
                Ok(Box::new(dfa))
            }
            AutomatonKind::DeterministicDecorator => {
                let mut dfa = DfaDecorator::wrap(Box::new(Nfa::with_strategy(self.storage)))?;
                fill(&mut dfa, self.transitions)?;
                Ok(Box::new(dfa))
            }
        }
    }
}

fn fill<S, E, A>(automaton: &mut A, transitions: Vec<Transition<S, E>>) -> Result<(), BuildError>
where
    S: State,
    E: Event,
    A: DeterministicAutomaton<S, E>,
{
    match automaton.try_extend(transitions) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::ConflictingTransitions(
            errors.iter().cloned().collect(),
        )),
    }
}

impl<S: State + 'static, E: Event + 'static> Default for AutomatonBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StandardEvent, StandardState};
    use std::collections::HashSet;

    fn st(name: &str) -> StandardState {
        StandardState::new(name)
    }

    fn ev(name: &str) -> StandardEvent {
        StandardEvent::new(name)
    }

    #[test]
    fn default_builds_empty_nfa() {
        let automaton = AutomatonBuilder::<StandardState, StandardEvent>::new()
            .build()
            .unwrap();

        assert!(automaton.is_empty());
        assert!(!automaton.is_deterministic());
    }

    #[test]
    fn nondeterministic_keeps_every_end_state() {
        let automaton = AutomatonBuilder::new()
            .storage(StorageStrategy::List)
            .transition(st("1"), ev("a"), st("2"))
            .transition(st("1"), ev("a"), st("3"))
            .transition(st("1"), ev("a"), st("3"))
            .build()
            .unwrap();

        assert_eq!(automaton.len(), 2);
        assert_eq!(
            automaton.derivate(&st("1"), &ev("a")),
            HashSet::from([st("2"), st("3")])
        );
    }

    #[test]
    fn deterministic_kinds_report_all_conflicts() {
        for kind in [
            AutomatonKind::Deterministic,
            AutomatonKind::DeterministicDecorator,
        ] {
            let result = AutomatonBuilder::new()
                .kind(kind)
                .transition(st("1"), ev("a"), st("2"))
                .transition(st("1"), ev("a"), st("3"))
                .transition(st("2"), ev("b"), st("3"))
                .transition(st("2"), ev("b"), st("1"))
                .transition(st("3"), ev("c"), st("1"))
                .build();

            match result {
                Err(BuildError::ConflictingTransitions(errors)) => assert_eq!(errors.len(), 2),
                Err(other) => panic!("unexpected error: {other}"),
                Ok(_) => panic!("Expected conflicts, got an automaton"),
            }
        }
    }

    #[test]
    fn deterministic_kinds_build_deterministic_automata() {
        for kind in [
            AutomatonKind::Deterministic,
            AutomatonKind::DeterministicDecorator,
        ] {
            let automaton = AutomatonBuilder::new()
                .kind(kind)
                .transitions(vec![
                    Transition::new(st("1"), ev("a"), st("2")),
                    Transition::new(st("2"), ev("a"), st("1")),
                ])
                .build()
                .unwrap();

            assert!(automaton.is_deterministic());
            assert_eq!(automaton.len(), 2);
        }
    }

    #[test]
    fn storage_named_parses_configuration() {
        let builder = AutomatonBuilder::<StandardState, StandardEvent>::new()
            .storage_named("Indexed")
            .unwrap();
        assert_eq!(builder.storage, StorageStrategy::Indexed);

        let result = AutomatonBuilder::<StandardState, StandardEvent>::new().storage_named("btree");
        assert!(matches!(result, Err(BuildError::UnknownStorageStrategy(_))));
    }

    #[test]
    fn validate_is_success_for_nondeterministic() {
        let builder = AutomatonBuilder::new()
            .transition(st("1"), ev("a"), st("2"))
            .transition(st("1"), ev("a"), st("3"));

        assert!(builder.validate().is_success());
        assert!(builder
            .kind(AutomatonKind::Deterministic)
            .validate()
            .is_failure());
    }
}
