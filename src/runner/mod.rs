//! Execution of an automaton over a sequence of events.
//!
//! A [`Runner`] borrows an automaton and owns a configuration: the set of
//! all states simultaneously reachable by the events applied so far. It
//! always simulates the automaton non-deterministically, so the same runner
//! serves deterministic and non-deterministic automata alike; with a
//! deterministic automaton the configuration simply never grows beyond the
//! size it started with.
//!
//! # Example
//!
//! ```rust
//! use automata_runner::automaton::Nfa;
//! use automata_runner::core::{StandardEvent, StandardState};
//! use automata_runner::runner::{Runner, RunnerError};
//!
//! let (a, b, c) = (
//!     StandardState::new("A"),
//!     StandardState::new("B"),
//!     StandardState::terminal("C"),
//! );
//! let (x, y) = (StandardEvent::new("x"), StandardEvent::new("y"));
//!
//! let mut nfa = Nfa::new();
//! nfa.add(a.clone(), x.clone(), a.clone())
//!     .add(a.clone(), x.clone(), b.clone())
//!     .add(b.clone(), y.clone(), c.clone());
//!
//! let mut runner = Runner::new(&nfa, [a.clone()]);
//! runner.apply(&x).unwrap();
//! assert!(runner.is_in_state(&a) && runner.is_in_state(&b));
//! assert!(!runner.is_over());
//!
//! runner.apply(&y).unwrap();
//! assert!(runner.is_over());
//!
//! assert!(matches!(runner.apply(&x), Err(RunnerError::NoState { .. })));
//! assert!(runner.is_in_state(&c));
//! ```

mod error;
mod history;

pub use error::RunnerError;
pub use history::{RunHistory, Step};

use crate::automaton::Automaton;
use crate::core::{Event, State};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Stateful driver advancing a set of active states one event at a time.
///
/// The runner never mutates the automaton. Its configuration changes only
/// through [`Runner::apply`], which either replaces it entirely or leaves it
/// untouched.
///
/// Steps are only recorded by runners created with [`Runner::with_history`].
pub struct Runner<'a, S, E> {
    automaton: &'a dyn Automaton<S, E>,
    current: HashSet<S>,
    history: Option<RunHistory<S, E>>,
}

impl<'a, S: State, E: Event> Runner<'a, S, E> {
    /// Create a runner in the given initial configuration.
    ///
    /// Several initial states model a non-deterministic start. An empty
    /// initial configuration is allowed; every `apply` on it fails.
    pub fn new(automaton: &'a dyn Automaton<S, E>, initial: impl IntoIterator<Item = S>) -> Self {
        Self {
            automaton,
            current: initial.into_iter().collect(),
            history: None,
        }
    }

    /// Create a runner that records every successful step.
    ///
    /// Each step keeps the configurations before and after it, so the
    /// history grows with the run.
    pub fn with_history(
        automaton: &'a dyn Automaton<S, E>,
        initial: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut runner = Self::new(automaton, initial);
        runner.history = Some(RunHistory::new(runner.current.clone()));
        runner
    }

    /// Advance every current state by `event`.
    ///
    /// The new configuration is the union of `derivate(state, event)` over
    /// all current states. If that union is empty the call fails with
    /// [`RunnerError::NoState`] and nothing changes.
    pub fn apply(&mut self, event: &E) -> Result<(), RunnerError> {
        let next = self.successors(&self.current, event);

        if next.is_empty() {
            debug!(
                event = event.name(),
                active = self.current.len(),
                "no state reachable on event"
            );
            return Err(RunnerError::NoState {
                event: event.name().to_string(),
            });
        }

        trace!(
            event = event.name(),
            from = self.current.len(),
            to = next.len(),
            "runner step applied"
        );

        let from = std::mem::replace(&mut self.current, next);
        if let Some(history) = self.history.as_mut() {
            history.record(Step {
                event: event.clone(),
                from,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }
        Ok(())
    }

    /// Apply a sequence of events, stopping at the first that fails.
    ///
    /// Steps applied before the failure are kept.
    pub fn apply_all<'e, I>(&mut self, events: I) -> Result<(), RunnerError>
    where
        I: IntoIterator<Item = &'e E>,
        E: 'e,
    {
        for event in events {
            self.apply(event)?;
        }
        Ok(())
    }

    /// Whether `apply(event)` would succeed. Never mutates the runner.
    pub fn can_apply(&self, event: &E) -> bool {
        self.current
            .iter()
            .any(|state| !self.automaton.derivate(state, event).is_empty())
    }

    /// Whether running `events` from the current configuration would end in
    /// a terminal configuration. Never mutates the runner.
    pub fn accepts<'e, I>(&self, events: I) -> bool
    where
        I: IntoIterator<Item = &'e E>,
        E: 'e,
    {
        let mut configuration = self.current.clone();
        for event in events {
            configuration = self.successors(&configuration, event);
            if configuration.is_empty() {
                return false;
            }
        }
        configuration.iter().any(State::is_terminal)
    }

    pub fn is_in_state(&self, state: &S) -> bool {
        self.current.contains(state)
    }

    /// Whether any current state is terminal.
    pub fn is_over(&self) -> bool {
        self.current.iter().any(State::is_terminal)
    }

    pub fn current_states(&self) -> &HashSet<S> {
        &self.current
    }

    pub fn automaton(&self) -> &'a dyn Automaton<S, E> {
        self.automaton
    }

    /// The recorded steps, if this runner was created with
    /// [`Runner::with_history`].
    pub fn history(&self) -> Option<&RunHistory<S, E>> {
        self.history.as_ref()
    }

    fn successors(&self, configuration: &HashSet<S>, event: &E) -> HashSet<S> {
        configuration
            .iter()
            .flat_map(|state| self.automaton.derivate(state, event))
            .collect()
    }
}
