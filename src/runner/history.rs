//! Step history of a runner.
//!
//! Records every successful step as the event consumed together with the
//! configurations before and after it.

use crate::core::{Event, State};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::Duration;

/// Record of one successful `apply`.
#[derive(Clone, Debug)]
pub struct Step<S, E> {
    /// The event consumed
    pub event: E,
    /// Configuration before the step
    pub from: HashSet<S>,
    /// Configuration after the step
    pub to: HashSet<S>,
    /// When the step was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the steps a runner has taken.
///
/// The history starts from the runner's initial configuration and only ever
/// grows; failed steps are never recorded.
///
/// # Example
///
/// ```rust
/// use automata_runner::automaton::Nfa;
/// use automata_runner::core::{StandardEvent, StandardState};
/// use automata_runner::runner::Runner;
///
/// let (a, b) = (StandardState::new("A"), StandardState::terminal("B"));
/// let go = StandardEvent::new("go");
///
/// let mut nfa = Nfa::new();
/// nfa.add(a.clone(), go.clone(), b.clone());
///
/// let mut runner = Runner::with_history(&nfa, [a]);
/// runner.apply(&go).unwrap();
///
/// let history = runner.history().unwrap();
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.events(), vec![&go]);
/// assert_eq!(history.configurations().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RunHistory<S, E> {
    initial: HashSet<S>,
    steps: Vec<Step<S, E>>,
}

impl<S: State, E: Event> RunHistory<S, E> {
    /// Create an empty history starting from `initial`.
    pub fn new(initial: HashSet<S>) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn record(&mut self, step: Step<S, E>) {
        self.steps.push(step);
    }

    /// The configuration the runner started in.
    pub fn initial(&self) -> &HashSet<S> {
        &self.initial
    }

    /// The word consumed so far, in order.
    pub fn events(&self) -> Vec<&E> {
        self.steps.iter().map(|step| &step.event).collect()
    }

    /// Get the path of configurations traversed.
    ///
    /// Starts with the initial configuration, followed by the configuration
    /// reached after each step.
    pub fn configurations(&self) -> Vec<&HashSet<S>> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn steps(&self) -> &[Step<S, E>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
