//! Automaton construction and insertion errors.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors raised by deterministic automata.
///
/// The non-deterministic automaton never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// The (start, event) pair already has an end state
    #[error("({start}, {event}) is already defined")]
    DuplicateTransition { start: String, event: String },

    /// A deterministic wrapper was asked to wrap an automaton that is
    /// already deterministic
    #[error("The wrapped automaton is already deterministic")]
    RedundantEncapsulation,
}

impl AutomatonError {
    pub(crate) fn duplicate<S: State, E: Event>(start: &S, event: &E) -> Self {
        Self::DuplicateTransition {
            start: start.name().to_string(),
            event: event.name().to_string(),
        }
    }
}
