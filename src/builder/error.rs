//! Build errors for the automaton builder.

use crate::automaton::AutomatonError;
use crate::store::UnknownStorageStrategy;
use thiserror::Error;

/// Errors that can occur when building automata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Every (start, event) pair that was defined more than once for a
    /// deterministic automaton
    #[error("{} conflicting transitions for a deterministic automaton", .0.len())]
    ConflictingTransitions(Vec<AutomatonError>),

    #[error(transparent)]
    UnknownStorageStrategy(#[from] UnknownStorageStrategy),

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
