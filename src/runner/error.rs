//! Runner errors.

use thiserror::Error;

/// Errors that can occur while driving a runner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunnerError {
    /// No current state has a transition on the event; the configuration
    /// was left unchanged
    #[error("No state reachable from the current configuration on event '{event}'")]
    NoState { event: String },
}
