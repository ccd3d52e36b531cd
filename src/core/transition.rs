//! The (start, event, end) triple stored by every transition store.

use super::event::Event;
use super::state::State;
use serde::{Deserialize, Serialize};

/// A single labeled edge of the transition relation.
///
/// Transitions are plain values: two transitions are equal when all three
/// components are equal, which is what stores use to drop duplicates.
///
/// # Example
///
/// ```rust
/// use automata_runner::core::{StandardEvent, StandardState, Transition};
///
/// let a = StandardState::new("A");
/// let b = StandardState::new("B");
/// let t = Transition::new(a.clone(), StandardEvent::new("x"), b.clone());
///
/// assert_eq!(t, Transition::new(a, StandardEvent::new("x"), b));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The state the transition leaves
    pub start: S,
    /// The event labeling the transition
    pub event: E,
    /// The state the transition enters
    pub end: S,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(start: S, event: E, end: S) -> Self {
        Self { start, event, end }
    }

    /// Check whether this transition leaves `start` on `event`.
    pub fn fires_from(&self, start: &S, event: &E) -> bool {
        self.start == *start && self.event == *event
    }

    /// Check whether this transition enters `end` on `event`.
    pub fn fires_into(&self, event: &E, end: &S) -> bool {
        self.event == *event && self.end == *end
    }
}
