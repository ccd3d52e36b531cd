//! Event identity trait and a basic named event.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for the symbols that label transitions.
///
/// Events carry nothing beyond their identity and a display label.
pub trait Event: Clone + Eq + Hash + Debug {
    /// Get the event's display label.
    fn name(&self) -> &str;
}

/// Basic named event.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StandardEvent {
    name: String,
}

impl StandardEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Event for StandardEvent {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Display for StandardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({})", self.name)
    }
}
