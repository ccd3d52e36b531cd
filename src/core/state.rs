//! State identity trait and a basic named state.
//!
//! States are opaque handles: an automaton only ever compares and hashes
//! them. The one property a state carries on its own is whether it is
//! terminal.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure. Terminal-ness belongs to the state value itself,
/// not to the automaton the state appears in.
///
/// # Required Traits
///
/// - `Clone`: states are copied into query results and runner configurations
/// - `Eq` + `Hash`: states are stored in sets and used as index keys
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use automata_runner::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert!(Door::Locked.is_terminal());
/// assert!(!Door::Open.is_terminal());
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Get the state's display label.
    fn name(&self) -> &str;

    /// Check if this is a terminal (accepting) state.
    ///
    /// A runner whose configuration contains at least one terminal state
    /// reports that it is over.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Basic named state, optionally terminal.
///
/// Two standard states are equal when both their names and their terminal
/// flags are equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StandardState {
    name: String,
    terminal: bool,
}

impl StandardState {
    /// Create a non-terminal state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terminal: false,
        }
    }

    /// Create a terminal state.
    pub fn terminal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terminal: true,
        }
    }
}

impl State for StandardState {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl Display for StandardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terminal {
            write!(f, "TerminalState({})", self.name)
        } else {
            write!(f, "State({})", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn is_terminal_defaults_to_false() {
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        struct Plain;

        impl State for Plain {
            fn name(&self) -> &str {
                "Plain"
            }
        }

        assert!(!Plain.is_terminal());
    }

    #[test]
    fn is_terminal_identifies_terminal_states() {
        assert!(!TestState::Initial.is_terminal());
        assert!(!TestState::Processing.is_terminal());
        assert!(TestState::Complete.is_terminal());
    }

    #[test]
    fn standard_state_equality_uses_name_and_flag() {
        assert_eq!(StandardState::new("1"), StandardState::new("1"));
        assert_ne!(StandardState::new("1"), StandardState::new("2"));
        assert_ne!(StandardState::new("1"), StandardState::terminal("1"));
    }

    #[test]
    fn standard_state_display() {
        assert_eq!(StandardState::new("idle").to_string(), "State(idle)");
        assert_eq!(
            StandardState::terminal("done").to_string(),
            "TerminalState(done)"
        );
    }

    #[test]
    fn standard_state_serializes_correctly() {
        let state = StandardState::terminal("done");
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: StandardState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
        assert!(deserialized.is_terminal());
    }
}
