//! Automata Runner: finite automata over user-defined states and events
//!
//! Transitions are kept in a pluggable [`store::TransitionStore`] and wrapped
//! by an automaton variant that decides what may be inserted. A
//! [`runner::Runner`] then simulates any automaton over a word of events by
//! tracking the full set of active states.
//!
//! # Core Concepts
//!
//! - **Transition**: immutable `(start, event, end)` triple
//! - **Store**: set of transitions with list, hash set or indexed storage
//! - **Automaton**: [`automaton::Nfa`] accepts anything, while
//!   [`automaton::Dfa`] and [`automaton::DfaDecorator`] reject a second end
//!   state for the same `(start, event)` pair
//! - **Runner**: advances a configuration of states one event at a time
//!
//! # Example
//!
//! ```rust
//! use automata_runner::automaton::{Automaton, Dfa};
//! use automata_runner::core::{StandardEvent, StandardState};
//! use automata_runner::runner::Runner;
//!
//! let (locked, unlocked) = (StandardState::new("Locked"), StandardState::new("Unlocked"));
//! let (coin, push) = (StandardEvent::new("coin"), StandardEvent::new("push"));
//!
//! let mut turnstile = Dfa::new();
//! turnstile
//!     .add(locked.clone(), coin.clone(), unlocked.clone())
//!     .and_then(|t| t.add(unlocked.clone(), push.clone(), locked.clone()))
//!     .unwrap();
//!
//! // A second end state for (Locked, coin) is rejected
//! assert!(turnstile.add(locked.clone(), coin.clone(), locked.clone()).is_err());
//! assert_eq!(turnstile.len(), 2);
//!
//! let mut runner = Runner::new(&turnstile, [locked.clone()]);
//! runner.apply_all(&[coin.clone(), push.clone()]).unwrap();
//! assert!(runner.is_in_state(&locked));
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use crate::automaton::{Automaton, AutomatonError, DeterministicAutomaton, Dfa, DfaDecorator, Nfa};
pub use crate::builder::{AutomatonBuilder, AutomatonKind, BuildError};
pub use crate::core::{Event, StandardEvent, StandardState, State, Transition};
pub use crate::runner::{RunHistory, Runner, RunnerError, Step};
pub use crate::store::{StorageStrategy, TransitionStore};
