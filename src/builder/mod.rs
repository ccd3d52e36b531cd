//! Builder API for ergonomic automaton construction.
//!
//! [`AutomatonBuilder`] collects transitions and picks the storage strategy
//! and variant before anything is inserted, so deterministic automata can be
//! validated as a whole and every conflict reported at once. The
//! [`state_enum!`](crate::state_enum) and [`event_enum!`](crate::event_enum)
//! macros declare enum alphabets without boilerplate.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::{AutomatonBuilder, AutomatonKind};
pub use error::BuildError;
