//! Identity types shared by every automaton.
//!
//! This module contains the values an automaton relates:
//! - States via the `State` trait, with an optional terminal marker
//! - Events via the `Event` trait
//! - The `Transition` triple
//!
//! Nothing here knows about storage or execution.

mod event;
mod state;
mod transition;

pub use event::{Event, StandardEvent};
pub use state::{StandardState, State};
pub use transition::Transition;
