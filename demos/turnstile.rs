//! Turnstile Automaton
//!
//! This example demonstrates a deterministic automaton built from enum
//! alphabets and driven by a runner.
//!
//! Key concepts:
//! - `state_enum!` / `event_enum!` alphabets
//! - Deterministic construction through the builder
//! - Conflict reporting for a second end state
//! - Stepping a runner and reading its history
//!
//! Run with: cargo run --example turnstile

use automata_runner::automaton::Automaton;
use automata_runner::builder::{AutomatonBuilder, AutomatonKind, BuildError};
use automata_runner::runner::Runner;
use automata_runner::store::StorageStrategy;
use automata_runner::{event_enum, state_enum};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Jammed,
    }
    terminal: [Jammed]
}

event_enum! {
    enum Input {
        Coin,
        Push,
        Kick,
    }
}

fn main() {
    println!("=== Turnstile Automaton ===\n");

    let turnstile = AutomatonBuilder::new()
        .storage(StorageStrategy::Indexed)
        .kind(AutomatonKind::Deterministic)
        .transition(Turnstile::Locked, Input::Coin, Turnstile::Unlocked)
        .transition(Turnstile::Locked, Input::Push, Turnstile::Locked)
        .transition(Turnstile::Unlocked, Input::Push, Turnstile::Locked)
        .transition(Turnstile::Unlocked, Input::Coin, Turnstile::Unlocked)
        .transition(Turnstile::Locked, Input::Kick, Turnstile::Jammed)
        .build()
        .unwrap();

    println!("Transitions: {}", turnstile.len());
    println!("States: {:?}", turnstile.states());
    println!("Events out of Locked: {:?}\n", turnstile.events_from(&Turnstile::Locked));

    let mut runner = Runner::with_history(&*turnstile, [Turnstile::Locked]);
    for input in [Input::Coin, Input::Push, Input::Push, Input::Coin] {
        runner.apply(&input).unwrap();
        println!("{input:?} -> {:?}", runner.current_states());
    }

    println!("\nKick while unlocked: {:?}", runner.apply(&Input::Kick));
    println!("Still in: {:?}", runner.current_states());

    runner.apply_all(&[Input::Push, Input::Kick]).unwrap();
    println!("After Push, Kick: {:?} (over: {})", runner.current_states(), runner.is_over());
    if let Some(history) = runner.history() {
        println!("Word consumed: {:?}\n", history.events());
    }

    println!("Building with a conflicting pair:");
    let conflicting = AutomatonBuilder::new()
        .kind(AutomatonKind::Deterministic)
        .transition(Turnstile::Locked, Input::Coin, Turnstile::Unlocked)
        .transition(Turnstile::Locked, Input::Coin, Turnstile::Jammed)
        .build();
    match conflicting {
        Err(BuildError::ConflictingTransitions(errors)) => {
            for error in errors {
                println!("  rejected: {error}");
            }
        }
        Err(other) => println!("  unexpected: {other}"),
        Ok(_) => println!("  unexpectedly built"),
    }

    println!("\n=== Example Complete ===");
}
