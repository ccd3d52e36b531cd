//! Non-deterministic Simulation
//!
//! This example demonstrates running a non-deterministic automaton that
//! recognizes words over {a, b} ending in "ab".
//!
//! Key concepts:
//! - Several end states for one (state, event) pair
//! - The runner tracking every active state at once
//! - Checking acceptance without mutating the runner
//! - Wrapping an automaton to make it deterministic
//!
//! Run with: cargo run --example nfa_simulation

use automata_runner::automaton::{Automaton, DfaDecorator, Nfa};
use automata_runner::core::{StandardEvent, StandardState};
use automata_runner::runner::Runner;

fn main() {
    println!("=== Non-deterministic Simulation ===\n");

    let start = StandardState::new("start");
    let seen_a = StandardState::new("seen_a");
    let accept = StandardState::terminal("accept");
    let (a, b) = (StandardEvent::new("a"), StandardEvent::new("b"));

    let mut nfa = Nfa::new();
    nfa.add(start.clone(), a.clone(), start.clone())
        .add(start.clone(), b.clone(), start.clone())
        .add(start.clone(), a.clone(), seen_a.clone())
        .add(seen_a.clone(), b.clone(), accept.clone());

    println!("derivate(start, a) = {:?}", nfa.derivate(&start, &a));
    println!("integrate(b, accept) = {:?}\n", nfa.integrate(&b, &accept));

    let runner = Runner::new(&nfa, [start.clone()]);
    for word in ["ab", "aab", "ba", "abab", "b"] {
        let events: Vec<StandardEvent> = word
            .chars()
            .map(|c| StandardEvent::new(c.to_string()))
            .collect();
        println!("accepts {word:>5}: {}", runner.accepts(&events));
    }

    println!("\nStepping through \"aab\":");
    let mut runner = Runner::new(&nfa, [start.clone()]);
    for event in [&a, &a, &b] {
        runner.apply(event).unwrap();
        println!("  {event} -> {} active states", runner.current_states().len());
    }
    println!("Over: {}\n", runner.is_over());

    println!("Wrapping the NFA in a deterministic decorator:");
    match DfaDecorator::wrap(Box::new(nfa)) {
        Ok(_) => println!("  wrapped"),
        Err(error) => println!("  rejected: {error}"),
    }

    let mut decorated = DfaDecorator::new();
    decorated.add(start.clone(), a.clone(), seen_a.clone()).unwrap();
    if let Err(error) = decorated.add(start, a, accept) {
        println!("  second end state rejected: {error}");
    }

    println!("\n=== Example Complete ===");
}
