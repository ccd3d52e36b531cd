//! Storage strategies for the transition relation.
//!
//! A transition store holds a set of (start, event, end) triples and answers
//! relational queries over them in both directions. Every strategy must give
//! the same answers for the same insertions; they differ only in cost:
//!
//! - [`ListStore`]: a vector with a linear duplicate check on insert
//! - [`SetStore`]: a hash set, duplicates are dropped structurally
//! - [`IndexedStore`]: a hash set plus forward and backward indexes
//!
//! Query results are sets: unique entries, no meaningful order, and empty
//! when nothing matches.

mod indexed;
mod list;
mod set;

pub use indexed::IndexedStore;
pub use list::ListStore;
pub use set::SetStore;

use crate::core::{Event, State, Transition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A relation of (start, event, end) triples.
///
/// Only `insert`, `len` and `iter` are required. Every query has a default
/// implementation that filters a full scan of `iter`; implementations that
/// keep indexes override the queries they can answer directly.
pub trait TransitionStore<S: State, E: Event> {
    /// Insert a triple, returning `false` if it was already present.
    fn insert(&mut self, transition: Transition<S, E>) -> bool;

    /// Number of distinct triples stored.
    fn len(&self) -> usize;

    /// Iterate over every stored triple.
    fn iter(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, transition: &Transition<S, E>) -> bool {
        self.iter().any(|t| t == transition)
    }

    /// End states reachable from `start` on `event`.
    fn derivate(&self, start: &S, event: &E) -> HashSet<S> {
        self.iter()
            .filter(|t| t.fires_from(start, event))
            .map(|t| t.end.clone())
            .collect()
    }

    /// Start states that reach `end` on `event`.
    fn integrate(&self, event: &E, end: &S) -> HashSet<S> {
        self.iter()
            .filter(|t| t.fires_into(event, end))
            .map(|t| t.start.clone())
            .collect()
    }

    fn events_from(&self, start: &S) -> HashSet<E> {
        self.iter()
            .filter(|t| t.start == *start)
            .map(|t| t.event.clone())
            .collect()
    }

    fn events_to(&self, end: &S) -> HashSet<E> {
        self.iter()
            .filter(|t| t.end == *end)
            .map(|t| t.event.clone())
            .collect()
    }

    fn events_between(&self, start: &S, end: &S) -> HashSet<E> {
        self.iter()
            .filter(|t| t.start == *start && t.end == *end)
            .map(|t| t.event.clone())
            .collect()
    }

    fn end_states_from(&self, start: &S) -> HashSet<S> {
        self.iter()
            .filter(|t| t.start == *start)
            .map(|t| t.end.clone())
            .collect()
    }

    fn start_states_from(&self, end: &S) -> HashSet<S> {
        self.iter()
            .filter(|t| t.end == *end)
            .map(|t| t.start.clone())
            .collect()
    }

    fn event_destinations(&self, event: &E) -> HashSet<S> {
        self.iter()
            .filter(|t| t.event == *event)
            .map(|t| t.end.clone())
            .collect()
    }

    fn event_origins(&self, event: &E) -> HashSet<S> {
        self.iter()
            .filter(|t| t.event == *event)
            .map(|t| t.start.clone())
            .collect()
    }

    /// Every state appearing as a start or an end of some triple.
    fn states(&self) -> HashSet<S> {
        self.iter()
            .flat_map(|t| [t.start.clone(), t.end.clone()])
            .collect()
    }

    /// Every event labeling some triple.
    fn events(&self) -> HashSet<E> {
        self.iter().map(|t| t.event.clone()).collect()
    }
}

/// Which [`TransitionStore`] an automaton is built on.
///
/// Parses from `"list"`, `"set"` or `"indexed"` (case-insensitive) and
/// deserializes from the same lowercase names, so it can be read from a
/// caller's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStrategy {
    /// Vector-backed, linear insert and scan
    List,
    /// Hash-set-backed, constant insert and linear scan
    #[default]
    Set,
    /// Hash-set-backed with forward and backward indexes
    Indexed,
}

impl StorageStrategy {
    /// Create an empty store of this kind.
    pub fn create<S, E>(self) -> Box<dyn TransitionStore<S, E>>
    where
        S: State + 'static,
        E: Event + 'static,
    {
        match self {
            Self::List => Box::new(ListStore::new()),
            Self::Set => Box::new(SetStore::new()),
            Self::Indexed => Box::new(IndexedStore::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Set => "set",
            Self::Indexed => "indexed",
        }
    }
}

impl fmt::Display for StorageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a storage strategy name is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown storage strategy '{0}', expected one of: list, set, indexed")]
pub struct UnknownStorageStrategy(pub String);

impl FromStr for StorageStrategy {
    type Err = UnknownStorageStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "set" => Ok(Self::Set),
            "indexed" => Ok(Self::Indexed),
            _ => Err(UnknownStorageStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StandardEvent, StandardState};

    fn st(name: &str) -> StandardState {
        StandardState::new(name)
    }

    fn ev(name: &str) -> StandardEvent {
        StandardEvent::new(name)
    }

    fn populated(strategy: StorageStrategy) -> Box<dyn TransitionStore<StandardState, StandardEvent>> {
        let mut store = strategy.create();
        store.insert(Transition::new(st("1"), ev("a"), st("1")));
        store.insert(Transition::new(st("1"), ev("a"), st("2")));
        store.insert(Transition::new(st("1"), ev("b"), st("3")));
        store.insert(Transition::new(st("2"), ev("a"), st("4")));
        store.insert(Transition::new(st("3"), ev("c"), st("2")));
        store
    }

    const ALL: [StorageStrategy; 3] = [
        StorageStrategy::List,
        StorageStrategy::Set,
        StorageStrategy::Indexed,
    ];

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("list".parse::<StorageStrategy>(), Ok(StorageStrategy::List));
        assert_eq!(" Set ".parse::<StorageStrategy>(), Ok(StorageStrategy::Set));
        assert_eq!("INDEXED".parse::<StorageStrategy>(), Ok(StorageStrategy::Indexed));
        assert_eq!(
            "tree".parse::<StorageStrategy>(),
            Err(UnknownStorageStrategy("tree".to_string()))
        );
    }

    #[test]
    fn strategy_default_is_set() {
        assert_eq!(StorageStrategy::default(), StorageStrategy::Set);
    }

    #[test]
    fn strategy_deserializes_from_lowercase_name() {
        let strategy: StorageStrategy = serde_json::from_str("\"indexed\"").unwrap();
        assert_eq!(strategy, StorageStrategy::Indexed);
        assert_eq!(serde_json::to_string(&StorageStrategy::List).unwrap(), "\"list\"");
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        for strategy in ALL {
            let mut store = populated(strategy);
            assert_eq!(store.len(), 5);
            assert!(!store.insert(Transition::new(st("1"), ev("a"), st("2"))));
            assert_eq!(store.len(), 5, "{strategy}");
        }
    }

    #[test]
    fn forward_and_backward_queries() {
        for strategy in ALL {
            let store = populated(strategy);

            assert_eq!(
                store.derivate(&st("1"), &ev("a")),
                HashSet::from([st("1"), st("2")]),
                "{strategy}"
            );
            assert_eq!(store.integrate(&ev("a"), &st("4")), HashSet::from([st("2")]));
            assert_eq!(
                store.events_from(&st("1")),
                HashSet::from([ev("a"), ev("b")])
            );
            assert_eq!(
                store.events_to(&st("2")),
                HashSet::from([ev("a"), ev("c")])
            );
            assert_eq!(store.events_between(&st("1"), &st("3")), HashSet::from([ev("b")]));
            assert_eq!(
                store.end_states_from(&st("1")),
                HashSet::from([st("1"), st("2"), st("3")])
            );
            assert_eq!(
                store.start_states_from(&st("2")),
                HashSet::from([st("1"), st("3")])
            );
            assert_eq!(
                store.event_destinations(&ev("a")),
                HashSet::from([st("1"), st("2"), st("4")])
            );
            assert_eq!(
                store.event_origins(&ev("a")),
                HashSet::from([st("1"), st("2")])
            );
            assert_eq!(store.states().len(), 4);
            assert_eq!(store.events(), HashSet::from([ev("a"), ev("b"), ev("c")]));
        }
    }

    #[test]
    fn unmatched_queries_are_empty() {
        for strategy in ALL {
            let store = populated(strategy);
            assert!(store.derivate(&st("4"), &ev("a")).is_empty());
            assert!(store.integrate(&ev("z"), &st("1")).is_empty());
            assert!(store.events_from(&st("9")).is_empty());
            assert!(store.events_between(&st("4"), &st("1")).is_empty());
        }
    }
}
