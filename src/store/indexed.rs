//! Hash-set-backed transition store with forward and backward indexes.

use super::TransitionStore;
use crate::core::{Event, State, Transition};
use std::collections::{HashMap, HashSet};

type Index<S, E> = HashMap<S, HashMap<E, HashSet<S>>>;

/// Transition store that answers per-state queries without a full scan.
///
/// `forward` maps start -> event -> ends and `backward` maps
/// end -> event -> starts. Both are kept in step with `transitions` on every
/// insert. Queries keyed only by event fall back to the scan defaults.
#[derive(Clone, Debug)]
pub struct IndexedStore<S, E> {
    transitions: HashSet<Transition<S, E>>,
    forward: Index<S, E>,
    backward: Index<S, E>,
}

impl<S, E> Default for IndexedStore<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> IndexedStore<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: HashSet::new(),
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

fn lookup<S: State, E: Event>(index: &Index<S, E>, state: &S, event: &E) -> HashSet<S> {
    index
        .get(state)
        .and_then(|by_event| by_event.get(event))
        .cloned()
        .unwrap_or_default()
}

fn labels<S: State, E: Event>(index: &Index<S, E>, state: &S) -> HashSet<E> {
    index
        .get(state)
        .map(|by_event| by_event.keys().cloned().collect())
        .unwrap_or_default()
}

fn neighbours<S: State, E: Event>(index: &Index<S, E>, state: &S) -> HashSet<S> {
    index
        .get(state)
        .map(|by_event| by_event.values().flatten().cloned().collect())
        .unwrap_or_default()
}

impl<S: State, E: Event> TransitionStore<S, E> for IndexedStore<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> bool {
        if self.transitions.contains(&transition) {
            return false;
        }

        self.forward
            .entry(transition.start.clone())
            .or_default()
            .entry(transition.event.clone())
            .or_default()
            .insert(transition.end.clone());
        self.backward
            .entry(transition.end.clone())
            .or_default()
            .entry(transition.event.clone())
            .or_default()
            .insert(transition.start.clone());

        self.transitions.insert(transition)
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_> {
        Box::new(self.transitions.iter())
    }

    fn contains(&self, transition: &Transition<S, E>) -> bool {
        self.transitions.contains(transition)
    }

    fn derivate(&self, start: &S, event: &E) -> HashSet<S> {
        lookup(&self.forward, start, event)
    }

    fn integrate(&self, event: &E, end: &S) -> HashSet<S> {
        lookup(&self.backward, end, event)
    }

    fn events_from(&self, start: &S) -> HashSet<E> {
        labels(&self.forward, start)
    }

    fn events_to(&self, end: &S) -> HashSet<E> {
        labels(&self.backward, end)
    }

    fn events_between(&self, start: &S, end: &S) -> HashSet<E> {
        self.forward
            .get(start)
            .map(|by_event| {
                by_event
                    .iter()
                    .filter(|(_, ends)| ends.contains(end))
                    .map(|(event, _)| event.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn end_states_from(&self, start: &S) -> HashSet<S> {
        neighbours(&self.forward, start)
    }

    fn start_states_from(&self, end: &S) -> HashSet<S> {
        neighbours(&self.backward, end)
    }

    fn states(&self) -> HashSet<S> {
        self.forward
            .keys()
            .chain(self.backward.keys())
            .cloned()
            .collect()
    }
}
