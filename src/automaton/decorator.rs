//! Deterministic decorator over any non-deterministic automaton.

use super::{Automaton, AutomatonError, DeterministicAutomaton, Nfa};
use crate::core::{Event, State, Transition};
use crate::store::{StorageStrategy, TransitionStore};
use std::collections::HashSet;
use tracing::debug;

/// Adds the single-end-state guarantee to a wrapped automaton.
///
/// Insertions are checked against the wrapped automaton before being
/// forwarded; every query is passed through unchanged.
pub struct DfaDecorator<S, E> {
    inner: Box<dyn Automaton<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> DfaDecorator<S, E> {
    /// Wrap a fresh list-backed [`Nfa`].
    pub fn new() -> Self {
        Self {
            inner: Box::new(Nfa::with_strategy(StorageStrategy::List)),
        }
    }

    /// Wrap an existing automaton.
    ///
    /// Fails with [`AutomatonError::RedundantEncapsulation`] if `inner` is
    /// already deterministic, and with
    /// [`AutomatonError::DuplicateTransition`] naming the first offending
    /// pair if its current contents already define some (start, event)
    /// more than once.
    pub fn wrap(inner: Box<dyn Automaton<S, E>>) -> Result<Self, AutomatonError> {
        if inner.is_deterministic() {
            debug!("refusing to wrap an automaton that is already deterministic");
            return Err(AutomatonError::RedundantEncapsulation);
        }

        if let Some(conflict) = first_conflict(inner.as_ref()) {
            return Err(conflict);
        }

        Ok(Self { inner })
    }

    /// Unwrap, returning the decorated automaton.
    pub fn into_inner(self) -> Box<dyn Automaton<S, E>> {
        self.inner
    }

    /// Add a transition, returning the automaton for chained calls.
    pub fn add(&mut self, start: S, event: E, end: S) -> Result<&mut Self, AutomatonError> {
        self.insert(Transition::new(start, event, end))?;
        Ok(self)
    }
}

fn first_conflict<S: State, E: Event>(
    automaton: &dyn Automaton<S, E>,
) -> Option<AutomatonError> {
    let mut defined: HashSet<(&S, &E)> = HashSet::new();
    automaton
        .transitions()
        .find(|t| !defined.insert((&t.start, &t.event)))
        .map(|t| {
            debug!(
                start = t.start.name(),
                event = t.event.name(),
                "refusing to wrap an automaton with a non-deterministic pair"
            );
            AutomatonError::duplicate(&t.start, &t.event)
        })
}

impl<S: State + 'static, E: Event + 'static> Default for DfaDecorator<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State + 'static, E: Event + 'static> Automaton<S, E> for DfaDecorator<S, E> {
    fn insert(&mut self, transition: Transition<S, E>) -> Result<bool, AutomatonError> {
        if !self
            .inner
            .derivate(&transition.start, &transition.event)
            .is_empty()
        {
            debug!(
                start = transition.start.name(),
                event = transition.event.name(),
                "rejected transition for an already defined pair"
            );
            return Err(AutomatonError::duplicate(
                &transition.start,
                &transition.event,
            ));
        }

        self.inner.insert(transition)
    }

    fn store(&self) -> &dyn TransitionStore<S, E> {
        self.inner.store()
    }

    fn is_deterministic(&self) -> bool {
        true
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn transitions(&self) -> Box<dyn Iterator<Item = &Transition<S, E>> + '_> {
        self.inner.transitions()
    }

    fn derivate(&self, start: &S, event: &E) -> HashSet<S> {
        self.inner.derivate(start, event)
    }

    fn integrate(&self, event: &E, end: &S) -> HashSet<S> {
        self.inner.integrate(event, end)
    }

    fn events_from(&self, start: &S) -> HashSet<E> {
        self.inner.events_from(start)
    }

    fn events_to(&self, end: &S) -> HashSet<E> {
        self.inner.events_to(end)
    }

    fn events_between(&self, start: &S, end: &S) -> HashSet<E> {
        self.inner.events_between(start, end)
    }

    fn end_states_from(&self, start: &S) -> HashSet<S> {
        self.inner.end_states_from(start)
    }

    fn start_states_from(&self, end: &S) -> HashSet<S> {
        self.inner.start_states_from(end)
    }

    fn event_destinations(&self, event: &E) -> HashSet<S> {
        self.inner.event_destinations(event)
    }

    fn event_origins(&self, event: &E) -> HashSet<S> {
        self.inner.event_origins(event)
    }

    fn states(&self) -> HashSet<S> {
        self.inner.states()
    }

    fn events(&self) -> HashSet<E> {
        self.inner.events()
    }
}

impl<S: State + 'static, E: Event + 'static> DeterministicAutomaton<S, E> for DfaDecorator<S, E> {}
