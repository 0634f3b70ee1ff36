//! State container binding a reducer to its observers.

use super::reducer::Reducer;

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Holds the current state of one reducer and fans changes out to
/// subscribers.
///
/// Subscribers run synchronously inside [`Store::dispatch`], on the thread
/// that owns the store, and only when the reducer produced a different state.
pub struct Store<R: Reducer> {
    state: R::State,
    subscribers: Vec<Subscriber<R::State>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Register an observer. It is not called for the current state.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&R::State) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Run the reducer. Returns `true` when the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
