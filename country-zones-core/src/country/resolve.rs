//! Compute-once cell with single-flight initialization.
//!
//! `OnceLock::get_or_init` would serialize callers too, but it cannot report a
//! failed initialization without caching it, and it deadlocks when the
//! initializer reads the same cell. `ResolveCell` tracks which thread is
//! resolving so both cases surface as errors instead.

use std::sync::{Condvar, Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread::{self, ThreadId};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Resolving(ThreadId),
}

pub(crate) struct ResolveCell<T> {
    value: OnceLock<T>,
    state: Mutex<State>,
    finished: Condvar,
}

impl<T> ResolveCell<T> {
    pub(crate) fn new() -> Self {
        Self {
            value: OnceLock::new(),
            state: Mutex::new(State::Idle),
            finished: Condvar::new(),
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Return the value, running `init` if no caller has stored one yet.
    ///
    /// Only one thread runs `init` at a time; the others block until it
    /// finishes and then read its value. If `init` fails (or panics) nothing is
    /// stored and the next waiter runs its own `init`. A call made from inside
    /// `init` on the resolving thread returns `ReentrantResolution`.
    pub(crate) fn get_or_try_init<F>(&self, init: F) -> CoreResult<&T>
    where
        F: FnOnce() -> CoreResult<T>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let current = thread::current().id();
        {
            let mut state = self.lock_state();
            loop {
                if let Some(value) = self.value.get() {
                    return Ok(value);
                }
                match *state {
                    State::Idle => {
                        *state = State::Resolving(current);
                        break;
                    }
                    State::Resolving(owner) if owner == current => {
                        return Err(CoreError::ReentrantResolution);
                    }
                    State::Resolving(_) => {
                        state = self
                            .finished
                            .wait(state)
                            .unwrap_or_else(PoisonError::into_inner);
                    }
                }
            }
        }

        // Resets the state on every exit path, including unwinding out of `init`.
        let _in_flight = InFlight {
            state: &self.state,
            finished: &self.finished,
        };

        let value = init()?;
        Ok(self.value.get_or_init(|| value))
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct InFlight<'a> {
    state: &'a Mutex<State>,
    finished: &'a Condvar,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = State::Idle;
        self.finished.notify_all();
    }
}
