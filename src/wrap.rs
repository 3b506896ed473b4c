//! Wrappers that change when and how often a function runs.
//!
//! [`once`] limits a function to a single invocation, [`memoize`] caches
//! its results per argument, and [`delay`] defers a call onto the
//! runtime's timer. The wrappers are safe to share across threads; the
//! wrapped function itself runs outside any internal lock held over user
//! code, except for the once wrapper which must hold its state while the
//! single invocation produces the value to cache.

use std::collections::HashMap;
use std::hash::Hash;
use std::mem;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::collection::ValueHasher;

// ------------- Once -------------
enum OnceState<F, R> {
    Unset(F),
    Computing,
    Cached(R),
}

/// A function restricted to one invocation. The first call runs the
/// wrapped function and keeps its result; every later call returns a
/// copy of that result without running anything, whatever arguments it
/// is given.
pub struct Once<F, R> {
    state: Mutex<OnceState<F, R>>,
}

impl<F, R> Once<F, R> {
    /// Runs the wrapped function on the first call, replays the kept
    /// result on every call after that.
    ///
    /// Calling the wrapper again from inside the wrapped function is
    /// unsupported; the state lock makes such a call deadlock.
    pub fn call<A>(&self, args: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let mut state = self.state.lock().unwrap();
        match mem::replace(&mut *state, OnceState::Computing) {
            OnceState::Unset(func) => {
                debug!("running a once wrapper for the first and only time");
                let produced = func(args);
                *state = OnceState::Cached(produced.clone());
                produced
            }
            OnceState::Cached(produced) => {
                *state = OnceState::Cached(produced.clone());
                produced
            }
            OnceState::Computing => {
                panic!("once wrapper called again while its function is still running")
            }
        }
    }
}

/// Wraps `func` so that it can run at most once.
pub fn once<A, R, F>(func: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: Mutex::new(OnceState::Unset(func)),
    }
}

// ------------- Memoize -------------
/// A function with a cache of results keyed by argument. Each distinct
/// argument is computed once; repeats are answered from the cache.
pub struct Memoized<A, R, F> {
    func: Mutex<F>,
    cache: Mutex<HashMap<A, R, ValueHasher>>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    /// The result for `argument`, computed on first sight and replayed
    /// from the cache afterwards. No lock is held while the wrapped
    /// function runs, so two threads racing on a fresh argument may
    /// both compute it; the cache still ends up with a single entry.
    pub fn call(&self, argument: &A) -> R {
        if let Some(cached) = self.cache.lock().unwrap().get(argument) {
            trace!("memoized call answered from cache");
            return cached.clone();
        }
        let produced = {
            let mut func = self.func.lock().unwrap();
            (*func)(argument)
        };
        let mut cache = self.cache.lock().unwrap();
        cache.insert(argument.clone(), produced.clone());
        trace!(entries = cache.len(), "memoized call computed and cached");
        produced
    }

    /// How many distinct arguments have been computed so far.
    pub fn cached(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

/// Wraps `func` behind a per-argument result cache.
pub fn memoize<A, R, F>(func: F) -> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    Memoized {
        func: Mutex::new(func),
        cache: Mutex::new(HashMap::default()),
    }
}

// ------------- Delay -------------
/// A handle to a deferred call produced by [`delay`]. Dropping the
/// handle does not cancel the call; once scheduled it always fires.
pub struct Delayed {
    handle: JoinHandle<()>,
    scheduled: Instant,
}

impl Delayed {
    /// Waits until the deferred call has run to completion.
    pub async fn join(self) {
        let _ = self.handle.await;
    }

    /// Time since the call was scheduled.
    pub fn elapsed(&self) -> Duration {
        self.scheduled.elapsed()
    }
}

/// Schedules `func` to run with `args` after `wait` has passed, on the
/// ambient runtime's timer. Returns immediately with a handle; the call
/// itself fires from a background task.
///
/// Panics when called outside a runtime, since there is nothing to keep
/// time with.
pub fn delay<A, F>(func: F, wait: Duration, args: A) -> Delayed
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    debug!(wait_ms = wait.as_millis() as u64, "scheduling a deferred call");
    let handle = tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        trace!("deferred call firing");
        func(args);
    });
    Delayed {
        handle,
        scheduled: Instant::now(),
    }
}
