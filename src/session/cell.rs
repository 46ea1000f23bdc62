use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Monotonic epoch of a [`StateCell`]; bumped by every replacement.
pub type Generation = u64;

/// A whole-state snapshot together with the generation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub generation: Generation,
    pub state: T,
}

struct Shared<T> {
    tx: watch::Sender<Versioned<T>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

/// Owned state with subscriber notification and stale-result rejection.
///
/// Every replacement starts a new generation. Asynchronous work started for
/// a generation can only resolve the state while that generation is still
/// current; anything older is dropped.
pub struct StateCell<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> StateCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(Versioned {
            generation: 0,
            state: initial,
        });
        Self {
            shared: Arc::new(Shared {
                tx,
                in_flight: Mutex::new(None),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Versioned<T>> {
        self.shared.tx.subscribe()
    }

    pub fn snapshot(&self) -> Versioned<T> {
        self.shared.tx.borrow().clone()
    }

    pub fn current(&self) -> T {
        self.shared.tx.borrow().state.clone()
    }

    pub fn generation(&self) -> Generation {
        self.shared.tx.borrow().generation
    }

    /// Start a new generation with `state`, abandoning any in-flight work.
    pub fn replace(&self, state: T) -> Generation {
        let mut in_flight = self.lock_in_flight();
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
        self.bump(state)
    }

    /// Start a new generation with `state` and resolve it with the output of
    /// `work` once that completes.
    ///
    /// Work belonging to the previous generation is aborted. Must be called
    /// from within a tokio runtime.
    pub fn replace_then<F>(&self, state: T, work: F) -> Generation
    where
        F: Future<Output = T> + Send + 'static,
    {
        let mut in_flight = self.lock_in_flight();
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
        let generation = self.bump(state);

        let cell = self.clone();
        let handle = tokio::spawn(async move {
            let next = work.await;
            cell.resolve(generation, next);
        });
        *in_flight = Some(handle.abort_handle());

        generation
    }

    /// Apply `state` if `generation` is still current.
    ///
    /// Returns false when the result was superseded and discarded.
    pub fn resolve(&self, generation: Generation, state: T) -> bool {
        let applied = self.shared.tx.send_if_modified(|current| {
            if current.generation != generation {
                return false;
            }
            current.state = state;
            true
        });

        if !applied {
            tracing::debug!("Discarded result of superseded generation {}", generation);
        }
        applied
    }

    fn bump(&self, state: T) -> Generation {
        let mut generation = 0;
        self.shared.tx.send_modify(|current| {
            current.generation += 1;
            current.state = state;
            generation = current.generation;
        });
        generation
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        // The guarded value is a plain handle; a poisoned lock still holds a
        // usable one.
        self.shared
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
