//! Observer trait and ready-made observers.

use std::marker::PhantomData;

use parking_lot::Mutex;

/// Receives events published by a [`Subject`][crate::Subject].
///
/// Observers are shared through `Arc`, so `on_event` takes `&self`; keep any
/// mutable state behind a lock.  `on_event` must not block for long: it runs
/// on the publishing thread.
pub trait Observer<E>: Send + Sync {
    fn on_event(&self, event: &E);
}

// ── FnObserver ────────────────────────────────────────────────────────────────

/// Wraps a closure as an [`Observer`].
pub struct FnObserver<F, E> {
    f:       F,
    _marker: PhantomData<fn(&E)>,
}

impl<F, E> FnObserver<F, E>
where
    F: Fn(&E) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f, _marker: PhantomData }
    }
}

impl<F, E> Observer<E> for FnObserver<F, E>
where
    F: Fn(&E) + Send + Sync,
{
    #[inline]
    fn on_event(&self, event: &E) {
        (self.f)(event)
    }
}

// ── Recorder ──────────────────────────────────────────────────────────────────

/// Collects every event it receives, in delivery order.
#[derive(Debug)]
pub struct Recorder<E> {
    events: Mutex<Vec<E>>,
}

impl<E: Clone> Recorder<E> {
    pub fn new() -> Self {
        Self { events: Mutex::new(Vec::new()) }
    }

    /// Copy of everything received so far.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Take everything received so far, leaving the recorder empty.
    pub fn drain(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl<E: Clone> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send> Observer<E> for Recorder<E> {
    fn on_event(&self, event: &E) {
        self.events.lock().push(event.clone());
    }
}
