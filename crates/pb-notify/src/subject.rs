//! The publishing side.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::Observer;

/// Handle returned by [`Subject::attach`], used to detach explicitly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

struct Slot<E> {
    id:       SubscriptionId,
    observer: Weak<dyn Observer<E>>,
}

struct Inner<E> {
    next_id: u64,
    slots:   Vec<Slot<E>>,
}

/// An ordered set of weakly held observers.
///
/// The subject never keeps an observer alive: dropping the last `Arc` to it
/// is as good as detaching, and the stale handle is pruned on the next
/// `notify`.
pub struct Subject<E> {
    inner: Mutex<Inner<E>>,
}

impl<E> Subject<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner { next_id: 0, slots: Vec::new() }),
        }
    }

    /// Subscribe `observer`.  Delivery order follows attachment order.
    ///
    /// Attaching the same observer twice delivers each event to it twice.
    pub fn attach<O>(&self, observer: &Arc<O>) -> SubscriptionId
    where
        O: Observer<E> + 'static,
    {
        let weak: Weak<dyn Observer<E>> = Arc::downgrade(observer) as Weak<dyn Observer<E>>;
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.slots.push(Slot { id, observer: weak });
        id
    }

    /// Unsubscribe.  Returns `false` if `id` was unknown or already pruned.
    pub fn detach(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.slots.len();
        inner.slots.retain(|slot| slot.id != id);
        inner.slots.len() != before
    }

    /// Deliver `event` to every live observer; returns how many received it.
    ///
    /// Delivery iterates a snapshot taken at call time, outside the lock.
    pub fn notify(&self, event: &E) -> usize {
        let snapshot = self.snapshot();
        for observer in &snapshot {
            observer.on_event(event);
        }
        snapshot.len()
    }

    /// Number of attached observers that are still alive.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .slots
            .iter()
            .filter(|slot| slot.observer.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Vec<Arc<dyn Observer<E>>> {
        let mut inner = self.inner.lock();
        let before = inner.slots.len();
        let mut live = Vec::with_capacity(before);
        inner.slots.retain(|slot| match slot.observer.upgrade() {
            Some(observer) => {
                live.push(observer);
                true
            }
            None => false,
        });
        let pruned = before - inner.slots.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = inner.slots.len(), "pruned dropped observers");
        }
        live
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Subject")
            .field("slots", &inner.slots.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}
