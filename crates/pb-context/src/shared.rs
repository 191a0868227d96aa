//! Thread-safe holder using snapshot-swap.

use std::fmt;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use pb_behavior::{Behavior, BehaviorResult};
use pb_notify::{Observer, Subject, SubscriptionId};

/// Published by [`SharedContext`] after every swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorSwapped {
    /// Name of the behavior that was replaced.
    pub from: String,
    /// Name of the behavior now active.
    pub to:   String,
    /// 1-based swap sequence number.
    pub swap: u64,
}

struct Active<B> {
    behavior: Arc<B>,
    swaps:    u64,
}

/// A [`Context`][crate::Context] that can be shared across threads.
///
/// The active behavior sits behind `RwLock<Arc<B>>`.  `invoke` clones the
/// `Arc` under a read lock and calls the behavior after the lock is
/// released, so calls in flight keep the behavior they started with while
/// `set_behavior` installs a new one.  Swap events are published to
/// subscribers after the write lock is released.
///
/// Swaps are serialized end to end by `publish`, so subscribers see events
/// in `swap` order even when several threads swap at once.  Readers never
/// take that lock.
pub struct SharedContext<B: Behavior> {
    active:  RwLock<Active<B>>,
    events:  Subject<BehaviorSwapped>,
    publish: ReentrantMutex<()>,
}

impl<B: Behavior> SharedContext<B> {
    pub fn new(behavior: B) -> Self {
        Self::from_arc(Arc::new(behavior))
    }

    /// Start from a behavior that may already be shared elsewhere.
    pub fn from_arc(behavior: Arc<B>) -> Self {
        Self {
            active:  RwLock::new(Active { behavior, swaps: 0 }),
            events:  Subject::new(),
            publish: ReentrantMutex::new(()),
        }
    }

    /// Snapshot of the active behavior.
    pub fn current(&self) -> Arc<B> {
        Arc::clone(&self.active.read().behavior)
    }

    pub fn swap_count(&self) -> u64 {
        self.active.read().swaps
    }

    /// Delegate one call to the behavior active at call time.
    pub fn invoke(&self, input: &B::Input) -> BehaviorResult<B::Output> {
        let behavior = self.current();
        tracing::trace!(behavior = behavior.name(), "invoke");
        behavior.apply(input)
    }

    /// Install `behavior`; returns the snapshot it replaced.
    pub fn set_behavior(&self, behavior: B) -> Arc<B> {
        self.set_arc(Arc::new(behavior))
    }

    /// Like [`set_behavior`][Self::set_behavior] for an already shared value.
    pub fn set_arc(&self, behavior: Arc<B>) -> Arc<B> {
        let to = behavior.name().to_owned();
        // Reentrant: an observer may itself swap from inside `on_event`.
        let _publish = self.publish.lock();
        let (previous, swap) = {
            let mut active = self.active.write();
            active.swaps += 1;
            let previous = std::mem::replace(&mut active.behavior, behavior);
            (previous, active.swaps)
        };
        let event = BehaviorSwapped { from: previous.name().to_owned(), to, swap };
        tracing::debug!(from = %event.from, to = %event.to, swap, "swapped shared behavior");
        self.events.notify(&event);
        previous
    }

    /// Receive a [`BehaviorSwapped`] event after every swap, in `swap` order.
    pub fn subscribe<O>(&self, observer: &Arc<O>) -> SubscriptionId
    where
        O: Observer<BehaviorSwapped> + 'static,
    {
        self.events.attach(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.detach(id)
    }
}

impl<B: Behavior> fmt::Debug for SharedContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active.read();
        f.debug_struct("SharedContext")
            .field("behavior", &active.behavior.describe())
            .field("swaps", &active.swaps)
            .field("subscribers", &self.events.len())
            .finish()
    }
}
