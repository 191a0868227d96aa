//! The single-owner behavior holder.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use pb_behavior::{Behavior, BehaviorResult};
use pb_core::RegistryKey;
use pb_registry::{Registry, RegistryResult};

use crate::ContextObserver;

/// Holds exactly one behavior and delegates to it.
///
/// A `Context` cannot exist without a behavior: the only constructors take
/// one by value or build one from a registry.
pub struct Context<B: Behavior> {
    behavior: B,
    swaps:    u64,
}

impl<B: Behavior> Context<B> {
    pub fn new(behavior: B) -> Self {
        Self { behavior, swaps: 0 }
    }

    /// Build the initial behavior from `registry`.
    ///
    /// Fails with `RegistryError::UnknownKey` if `key` is not registered.
    pub fn from_registry<K, Q>(registry: &Registry<K, B>, key: &Q) -> RegistryResult<Self>
    where
        K: RegistryKey + Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        registry.create(key).map(Self::new)
    }

    /// The active behavior.
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Number of `set_behavior` calls since construction.
    pub fn swap_count(&self) -> u64 {
        self.swaps
    }

    /// Replace the active behavior and return the previous one.
    ///
    /// The very next `invoke` uses `behavior`.  Dropping the returned value
    /// releases the old behavior.
    pub fn set_behavior(&mut self, behavior: B) -> B {
        tracing::debug!(from = self.behavior.name(), to = behavior.name(), "swapping behavior");
        self.swaps += 1;
        std::mem::replace(&mut self.behavior, behavior)
    }

    /// Delegate one call.  The behavior's result or error is returned
    /// unchanged.
    #[inline]
    pub fn invoke(&self, input: &B::Input) -> BehaviorResult<B::Output> {
        tracing::trace!(behavior = self.behavior.name(), "invoke");
        self.behavior.apply(input)
    }

    /// Delegate every input in `inputs`, returning results in input order.
    ///
    /// With the `parallel` feature the calls run on Rayon's pool; the
    /// observer is then fed sequentially in input order.  A failing input
    /// does not stop the batch.
    pub fn invoke_all<O>(&self, inputs: &[B::Input], observer: &mut O) -> Vec<BehaviorResult<B::Output>>
    where
        O: ContextObserver,
        B::Input:  Sync,
        B::Output: Send,
    {
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = inputs.iter().map(|input| self.behavior.apply(input)).collect();

        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            inputs.par_iter().map(|input| self.behavior.apply(input)).collect()
        };

        let name = self.behavior.name();
        let mut failed = 0;
        for (index, result) in results.iter().enumerate() {
            let ok = result.is_ok();
            if !ok {
                failed += 1;
            }
            observer.on_invoke(index, name, ok);
        }
        observer.on_batch_end(results.len(), failed);
        tracing::debug!(behavior = name, total = results.len(), failed, "batch complete");
        results
    }

    /// Consume the context, keeping its behavior.
    pub fn into_behavior(self) -> B {
        self.behavior
    }
}

impl<B: Behavior> fmt::Debug for Context<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("behavior", &self.behavior.describe())
            .field("swaps", &self.swaps)
            .finish()
    }
}
