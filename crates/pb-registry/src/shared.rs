//! Thread-safe registry handle.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use pb_behavior::Behavior;
use pb_core::RegistryKey;

use crate::{Registry, RegistryResult};

/// A cloneable, lock-protected [`Registry`].
///
/// Lookups take a read lock, so many threads can `create` concurrently;
/// `register`/`unregister` take the write lock and wait for readers to
/// finish.  Factories run while the read lock is held and must not call
/// back into a mutating method of the same handle.
pub struct SharedRegistry<K: RegistryKey, B: Behavior> {
    inner: Arc<RwLock<Registry<K, B>>>,
}

impl<K: RegistryKey, B: Behavior> SharedRegistry<K, B> {
    pub fn new(registry: Registry<K, B>) -> Self {
        Self { inner: Arc::new(RwLock::new(registry)) }
    }

    pub fn register<F>(&self, key: K, factory: F) -> RegistryResult<()>
    where
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.inner.write().register(key, factory)
    }

    pub fn unregister<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.inner.write().unregister(key)
    }

    pub fn create<Q>(&self, key: &Q) -> RegistryResult<B>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.inner.read().create(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(key)
    }

    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` against the registry under a single read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&Registry<K, B>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<K: RegistryKey, B: Behavior> Clone for SharedRegistry<K, B> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K: RegistryKey, B: Behavior> From<Registry<K, B>> for SharedRegistry<K, B> {
    fn from(registry: Registry<K, B>) -> Self {
        Self::new(registry)
    }
}

impl<K: RegistryKey, B: Behavior> fmt::Debug for SharedRegistry<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry").field(&*self.inner.read()).finish()
    }
}
