//! Ordered key → factory map.
//!
//! # Design
//!
//! Entries live in a `Vec` in registration order; an `FxHashMap<K, usize>`
//! indexes into it.  This gives O(1) lookup while keeping `keys()` stable and
//! ordered without sorting.  Overwriting an existing key replaces the factory
//! in place, so the key keeps the position of its first registration.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use pb_behavior::Behavior;
use pb_core::{DuplicatePolicy, RegistryConfig, RegistryKey};
use rustc_hash::FxHashMap;

use crate::{RegistryError, RegistryResult};

/// Zero-argument constructor for a behavior.
///
/// Configuration a behavior needs (a server address, a rate card) is captured
/// by the closure when it is registered; the registry never supplies any.
pub type Factory<B> = Box<dyn Fn() -> B + Send + Sync>;

struct Entry<K, B> {
    key:     K,
    factory: Factory<B>,
}

/// Maps keys to behavior factories.
///
/// See the [crate docs](crate) for an example.
pub struct Registry<K: RegistryKey, B: Behavior> {
    config:  RegistryConfig,
    entries: Vec<Entry<K, B>>,
    index:   FxHashMap<K, usize>,
}

impl<K: RegistryKey, B: Behavior> Registry<K, B> {
    /// Empty registry with the default config (overwrite on duplicate).
    pub fn new() -> Self {
        Self::from_valid_config(RegistryConfig::default())
    }

    /// Empty registry with explicit settings.
    ///
    /// Fails with [`RegistryError::Config`] if `config` does not validate.
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            index:   FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Label used in log events and error messages.
    pub fn label(&self) -> &str {
        &self.config.label
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Store `factory` under `key`.
    ///
    /// If `key` already exists the outcome depends on
    /// [`RegistryConfig::on_duplicate`]: `Overwrite` replaces the factory,
    /// `Reject` returns [`RegistryError::DuplicateKey`] and leaves the
    /// existing entry untouched.
    pub fn register<F>(&mut self, key: K, factory: F) -> RegistryResult<()>
    where
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.register_boxed(key, Box::new(factory))
    }

    /// Like [`register`][Self::register] for an already boxed factory.
    pub fn register_boxed(&mut self, key: K, factory: Factory<B>) -> RegistryResult<()> {
        match self.index.get(&key) {
            Some(&slot) => match self.config.on_duplicate {
                DuplicatePolicy::Overwrite => {
                    tracing::debug!(registry = %self.config.label, %key, replaced = true, "registered behavior factory");
                    self.entries[slot].factory = factory;
                    Ok(())
                }
                DuplicatePolicy::Reject => Err(RegistryError::DuplicateKey {
                    registry: self.config.label.clone(),
                    key:      key.to_string(),
                }),
            },
            None => {
                tracing::debug!(registry = %self.config.label, %key, replaced = false, "registered behavior factory");
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, factory });
                Ok(())
            }
        }
    }

    /// Remove `key`.  Returns `true` if it was present.
    ///
    /// Later entries shift down one position; relative order is preserved.
    pub fn unregister<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let Some(slot) = self.index.remove(key) else {
            return false;
        };
        self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut::<K>(&entry.key) {
                *i -= 1;
            }
        }
        tracing::debug!(registry = %self.config.label, %key, "unregistered behavior factory");
        true
    }

    // ── Lookup ───────────────────────────────────────────────────────────

    /// Build a fresh behavior from the factory registered under `key`.
    ///
    /// An unknown key is an error, never a default behavior.  A miss has no
    /// effect on the registry.
    pub fn create<Q>(&self, key: &Q) -> RegistryResult<B>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => {
                tracing::trace!(registry = %self.config.label, %key, "creating behavior");
                Ok((self.entries[slot].factory)())
            }
            None => {
                tracing::warn!(registry = %self.config.label, %key, "unknown behavior key");
                Err(RegistryError::UnknownKey {
                    registry: self.config.label.clone(),
                    key:      key.to_string(),
                })
            }
        }
    }

    /// Build one behavior per registered key, in registration order.
    pub fn create_all(&self) -> Vec<(K, B)> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), (e.factory)()))
            .collect()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Snapshot of every key in registration order.
    pub fn keys(&self) -> Vec<K> {
        self.iter_keys().cloned().collect()
    }

    /// Borrowing variant of [`keys`][Self::keys].
    pub fn iter_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: RegistryKey, B: Behavior> Default for Registry<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RegistryKey, B: Behavior> fmt::Debug for Registry<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.config.label)
            .field("on_duplicate", &self.config.on_duplicate)
            .field("keys", &self.entries.iter().map(|e| &e.key).collect::<Vec<_>>())
            .finish()
    }
}
