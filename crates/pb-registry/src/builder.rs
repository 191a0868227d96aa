//! Fluent builder for constructing a [`Registry`].

use pb_behavior::Behavior;
use pb_core::{RegistryConfig, RegistryKey};

use crate::{Factory, Registry, RegistryResult};

/// Fluent builder for [`Registry<K, B>`].
///
/// Registrations are applied in call order when [`build`][Self::build] runs,
/// under the configured duplicate policy.
///
/// # Example
///
/// ```rust
/// use pb_behavior::ConstantBehavior;
/// use pb_core::{DuplicatePolicy, RegistryConfig};
/// use pb_registry::RegistryBuilder;
///
/// let reg = RegistryBuilder::new()
///     .config(RegistryConfig::labeled("greetings").on_duplicate(DuplicatePolicy::Reject))
///     .register("en", || ConstantBehavior::<(), &str>::new("en", "hello"))
///     .register("fr", || ConstantBehavior::<(), &str>::new("fr", "bonjour"))
///     .build()
///     .unwrap();
/// assert_eq!(reg.keys(), ["en", "fr"]);
/// ```
pub struct RegistryBuilder<K: RegistryKey, B: Behavior> {
    config:  RegistryConfig,
    pending: Vec<(K, Factory<B>)>,
}

impl<K: RegistryKey, B: Behavior> RegistryBuilder<K, B> {
    pub fn new() -> Self {
        Self {
            config:  RegistryConfig::default(),
            pending: Vec::new(),
        }
    }

    /// Replace the default [`RegistryConfig`].
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Queue a registration.
    pub fn register<F>(mut self, key: K, factory: F) -> Self
    where
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.pending.push((key, Box::new(factory)));
        self
    }

    /// Validate the config and apply every queued registration.
    ///
    /// Fails on an invalid config, or on the first duplicate key when the
    /// policy is `Reject`.
    pub fn build(self) -> RegistryResult<Registry<K, B>> {
        let mut registry = Registry::with_config(self.config)?;
        for (key, factory) in self.pending {
            registry.register_boxed(key, factory)?;
        }
        Ok(registry)
    }
}

impl<K: RegistryKey, B: Behavior> Default for RegistryBuilder<K, B> {
    fn default() -> Self {
        Self::new()
    }
}
