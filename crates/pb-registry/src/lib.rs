//! `pb-registry` — discriminator-to-factory dispatch.
//!
//! A [`Registry`] replaces `match`/`if` chains over a type tag: each key maps
//! to a zero-argument factory producing a behavior, so adding a variant means
//! one `register` call rather than editing dispatch code.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`registry`] | `Registry<K, B>` — ordered key → factory map               |
//! | [`builder`]  | `RegistryBuilder<K, B>` — fluent construction              |
//! | [`shared`]   | `SharedRegistry<K, B>` — `Arc<RwLock<…>>` handle           |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                       |
//!
//! # Concurrency
//!
//! `Registry` mutates through `&mut self`, so it cannot be registered into
//! while another thread is reading it without an external lock.  Use
//! [`SharedRegistry`] when registration and lookup happen on different
//! threads.
//!
//! # Quick-start
//!
//! ```rust
//! use pb_behavior::{Behavior, ConstantBehavior};
//! use pb_registry::Registry;
//!
//! let mut reg = Registry::new();
//! reg.register("one".to_owned(), || ConstantBehavior::<(), u32>::new("one", 1)).unwrap();
//! reg.register("two".to_owned(), || ConstantBehavior::<(), u32>::new("two", 2)).unwrap();
//!
//! assert_eq!(reg.keys(), ["one", "two"]);
//! assert_eq!(reg.create("two").unwrap().apply(&()).unwrap(), 2);
//! assert!(reg.create("three").is_err());
//! ```

pub mod builder;
pub mod error;
pub mod registry;
pub mod shared;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;
pub use error::{RegistryError, RegistryResult};
pub use registry::{Factory, Registry};
pub use shared::SharedRegistry;
