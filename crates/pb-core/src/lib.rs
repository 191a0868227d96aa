//! `pb-core` — foundational types for the `rust_pb` pluggable behavior framework.
//!
//! This crate is a dependency of every other `pb-*` crate.  It intentionally
//! has no `pb-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`key`]     | `RegistryKey` trait, `closed_key!` macro                   |
//! | [`config`]  | `RegistryConfig`, `DuplicatePolicy`                        |
//! | [`error`]   | `PbError`, `PbResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to configuration types.     |

pub mod config;
pub mod error;
pub mod key;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{PbError, PbResult};
pub use key::RegistryKey;
