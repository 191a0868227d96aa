//! `pb-behavior` — the behavior contract and its building blocks.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`model`]      | `Behavior` trait, `DynBehavior<I, O>`                         |
//! | [`adapter`]    | `FnBehavior` — adapts a closure into a `Behavior`             |
//! | [`constant`]   | `ConstantBehavior` — placeholder that always yields one value |
//! | [`compose`]    | `Then<A, B>` pipeline and the `BehaviorExt` extension trait   |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! A behavior is an interchangeable unit of logic with a fixed
//! `Input → Result<Output>` shape, so a holder (see `pb-context`) can treat
//! every variant uniformly.  Behaviors are `Send + Sync + 'static` and take
//! `&self`: the same instance may be shared by several holders, so any state
//! it keeps must be internally synchronized.  Stateless is the default.
//!
//! There is no "unsupported operation" error.  A variant that cannot perform
//! an operation should not implement the trait exposing it; split the
//! interface per capability instead.

pub mod adapter;
pub mod compose;
pub mod constant;
pub mod error;
pub mod model;


pub use adapter::FnBehavior;
pub use compose::{BehaviorExt, Then};
pub use constant::ConstantBehavior;
pub use error::{BehaviorError, BehaviorResult};
pub use model::{Behavior, DynBehavior};
