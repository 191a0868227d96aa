//! `pb-context` — hold one behavior, delegate to it, swap it at runtime.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`context`]  | `Context<B>` — single-owner holder                         |
//! | [`shared`]   | `SharedContext<B>` — `RwLock<Arc<B>>` snapshot-swap holder |
//! | [`observer`] | `ContextObserver` batch hooks, `NoopObserver`, `BatchStats`|
//!
//! # Choosing a holder
//!
//! [`Context`] mutates through `&mut self`; the borrow checker rules out a
//! swap racing an invocation.  [`SharedContext`] is for holders reached from
//! several threads: invocations clone the active `Arc` and release the lock
//! before calling, so a swap never waits for, or disturbs, calls already in
//! flight.  The next call after a swap sees the new behavior.
//!
//! Neither holder retries or masks errors; whatever the behavior returns is
//! handed back as-is.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `Context::invoke_all` on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust
//! use pb_behavior::{BehaviorExt, DynBehavior, FnBehavior};
//! use pb_context::Context;
//!
//! let mut ctx: Context<DynBehavior<u32, u32>> =
//!     Context::new(FnBehavior::new("double", |n: &u32| Ok(n * 2)).boxed());
//! assert_eq!(ctx.invoke(&5).unwrap(), 10);
//!
//! ctx.set_behavior(FnBehavior::new("triple", |n: &u32| Ok(n * 3)).boxed());
//! assert_eq!(ctx.invoke(&5).unwrap(), 15);
//! ```

pub mod context;
pub mod observer;
pub mod shared;


pub use context::Context;
pub use observer::{BatchStats, ContextObserver, NoopObserver};
pub use shared::{BehaviorSwapped, SharedContext};
