//! `pb-notify` — publish/subscribe without dangling observers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`observer`] | `Observer<E>` trait, `FnObserver`, `Recorder<E>`          |
//! | [`subject`]  | `Subject<E>`, `SubscriptionId`                            |
//!
//! # Delivery model
//!
//! A [`Subject`] keeps **weak** handles to its observers in attachment
//! order.  `notify` upgrades them under the lock, drops handles whose
//! observer is gone, releases the lock, and only then delivers to that
//! snapshot.  Observers may therefore attach or detach (themselves or
//! others) from inside `on_event`; the change applies from the next
//! `notify`.
//!
//! ```rust
//! use std::sync::Arc;
//! use pb_notify::{Recorder, Subject};
//!
//! let subject = Subject::new();
//! let rec = Arc::new(Recorder::new());
//! subject.attach(&rec);
//! subject.notify(&"price changed");
//! assert_eq!(rec.events(), ["price changed"]);
//!
//! drop(rec);
//! assert_eq!(subject.notify(&"nobody listening"), 0);
//! ```

pub mod observer;
pub mod subject;

#[cfg(test)]
mod tests;

pub use observer::{FnObserver, Observer, Recorder};
pub use subject::{Subject, SubscriptionId};
