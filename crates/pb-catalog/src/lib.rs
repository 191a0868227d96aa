//! `pb-catalog` — concrete behavior families and the composition root.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`shipping`] | `Shipment`, `RateCard`, `CarrierStrategy`, `shipping_registry`    |
//! | [`rates`]    | CSV rate-table loader                                             |
//! | [`pricing`]  | `BaseCost`, `AddOn<B>` decorator, `PricingExt`                    |
//! | [`payment`]  | `PaymentType` key, card / PayPal / bank-transfer processors       |
//! | [`format`]   | JSON / CSV / plain payload formatters                             |
//! | [`notifier`] | Email / SMS notifiers writing to a shared `Outbox`                |
//! | [`birds`]    | Capability-scoped `Flyable` / `Swimmable` traits                  |
//! | [`catalog`]  | `Catalog` — builds every registry once from `CatalogConfig`       |
//! | [`config`]   | `CatalogConfig`                                                   |
//! | [`error`]    | `CatalogError`, `CatalogResult<T>`                                |
//!
//! # Composition root
//!
//! Long-lived dependencies (registries, the outbox) are constructed exactly
//! once by [`Catalog::new`] and handed around explicitly, usually as
//! `Arc<Catalog>`.  Nothing in this crate is reachable through a global.

pub mod birds;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod notifier;
pub mod payment;
pub mod pricing;
pub mod rates;
pub mod shipping;


pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use format::{Payload, formatter_registry};
pub use notifier::{Delivery, Message, Outbox, notifier_registry};
pub use payment::{Payment, PaymentType, Receipt, payment_registry};
pub use pricing::{AddOn, BaseCost, PricingExt};
pub use rates::{load_rates_csv, load_rates_reader};
pub use shipping::{CarrierStrategy, RateCard, Shipment, shipping_registry};
