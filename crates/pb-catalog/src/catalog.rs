//! The composition root.

use std::fmt;
use std::sync::Arc;

use pb_behavior::{Behavior, DynBehavior};
use pb_context::SharedContext;
use pb_registry::{Registry, SharedRegistry};

use crate::format::formatter_registry;
use crate::notifier::notifier_registry;
use crate::payment::payment_registry;
use crate::rates::load_rates_csv;
use crate::shipping::shipping_registry;
use crate::{
    CarrierStrategy, CatalogConfig, CatalogResult, Delivery, Message, Outbox, Payload, Payment,
    PaymentType, Receipt, Shipment,
};

/// Every registry the application uses, built once.
///
/// Construct one `Catalog` at startup and pass it (usually as
/// `Arc<Catalog>`) to whatever needs it.  There is no global accessor:
/// whoever holds a reference got it from the code that built it.
///
/// The shipping registry is a [`SharedRegistry`], so carriers can be added
/// at runtime through a shared `&Catalog`.  The other registries are fixed
/// after construction.
///
/// ```rust
/// use std::sync::Arc;
/// use pb_catalog::{Catalog, CatalogConfig, Shipment};
///
/// let catalog = Arc::new(Catalog::new(CatalogConfig::default()).unwrap());
/// let cost = catalog.quote("DHL", &Shipment::new(10.0, 200.0)).unwrap();
/// assert!((cost - 35.0).abs() < 1e-9);
/// ```
pub struct Catalog {
    config:     CatalogConfig,
    shipping:   SharedRegistry<String, CarrierStrategy>,
    payments:   Registry<PaymentType, DynBehavior<Payment, Receipt>>,
    formatters: Registry<String, DynBehavior<Payload, String>>,
    notifiers:  Registry<String, DynBehavior<Message, Delivery>>,
    outbox:     Arc<Outbox>,
}

impl Catalog {
    /// Validate `config` and build every registry.
    ///
    /// Loads `config.rates_csv` (if set) on top of the built-in carriers and
    /// fails if `config.default_carrier` is not registered afterwards.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut shipping = shipping_registry(config.registry_config("shipping"))?;
        if let Some(path) = &config.rates_csv {
            load_rates_csv(path, &mut shipping)?;
        }
        // Probe the default carrier now so a typo fails at startup.
        shipping.create(config.default_carrier.as_str())?;

        let outbox = Arc::new(Outbox::new());
        let payments = payment_registry(config.registry_config("payments"), config.card_limit_cents)?;
        let formatters = formatter_registry(config.registry_config("formatters"))?;
        let notifiers = notifier_registry(
            config.registry_config("notifiers"),
            &config.smtp_host,
            &config.sms_gateway,
            Arc::clone(&outbox),
        )?;

        tracing::info!(
            carriers   = shipping.len(),
            payments   = payments.len(),
            formatters = formatters.len(),
            notifiers  = notifiers.len(),
            "catalog ready"
        );

        Ok(Self {
            config,
            shipping: SharedRegistry::new(shipping),
            payments,
            formatters,
            notifiers,
            outbox,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn shipping(&self) -> &SharedRegistry<String, CarrierStrategy> {
        &self.shipping
    }

    pub fn payments(&self) -> &Registry<PaymentType, DynBehavior<Payment, Receipt>> {
        &self.payments
    }

    pub fn formatters(&self) -> &Registry<String, DynBehavior<Payload, String>> {
        &self.formatters
    }

    pub fn notifiers(&self) -> &Registry<String, DynBehavior<Message, Delivery>> {
        &self.notifiers
    }

    /// Sink shared by every notifier this catalog creates.
    pub fn outbox(&self) -> &Arc<Outbox> {
        &self.outbox
    }

    /// A thread-safe shipping context starting on the default carrier.
    pub fn shipping_context(&self) -> CatalogResult<SharedContext<CarrierStrategy>> {
        let initial = self.shipping.create(self.config.default_carrier.as_str())?;
        Ok(SharedContext::new(initial))
    }

    /// Price `shipment` with `carrier`.
    pub fn quote(&self, carrier: &str, shipment: &Shipment) -> CatalogResult<f64> {
        Ok(self.shipping.create(carrier)?.apply(shipment)?)
    }

    /// Charge `payment` with `method`.
    pub fn charge(&self, method: PaymentType, payment: &Payment) -> CatalogResult<Receipt> {
        Ok(self.payments.create(&method)?.apply(payment)?)
    }

    /// Render `payload` in `format`.
    pub fn render(&self, format: &str, payload: &Payload) -> CatalogResult<String> {
        Ok(self.formatters.create(format)?.apply(payload)?)
    }

    /// Send `message` over `channel`.
    pub fn send(&self, channel: &str, message: &Message) -> CatalogResult<Delivery> {
        Ok(self.notifiers.create(channel)?.apply(message)?)
    }
}

fn key_names<K: ToString>(keys: Vec<K>) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("shipping", &self.shipping.keys())
            .field("payments", &key_names(self.payments.keys()))
            .field("formatters", &self.formatters.keys())
            .field("notifiers", &self.notifiers.keys())
            .field("outbox", &self.outbox.len())
            .finish()
    }
}
