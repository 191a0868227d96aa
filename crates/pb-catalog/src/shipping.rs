//! Shipping cost strategies.
//!
//! Every carrier computes
//!
//! ```text
//! cost = base + weight_kg * per_kg + distance_km * per_km
//! ```
//!
//! and differs only in its [`RateCard`].  Carriers are registered by name
//! (`"DHL"`, `"UPS"`, `"FedEx"`), so adding one is a `register` call or a row
//! in the rate CSV, never a new `match` arm.

use pb_behavior::{Behavior, BehaviorError, BehaviorResult};
use pb_core::{PbError, PbResult, RegistryConfig};
use pb_registry::{Registry, RegistryResult};

pub const DHL:   &str = "DHL";
pub const UPS:   &str = "UPS";
pub const FEDEX: &str = "FedEx";

// ── Shipment ──────────────────────────────────────────────────────────────────

/// A parcel to be priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shipment {
    pub weight_kg:   f64,
    pub distance_km: f64,
}

impl Shipment {
    pub fn new(weight_kg: f64, distance_km: f64) -> Self {
        Self { weight_kg, distance_km }
    }
}

// ── RateCard ──────────────────────────────────────────────────────────────────

/// Linear tariff: a flat base plus per-kilogram and per-kilometre rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCard {
    pub base:   f64,
    pub per_kg: f64,
    pub per_km: f64,
}

impl RateCard {
    pub const DHL:   RateCard = RateCard { base: 10.0, per_kg: 0.5,  per_km: 0.1 };
    pub const UPS:   RateCard = RateCard { base: 12.0, per_kg: 0.45, per_km: 0.12 };
    pub const FEDEX: RateCard = RateCard { base: 15.0, per_kg: 0.4,  per_km: 0.08 };

    /// All rates must be finite and non-negative.
    pub fn validate(&self) -> PbResult<()> {
        for (field, value) in [("base", self.base), ("per_kg", self.per_kg), ("per_km", self.per_km)] {
            if !value.is_finite() || value < 0.0 {
                return Err(PbError::Config(format!("rate {field} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn cost(&self, shipment: &Shipment) -> f64 {
        self.base + shipment.weight_kg * self.per_kg + shipment.distance_km * self.per_km
    }
}

// ── CarrierStrategy ───────────────────────────────────────────────────────────

/// Prices a [`Shipment`] with one carrier's [`RateCard`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierStrategy {
    carrier: String,
    rates:   RateCard,
}

impl CarrierStrategy {
    pub fn new(carrier: impl Into<String>, rates: RateCard) -> Self {
        Self { carrier: carrier.into(), rates }
    }

    pub fn dhl() -> Self {
        Self::new(DHL, RateCard::DHL)
    }

    pub fn ups() -> Self {
        Self::new(UPS, RateCard::UPS)
    }

    pub fn fedex() -> Self {
        Self::new(FEDEX, RateCard::FEDEX)
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }
}

impl Behavior for CarrierStrategy {
    type Input  = Shipment;
    type Output = f64;

    fn name(&self) -> &str {
        &self.carrier
    }

    fn describe(&self) -> String {
        format!(
            "{} ({} + {}/kg + {}/km)",
            self.carrier, self.rates.base, self.rates.per_kg, self.rates.per_km
        )
    }

    fn apply(&self, shipment: &Shipment) -> BehaviorResult<f64> {
        if !shipment.weight_kg.is_finite() || shipment.weight_kg < 0.0 {
            return Err(BehaviorError::validation(
                &self.carrier,
                format!("weight must be a non-negative number, got {}", shipment.weight_kg),
            ));
        }
        if !shipment.distance_km.is_finite() || shipment.distance_km < 0.0 {
            return Err(BehaviorError::validation(
                &self.carrier,
                format!("distance must be a non-negative number, got {}", shipment.distance_km),
            ));
        }
        let cost = self.rates.cost(shipment);
        if !cost.is_finite() {
            return Err(BehaviorError::failed(&self.carrier, format!("cost overflowed for {shipment:?}")));
        }
        Ok(cost)
    }
}

/// Registry preloaded with the built-in carriers, in the order DHL, UPS, FedEx.
pub fn shipping_registry(config: RegistryConfig) -> RegistryResult<Registry<String, CarrierStrategy>> {
    let mut registry = Registry::with_config(config)?;
    for (name, rates) in [(DHL, RateCard::DHL), (UPS, RateCard::UPS), (FEDEX, RateCard::FEDEX)] {
        registry.register(name.to_owned(), move || CarrierStrategy::new(name, rates))?;
    }
    Ok(registry)
}
