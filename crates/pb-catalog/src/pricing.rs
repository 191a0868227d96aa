//! Decorator-style price composition.
//!
//! A [`BaseCost`] is wrapped by any number of [`AddOn`]s.  Each layer adds
//! its amount to whatever the inner behavior returned and appends its label
//! to the description, so the total is order-independent while the
//! description records the order the layers were applied in:
//!
//! ```rust
//! use pb_behavior::Behavior;
//! use pb_catalog::{BaseCost, PricingExt};
//!
//! let coffee = BaseCost::new("coffee", 5.0).with_addon("milk", 2.0).with_addon("sugar", 1.0);
//! assert_eq!(coffee.apply(&()).unwrap(), 8.0);
//! assert_eq!(coffee.describe(), "coffee, milk, sugar");
//! ```

use pb_behavior::{Behavior, BehaviorError, BehaviorResult};

// ── BaseCost ──────────────────────────────────────────────────────────────────

/// The innermost layer: a labelled, fixed price.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCost {
    label:  String,
    amount: f64,
}

impl BaseCost {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self { label: label.into(), amount }
    }
}

impl Behavior for BaseCost {
    type Input  = ();
    type Output = f64;

    fn name(&self) -> &str {
        &self.label
    }

    fn apply(&self, _input: &()) -> BehaviorResult<f64> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(BehaviorError::validation(
                &self.label,
                format!("base amount must be a non-negative number, got {}", self.amount),
            ));
        }
        Ok(self.amount)
    }
}

// ── AddOn ─────────────────────────────────────────────────────────────────────

/// Adds a surcharge on top of `inner`.
///
/// Any behavior producing an `f64` can be wrapped, including another
/// `AddOn`.  Errors from `inner` pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn<B> {
    inner:  B,
    label:  String,
    amount: f64,
}

impl<B> AddOn<B>
where
    B: Behavior<Output = f64>,
{
    pub fn new(inner: B, label: impl Into<String>, amount: f64) -> Self {
        Self { inner, label: label.into(), amount }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl<B> Behavior for AddOn<B>
where
    B: Behavior<Output = f64>,
{
    type Input  = B::Input;
    type Output = f64;

    fn name(&self) -> &str {
        &self.label
    }

    fn describe(&self) -> String {
        format!("{}, {}", self.inner.describe(), self.label)
    }

    fn apply(&self, input: &B::Input) -> BehaviorResult<f64> {
        let subtotal = self.inner.apply(input)?;
        if !self.amount.is_finite() {
            return Err(BehaviorError::validation(&self.label, "surcharge must be finite"));
        }
        let total = subtotal + self.amount;
        if !total.is_finite() {
            return Err(BehaviorError::failed(&self.label, "total overflowed"));
        }
        Ok(total)
    }
}

/// Adds `.with_addon(label, amount)` to every `f64`-producing behavior.
pub trait PricingExt: Behavior<Output = f64> + Sized {
    fn with_addon(self, label: impl Into<String>, amount: f64) -> AddOn<Self> {
        AddOn::new(self, label, amount)
    }
}

impl<B: Behavior<Output = f64>> PricingExt for B {}
