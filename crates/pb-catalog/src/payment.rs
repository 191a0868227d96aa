//! Payment processors keyed by a closed enum.

use pb_behavior::{Behavior, BehaviorError, BehaviorExt, BehaviorResult, DynBehavior};
use pb_core::RegistryConfig;
use pb_registry::{Registry, RegistryResult};

pb_core::closed_key! {
    /// Supported payment methods.
    pub enum PaymentType {
        CreditCard   => "credit_card",
        PayPal       => "paypal",
        BankTransfer => "bank_transfer",
    }
}

/// A charge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub amount_cents: u64,
    /// Caller's order or invoice reference.
    pub reference:    String,
}

impl Payment {
    pub fn new(amount_cents: u64, reference: impl Into<String>) -> Self {
        Self { amount_cents, reference: reference.into() }
    }
}

/// Outcome of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub method:       PaymentType,
    pub reference:    String,
    pub amount_cents: u64,
    pub fee_cents:    u64,
}

impl Receipt {
    pub fn net_cents(&self) -> u64 {
        self.amount_cents.saturating_sub(self.fee_cents)
    }
}

/// `amount * bps / 10_000 + fixed`, rounded down.
fn fee(amount_cents: u64, bps: u64, fixed_cents: u64) -> u64 {
    (amount_cents as u128 * bps as u128 / 10_000) as u64 + fixed_cents
}

fn check_common(method: PaymentType, payment: &Payment) -> BehaviorResult<()> {
    if payment.amount_cents == 0 {
        return Err(BehaviorError::validation(method.as_str(), "amount must be positive"));
    }
    if payment.reference.trim().is_empty() {
        return Err(BehaviorError::validation(method.as_str(), "reference must not be empty"));
    }
    Ok(())
}

// ── Card ──────────────────────────────────────────────────────────────────────

/// 2.9 % + 30¢, up to a configurable per-charge limit.
#[derive(Debug, Clone)]
pub struct CardProcessor {
    limit_cents: u64,
}

impl CardProcessor {
    pub fn new(limit_cents: u64) -> Self {
        Self { limit_cents }
    }
}

impl Behavior for CardProcessor {
    type Input  = Payment;
    type Output = Receipt;

    fn name(&self) -> &str {
        PaymentType::CreditCard.as_str()
    }

    fn apply(&self, payment: &Payment) -> BehaviorResult<Receipt> {
        check_common(PaymentType::CreditCard, payment)?;
        if payment.amount_cents > self.limit_cents {
            return Err(BehaviorError::validation(
                self.name(),
                format!("amount {} exceeds card limit {}", payment.amount_cents, self.limit_cents),
            ));
        }
        Ok(Receipt {
            method:       PaymentType::CreditCard,
            reference:    payment.reference.clone(),
            amount_cents: payment.amount_cents,
            fee_cents:    fee(payment.amount_cents, 290, 30),
        })
    }
}

// ── PayPal ────────────────────────────────────────────────────────────────────

/// 3.49 % + 49¢.
#[derive(Debug, Clone, Default)]
pub struct PayPalProcessor;

impl Behavior for PayPalProcessor {
    type Input  = Payment;
    type Output = Receipt;

    fn name(&self) -> &str {
        PaymentType::PayPal.as_str()
    }

    fn apply(&self, payment: &Payment) -> BehaviorResult<Receipt> {
        check_common(PaymentType::PayPal, payment)?;
        Ok(Receipt {
            method:       PaymentType::PayPal,
            reference:    payment.reference.clone(),
            amount_cents: payment.amount_cents,
            fee_cents:    fee(payment.amount_cents, 349, 49),
        })
    }
}

// ── Bank transfer ─────────────────────────────────────────────────────────────

/// Flat 25¢; refuses amounts below the fee itself.
#[derive(Debug, Clone, Default)]
pub struct BankTransferProcessor;

impl BankTransferProcessor {
    pub const FLAT_FEE_CENTS: u64 = 25;
}

impl Behavior for BankTransferProcessor {
    type Input  = Payment;
    type Output = Receipt;

    fn name(&self) -> &str {
        PaymentType::BankTransfer.as_str()
    }

    fn apply(&self, payment: &Payment) -> BehaviorResult<Receipt> {
        check_common(PaymentType::BankTransfer, payment)?;
        if payment.amount_cents <= Self::FLAT_FEE_CENTS {
            return Err(BehaviorError::validation(
                self.name(),
                format!("amount must exceed the {}¢ transfer fee", Self::FLAT_FEE_CENTS),
            ));
        }
        Ok(Receipt {
            method:       PaymentType::BankTransfer,
            reference:    payment.reference.clone(),
            amount_cents: payment.amount_cents,
            fee_cents:    Self::FLAT_FEE_CENTS,
        })
    }
}

/// Registry with one processor per [`PaymentType`], in declaration order.
pub fn payment_registry(
    config:           RegistryConfig,
    card_limit_cents: u64,
) -> RegistryResult<Registry<PaymentType, DynBehavior<Payment, Receipt>>> {
    let mut registry = Registry::with_config(config)?;
    registry.register(PaymentType::CreditCard, move || CardProcessor::new(card_limit_cents).boxed())?;
    registry.register(PaymentType::PayPal, || PayPalProcessor.boxed())?;
    registry.register(PaymentType::BankTransfer, || BankTransferProcessor.boxed())?;
    Ok(registry)
}
