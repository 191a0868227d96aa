//! Notifiers that deliver into an injected [`Outbox`].
//!
//! Transport settings (SMTP host, SMS gateway) are given to each notifier at
//! construction; the registry factory captures them.  Delivery itself is
//! simulated: a notifier validates the message and appends a [`Delivery`] to
//! the shared outbox, which publishes it to any subscribers.

use std::sync::Arc;

use parking_lot::Mutex;
use pb_behavior::{Behavior, BehaviorError, BehaviorExt, BehaviorResult, DynBehavior};
use pb_core::RegistryConfig;
use pb_notify::{Observer, Subject, SubscriptionId};
use pb_registry::{Registry, RegistryResult};

pub const EMAIL: &str = "email";
pub const SMS:   &str = "sms";

/// Longest SMS body accepted.
pub const SMS_MAX_CHARS: usize = 160;

/// A message to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub to:   String,
    pub body: String,
}

impl Message {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self { to: to.into(), body: body.into() }
    }
}

/// A message accepted by a notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Notifier name, `"email"` or `"sms"`.
    pub channel: String,
    /// SMTP host or SMS gateway used.
    pub via:     String,
    pub to:      String,
    pub body:    String,
}

// ── Outbox ────────────────────────────────────────────────────────────────────

/// Shared, internally synchronized sink for deliveries.
#[derive(Debug, Default)]
pub struct Outbox {
    sent:   Mutex<Vec<Delivery>>,
    events: Subject<Delivery>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `delivery` and publish it to subscribers.
    pub fn push(&self, delivery: Delivery) {
        self.sent.lock().push(delivery.clone());
        self.events.notify(&delivery);
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.sent.lock().clone()
    }

    /// Take every recorded delivery, leaving the outbox empty.
    ///
    /// Subscribers are unaffected.
    pub fn drain(&self) -> Vec<Delivery> {
        std::mem::take(&mut *self.sent.lock())
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    pub fn subscribe<O>(&self, observer: &Arc<O>) -> SubscriptionId
    where
        O: Observer<Delivery> + 'static,
    {
        self.events.attach(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.detach(id)
    }
}

fn check_body(channel: &str, body: &str) -> BehaviorResult<()> {
    if body.trim().is_empty() {
        return Err(BehaviorError::validation(channel, "body must not be empty"));
    }
    Ok(())
}

// ── Email ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct EmailNotifier {
    smtp_host: String,
    outbox:    Arc<Outbox>,
}

impl EmailNotifier {
    pub fn new(smtp_host: impl Into<String>, outbox: Arc<Outbox>) -> Self {
        Self { smtp_host: smtp_host.into(), outbox }
    }

    pub fn smtp_host(&self) -> &str {
        &self.smtp_host
    }
}

impl Behavior for EmailNotifier {
    type Input  = Message;
    type Output = Delivery;

    fn name(&self) -> &str {
        EMAIL
    }

    fn describe(&self) -> String {
        format!("email via {}", self.smtp_host)
    }

    fn apply(&self, msg: &Message) -> BehaviorResult<Delivery> {
        let valid_address = msg
            .to
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_address {
            return Err(BehaviorError::validation(EMAIL, format!("invalid address {:?}", msg.to)));
        }
        check_body(EMAIL, &msg.body)?;

        let delivery = Delivery {
            channel: EMAIL.to_owned(),
            via:     self.smtp_host.clone(),
            to:      msg.to.clone(),
            body:    msg.body.clone(),
        };
        tracing::debug!(to = %delivery.to, via = %delivery.via, "email queued");
        self.outbox.push(delivery.clone());
        Ok(delivery)
    }
}

// ── SMS ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SmsNotifier {
    gateway: String,
    outbox:  Arc<Outbox>,
}

impl SmsNotifier {
    pub fn new(gateway: impl Into<String>, outbox: Arc<Outbox>) -> Self {
        Self { gateway: gateway.into(), outbox }
    }
}

impl Behavior for SmsNotifier {
    type Input  = Message;
    type Output = Delivery;

    fn name(&self) -> &str {
        SMS
    }

    fn describe(&self) -> String {
        format!("sms via {}", self.gateway)
    }

    fn apply(&self, msg: &Message) -> BehaviorResult<Delivery> {
        let digits = msg.to.strip_prefix('+').unwrap_or(&msg.to);
        if digits.len() < 7 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(BehaviorError::validation(SMS, format!("invalid phone number {:?}", msg.to)));
        }
        check_body(SMS, &msg.body)?;
        let chars = msg.body.chars().count();
        if chars > SMS_MAX_CHARS {
            return Err(BehaviorError::validation(
                SMS,
                format!("body is {chars} characters, limit is {SMS_MAX_CHARS}"),
            ));
        }

        let delivery = Delivery {
            channel: SMS.to_owned(),
            via:     self.gateway.clone(),
            to:      msg.to.clone(),
            body:    msg.body.clone(),
        };
        tracing::debug!(to = %delivery.to, via = %delivery.via, "sms queued");
        self.outbox.push(delivery.clone());
        Ok(delivery)
    }
}

/// Registry with `email` and `sms` notifiers sharing `outbox`.
pub fn notifier_registry(
    config:      RegistryConfig,
    smtp_host:   &str,
    sms_gateway: &str,
    outbox:      Arc<Outbox>,
) -> RegistryResult<Registry<String, DynBehavior<Message, Delivery>>> {
    let mut registry = Registry::with_config(config)?;

    let host = smtp_host.to_owned();
    let email_outbox = Arc::clone(&outbox);
    registry.register(EMAIL.to_owned(), move || {
        EmailNotifier::new(host.clone(), Arc::clone(&email_outbox)).boxed()
    })?;

    let gateway = sms_gateway.to_owned();
    registry.register(SMS.to_owned(), move || {
        SmsNotifier::new(gateway.clone(), Arc::clone(&outbox)).boxed()
    })?;

    Ok(registry)
}
