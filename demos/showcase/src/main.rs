//! showcase — a tour of the rust_pb behavior catalog.
//!
//! Builds a `Catalog` (optionally from a JSON config given as the first
//! argument), then prices parcels, swaps strategies at runtime, stacks
//! price add-ons, charges payments, renders a summary, and sends it.
//!
//! Set `RUST_LOG=debug` to see registry and context activity.

mod rates;

use std::io::Cursor;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use pb_behavior::{Behavior, BehaviorExt};
use pb_catalog::birds::{Duck, Flyable, Penguin, Sparrow, Swimmable, dive, take_off};
use pb_catalog::{
    BaseCost, Catalog, CatalogConfig, Delivery, Message, Payload, Payment, PaymentType,
    PricingExt, Shipment, load_rates_reader, shipping_registry,
};
use pb_context::{BatchStats, BehaviorSwapped, Context};
use pb_core::DuplicatePolicy;
use pb_notify::FnObserver;
use pb_registry::RegistryError;

use rates::REGIONAL_RATES_CSV;

// ── Constants ─────────────────────────────────────────────────────────────────

const QUOTE_THREADS: usize = 4;

const PARCELS: [(f64, f64); 5] = [
    (10.0, 200.0),
    (2.5, 15.0),
    (30.0, 1_200.0),
    (0.4, 3.0),
    (-1.0, 50.0), // rejected: negative weight
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== showcase — rust_pb behavior catalog ===");
    println!();

    // 1. Configuration.
    tracing::info!(step = 1, "loading configuration");
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            CatalogConfig::from_json_str(&text)?
        }
        None => CatalogConfig::default(),
    };
    println!("Config: {}", serde_json::to_string(&config)?);

    // 2. Composition root.
    tracing::info!(step = 2, "building catalog");
    let t0 = Instant::now();
    let catalog = Arc::new(Catalog::new(config.clone())?);
    println!("Catalog built in {:.3} ms: {catalog:?}", t0.elapsed().as_secs_f64() * 1e3);
    println!();

    // 3. Strategy: every built-in carrier on the same parcel.
    tracing::info!(step = 3, "quoting built-in carriers");
    let parcel = Shipment::new(10.0, 200.0);
    println!("{:<8} {:>10}  {}", "Carrier", "Cost", "Tariff");
    println!("{}", "-".repeat(48));
    for carrier in catalog.shipping().keys() {
        let strategy = catalog.shipping().create(carrier.as_str())?;
        println!("{:<8} {:>10.2}  {}", carrier, strategy.apply(&parcel)?, strategy.describe());
    }
    match catalog.quote("nonexistent", &parcel) {
        Err(e) => println!("Lookup miss: {e}"),
        Ok(cost) => println!("Unexpected quote {cost}"),
    }
    println!();

    // 4. Regional rate table, loaded into a registry of its own.
    tracing::info!(step = 4, "loading regional rates");
    let mut regional = shipping_registry(config.registry_config("regional"))?;
    let loaded = load_rates_reader(Cursor::new(REGIONAL_RATES_CSV), &mut regional)?;
    println!("Regional table: {loaded} rows, carriers {:?}", regional.keys());

    let strict = config.registry_config("strict").on_duplicate(DuplicatePolicy::Reject);
    let mut strict_registry = shipping_registry(strict)?;
    if let Err(e) = load_rates_reader(Cursor::new(REGIONAL_RATES_CSV), &mut strict_registry) {
        println!("Strict table refused: {e}");
    }

    // 5. Context: price a batch, swap, price again.
    tracing::info!(step = 5, parcels = PARCELS.len(), "pricing batches");
    let inputs: Vec<Shipment> = PARCELS.iter().map(|&(kg, km)| Shipment::new(kg, km)).collect();
    let mut ctx = Context::from_registry(&regional, "DPD")?;
    let mut stats = BatchStats::default();
    for carrier in ["DPD", "GLS", "DHL"] {
        if ctx.behavior().name() != carrier {
            ctx.set_behavior(regional.create(carrier)?);
        }
        let results = ctx.invoke_all(&inputs, &mut stats);
        let costs: Vec<String> = results
            .iter()
            .map(|r| r.as_ref().map_or_else(|e| format!("err({e})"), |c| format!("{c:.2}")))
            .collect();
        println!("{:<4} {}", carrier, costs.join("  "));
    }
    println!(
        "Batches: {}  invoked: {}  failed: {}  swaps: {}",
        stats.batches, stats.invoked, stats.failed, ctx.swap_count()
    );
    println!();

    // 6. Shared context: readers on several threads while the strategy changes.
    tracing::info!(step = 6, threads = QUOTE_THREADS, "swapping under load");
    let shared = catalog.shipping_context()?;
    let swap_log = Arc::new(FnObserver::new(|e: &BehaviorSwapped| {
        println!("  swap #{}: {} -> {}", e.swap, e.from, e.to);
    }));
    shared.subscribe(&swap_log);

    std::thread::scope(|s| -> Result<()> {
        let readers: Vec<_> = (0..QUOTE_THREADS)
            .map(|_| s.spawn(|| (0..100).filter_map(|_| shared.invoke(&parcel).ok()).sum::<f64>()))
            .collect();
        for carrier in ["UPS", "FedEx"] {
            shared.set_behavior(catalog.shipping().create(carrier)?);
        }
        for (i, reader) in readers.into_iter().enumerate() {
            let total = reader.join().map_err(|_| anyhow::anyhow!("reader {i} panicked"))?;
            println!("  reader {i}: 100 quotes, total {total:.2}");
        }
        Ok(())
    })?;
    println!("Active carrier: {}", shared.current().name());
    println!();

    // 7. Decorator: add-ons in either order.
    tracing::info!(step = 7, "stacking add-ons");
    let latte = BaseCost::new("coffee", 5.0).with_addon("milk", 2.0).with_addon("sugar", 1.0);
    let sweet = BaseCost::new("coffee", 5.0).with_addon("sugar", 1.0).with_addon("milk", 2.0);
    for drink in [latte.boxed(), sweet.boxed()] {
        println!("{:<24} {:>6.2}", drink.describe(), drink.apply(&())?);
    }
    let express = catalog.shipping().create("DHL")?.with_addon("express", 7.5);
    println!("{:<24} {:>6.2}", "DHL + express", express.apply(&parcel)?);
    println!();

    // 8. Payments keyed by a closed enum.
    tracing::info!(step = 8, "charging payments");
    let order = Payment::new(12_999, "order-1001");
    let mut receipts = Vec::new();
    for method in PaymentType::ALL {
        match catalog.charge(*method, &order) {
            Ok(receipt) => {
                println!(
                    "{:<14} fee {:>4}¢  net {:>6}¢",
                    method.as_str(),
                    receipt.fee_cents,
                    receipt.net_cents()
                );
                receipts.push(receipt);
            }
            Err(e) => println!("{:<14} {e}", method.as_str()),
        }
    }
    if let Err(e) = catalog.charge(PaymentType::BankTransfer, &Payment::new(10, "tiny")) {
        println!("Rejected: {e}");
    }
    match "cash".parse::<PaymentType>() {
        Ok(m) => println!("Unexpected method {m}"),
        Err(e) => println!("Rejected: {e}"),
    }
    println!();

    // 9. Format a summary and send it.
    tracing::info!(step = 9, "rendering and sending summary");
    let sent_log = Arc::new(FnObserver::new(|d: &Delivery| {
        println!("  outbox <- {} to {} via {}", d.channel, d.to, d.via);
    }));
    let sub = catalog.outbox().subscribe(&sent_log);

    let mut summary = Payload::new();
    summary.insert("order".into(), order.reference.clone());
    summary.insert("amount_cents".into(), order.amount_cents.to_string());
    summary.insert("receipts".into(), receipts.len().to_string());
    for key in catalog.formatters().keys() {
        println!("[{key}]\n{}", catalog.render(&key, &summary)?);
    }

    let body = catalog.render("plain", &summary)?;
    catalog.send("email", &Message::new("ops@example.com", body))?;
    catalog.send("sms", &Message::new("+15551234567", format!("order {} paid", order.reference)))?;
    if let Err(e) = catalog.send("sms", &Message::new("+1555", "short number")) {
        println!("  {e}");
    }
    catalog.outbox().unsubscribe(sub);
    println!("Outbox holds {} deliveries", catalog.outbox().len());
    println!();

    // 10. Capabilities are types, not runtime checks.
    tracing::info!(step = 10, "exercising capabilities");
    let flyers: [&dyn Flyable; 2] = [&Sparrow, &Duck];
    let swimmers: [&dyn Swimmable; 2] = [&Penguin, &Duck];
    for movement in take_off(&flyers).into_iter().chain(dive(&swimmers)) {
        println!("{movement:?}");
    }

    match catalog.shipping().create("Pony Express") {
        Err(RegistryError::UnknownKey { registry, key }) => {
            println!();
            println!("Done. ({registry} has no {key:?}, as expected)");
        }
        Err(e) => return Err(e.into()),
        Ok(_) => println!("Done."),
    }

    Ok(())
}
