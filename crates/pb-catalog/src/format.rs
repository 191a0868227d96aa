//! Payload formatters.

use std::collections::BTreeMap;

use pb_behavior::{Behavior, BehaviorError, BehaviorExt, BehaviorResult, DynBehavior};
use pb_core::RegistryConfig;
use pb_registry::{Registry, RegistryResult};

/// Flat key/value record; keys are emitted in sorted order by every format.
pub type Payload = BTreeMap<String, String>;

pub const JSON:  &str = "json";
pub const CSV:   &str = "csv";
pub const PLAIN: &str = "plain";

/// `{"k":"v",...}` via serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Behavior for JsonFormatter {
    type Input  = Payload;
    type Output = String;

    fn name(&self) -> &str {
        JSON
    }

    fn apply(&self, payload: &Payload) -> BehaviorResult<String> {
        serde_json::to_string(payload).map_err(|e| BehaviorError::failed(JSON, e.to_string()))
    }
}

/// A header row of keys followed by one row of values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl Behavior for CsvFormatter {
    type Input  = Payload;
    type Output = String;

    fn name(&self) -> &str {
        CSV
    }

    fn apply(&self, payload: &Payload) -> BehaviorResult<String> {
        if payload.is_empty() {
            return Err(BehaviorError::validation(CSV, "payload has no fields"));
        }
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(payload.keys())
            .and_then(|()| writer.write_record(payload.values()))
            .map_err(|e| BehaviorError::failed(CSV, e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| BehaviorError::failed(CSV, e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| BehaviorError::failed(CSV, e.to_string()))
    }
}

/// `key: value` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Behavior for PlainFormatter {
    type Input  = Payload;
    type Output = String;

    fn name(&self) -> &str {
        PLAIN
    }

    fn apply(&self, payload: &Payload) -> BehaviorResult<String> {
        Ok(payload.iter().map(|(k, v)| format!("{k}: {v}\n")).collect())
    }
}

/// Registry with `json`, `csv`, and `plain`, in that order.
pub fn formatter_registry(
    config: RegistryConfig,
) -> RegistryResult<Registry<String, DynBehavior<Payload, String>>> {
    let mut registry = Registry::with_config(config)?;
    registry.register(JSON.to_owned(), || JsonFormatter.boxed())?;
    registry.register(CSV.to_owned(), || CsvFormatter.boxed())?;
    registry.register(PLAIN.to_owned(), || PlainFormatter.boxed())?;
    Ok(registry)
}
