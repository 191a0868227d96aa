//! CSV rate-table loader.
//!
//! # CSV format
//!
//! One row per carrier.  Columns may appear in any order as long as the
//! header names them.
//!
//! ```csv
//! carrier,base,per_kg,per_km
//! DHL,10,0.5,0.1
//! DPD,8.5,0.55,0.09
//! ```
//!
//! Each row registers a [`CarrierStrategy`] under `carrier` (exact,
//! case-sensitive).  A row for an existing carrier follows the registry's
//! duplicate policy, so with the default policy a CSV can override the
//! built-in tariffs.
//!
//! The whole file is parsed and validated before anything is registered: a
//! bad row leaves the registry exactly as it was.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pb_core::DuplicatePolicy;
use pb_registry::{Registry, RegistryError};

use crate::shipping::{CarrierStrategy, RateCard};
use crate::{CatalogError, CatalogResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RateRecord {
    carrier: String,
    base:    f64,
    per_kg:  f64,
    per_km:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load carriers from a CSV file into `registry`.
///
/// Returns the number of rows registered.
pub fn load_rates_csv(
    path:     &Path,
    registry: &mut Registry<String, CarrierStrategy>,
) -> CatalogResult<usize> {
    let file = std::fs::File::open(path)?;
    let count = load_rates_reader(file, registry)?;
    tracing::info!(path = %path.display(), count, "loaded rate table");
    Ok(count)
}

/// Like [`load_rates_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice) or for
/// embedded tables.
pub fn load_rates_reader<R: Read>(
    reader:   R,
    registry: &mut Registry<String, CarrierStrategy>,
) -> CatalogResult<usize> {
    // ── Parse and validate every row first ────────────────────────────────
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows: Vec<(String, RateCard)> = Vec::new();

    for (i, result) in csv_reader.deserialize::<RateRecord>().enumerate() {
        // Data rows start on line 2, after the header.
        let line = i + 2;
        let row = result.map_err(|e| CatalogError::Parse(format!("line {line}: {e}")))?;
        if row.carrier.is_empty() {
            return Err(CatalogError::Parse(format!("line {line}: empty carrier name")));
        }
        let rates = RateCard { base: row.base, per_kg: row.per_kg, per_km: row.per_km };
        rates
            .validate()
            .map_err(|e| CatalogError::Parse(format!("line {line}: {e}")))?;
        rows.push((row.carrier, rates));
    }

    if registry.config().on_duplicate == DuplicatePolicy::Reject {
        let mut seen = HashSet::new();
        for (carrier, _) in &rows {
            if registry.contains(carrier.as_str()) || !seen.insert(carrier.as_str()) {
                return Err(RegistryError::DuplicateKey {
                    registry: registry.label().to_owned(),
                    key:      carrier.clone(),
                }
                .into());
            }
        }
    }

    // ── Register ──────────────────────────────────────────────────────────
    let count = rows.len();
    for (carrier, rates) in rows {
        let name = carrier.clone();
        registry.register(carrier, move || CarrierStrategy::new(name.clone(), rates))?;
    }
    Ok(count)
}
