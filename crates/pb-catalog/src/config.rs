//! Application-level configuration for [`Catalog`][crate::Catalog].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pb_core::{DuplicatePolicy, PbError, RegistryConfig};

use crate::CatalogResult;

/// Everything [`Catalog::new`][crate::Catalog::new] needs.
///
/// Missing JSON fields fall back to [`Default`].
///
/// ```json
/// {
///   "on_duplicate": "overwrite",
///   "smtp_host": "smtp.example.com:587",
///   "sms_gateway": "sms.example.com",
///   "default_carrier": "DHL",
///   "rates_csv": "rates.csv",
///   "card_limit_cents": 1000000
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Duplicate-key policy applied to every registry the catalog builds.
    pub on_duplicate: DuplicatePolicy,

    /// SMTP server captured by the email notifier factory.
    pub smtp_host: String,

    /// Gateway host captured by the SMS notifier factory.
    pub sms_gateway: String,

    /// Carrier the shipping context starts with.  Must be registered once
    /// the rate table (if any) has been loaded.
    pub default_carrier: String,

    /// Optional CSV rate table loaded on top of the built-in carriers.
    pub rates_csv: Option<PathBuf>,

    /// Largest amount the card processor accepts.
    pub card_limit_cents: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            on_duplicate:     DuplicatePolicy::Overwrite,
            smtp_host:        "localhost:25".to_owned(),
            sms_gateway:      "localhost".to_owned(),
            default_carrier:  crate::shipping::DHL.to_owned(),
            rates_csv:        None,
            card_limit_cents: 1_000_000,
        }
    }
}

impl CatalogConfig {
    /// Parse from JSON text.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PbError::Parse(format!("catalog config: {e}")).into())
    }

    /// Registry settings for the registry named `label`.
    pub fn registry_config(&self, label: &str) -> RegistryConfig {
        RegistryConfig::labeled(label).on_duplicate(self.on_duplicate)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let required = [
            ("smtp_host", &self.smtp_host),
            ("sms_gateway", &self.sms_gateway),
            ("default_carrier", &self.default_carrier),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PbError::Config(format!("{field} must not be empty")).into());
            }
        }
        if self.card_limit_cents == 0 {
            return Err(PbError::Config("card_limit_cents must be positive".into()).into());
        }
        Ok(())
    }
}
