//! Registry configuration.
//!
//! Typically embedded in a larger application config loaded from JSON/TOML by
//! the application crate and passed down to `pb-registry`.

use crate::{PbError, PbResult};

// ── DuplicatePolicy ───────────────────────────────────────────────────────────

/// What `Registry::register` does when the key is already present.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Last write wins.  The entry keeps the position of its first
    /// registration in `keys()`.
    #[default]
    Overwrite,
    /// Registering an existing key is an error and leaves the entry intact.
    Reject,
}

impl DuplicatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicatePolicy::Overwrite => "overwrite",
            DuplicatePolicy::Reject    => "reject",
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RegistryConfig ────────────────────────────────────────────────────────────

/// Per-registry settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Name used in log events and error messages, e.g. `"shipping"`.
    pub label: String,

    /// Behavior on re-registration of an existing key.
    pub on_duplicate: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            label:        "registry".to_owned(),
            on_duplicate: DuplicatePolicy::Overwrite,
        }
    }
}

impl RegistryConfig {
    /// Default settings under a different label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    /// Builder-style policy override.
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    /// Reject configurations that would make log output ambiguous.
    pub fn validate(&self) -> PbResult<()> {
        if self.label.trim().is_empty() {
            return Err(PbError::Config("registry label must not be empty".into()));
        }
        Ok(())
    }
}
