//! Unit tests for pb-core.

use crate::{DuplicatePolicy, PbError, RegistryConfig, RegistryKey};

crate::closed_key! {
    /// Test-only key.
    enum Channel {
        Email => "email",
        Sms   => "SMS",
    }
}

fn assert_key<K: RegistryKey>(_: &K) {}

// ── Keys ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn strings_and_closed_enums_are_keys() {
        assert_key(&String::from("DHL"));
        assert_key(&"UPS");
        assert_key(&Channel::Email);
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(Channel::ALL, &[Channel::Email, Channel::Sms]);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Channel::Sms.to_string(), "SMS");
        assert_eq!(Channel::Email.as_str(), "email");
    }

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!("SMS".parse::<Channel>().unwrap(), Channel::Sms);
        assert!(matches!("sms".parse::<Channel>(), Err(PbError::Parse(_))));
        assert!(" email".parse::<Channel>().is_err());
    }

    #[test]
    fn parse_error_names_type_and_input() {
        let err = "fax".parse::<Channel>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Channel"), "{msg}");
        assert!(msg.contains("\"fax\""), "{msg}");
    }
}

// ── RegistryConfig ────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_overwrites() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::Overwrite);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn labeled_keeps_default_policy() {
        let cfg = RegistryConfig::labeled("shipping");
        assert_eq!(cfg.label, "shipping");
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn policy_override() {
        let cfg = RegistryConfig::labeled("x").on_duplicate(DuplicatePolicy::Reject);
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::Reject);
        assert_eq!(cfg.on_duplicate.to_string(), "reject");
    }

    #[test]
    fn blank_label_rejected() {
        let cfg = RegistryConfig::labeled("   ");
        assert!(matches!(cfg.validate(), Err(PbError::Config(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let cfg: RegistryConfig = serde_json::from_str(r#"{ "on_duplicate": "reject" }"#).unwrap();
        assert_eq!(cfg.label, "registry");
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::Reject);
    }
}
