//! # Service Settings
//!
//! Protocol constants and invoice defaults, overridable from a TOML file.
//!
//! ```toml
//! [pay_request]
//! default_tag = "payRequest"
//! comment_allowed = 255
//! nostr_pubkey = "79f00d3f..."
//!
//! [invoice]
//! amount_sats = 1
//! description = "Service Payment"
//! ```

use crate::error::{AliasError, AliasResult};
use serde::{Deserialize, Serialize};

/// Nostr pubkey advertised for zaps on every resolved alias
pub const DEFAULT_NOSTR_PUBKEY: &str =
    "79f00d3f5a19ec806189fcab03c1be4ff81d18ee4f653c88fac41fe03570f432";

/// Comment length advertised when the upstream host does not set one
pub const DEFAULT_COMMENT_ALLOWED: u64 = 255;

/// LNURL-pay tag
pub const PAY_REQUEST_TAG: &str = "payRequest";

/// Fixed fields merged into every resolved pay request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayRequestDefaults {
    pub default_tag: String,
    pub comment_allowed: u64,
    pub nostr_pubkey: String,
}

impl Default for PayRequestDefaults {
    fn default() -> Self {
        Self {
            default_tag: PAY_REQUEST_TAG.to_string(),
            comment_allowed: DEFAULT_COMMENT_ALLOWED,
            nostr_pubkey: DEFAULT_NOSTR_PUBKEY.to_string(),
        }
    }
}

/// Invoice requested by `/create-order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDefaults {
    /// Amount in satoshis
    pub amount_sats: u64,
    pub description: String,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            amount_sats: 1,
            description: "Service Payment".to_string(),
        }
    }
}

/// Service-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub pay_request: PayRequestDefaults,
    pub invoice: InvoiceDefaults,
}

impl ServiceSettings {
    /// Parse settings from TOML; missing keys keep their defaults
    pub fn from_toml(content: &str) -> AliasResult<Self> {
        toml::from_str(content).map_err(|e| AliasError::Configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServiceSettings::default();
        assert_eq!(settings.pay_request.default_tag, "payRequest");
        assert_eq!(settings.pay_request.comment_allowed, 255);
        assert_eq!(settings.pay_request.nostr_pubkey, DEFAULT_NOSTR_PUBKEY);
        assert_eq!(settings.invoice.amount_sats, 1);
        assert_eq!(settings.invoice.description, "Service Payment");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = ServiceSettings::from_toml(
            r#"
            [invoice]
            amount_sats = 21
            "#,
        )
        .unwrap();
        assert_eq!(settings.invoice.amount_sats, 21);
        assert_eq!(settings.invoice.description, "Service Payment");
        assert_eq!(settings.pay_request, PayRequestDefaults::default());
    }

    #[test]
    fn test_unknown_pay_request_keys_ignored() {
        let settings = ServiceSettings::from_toml(
            r#"
            [pay_request]
            comment_allowed = 100
            allows_nostr = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.pay_request.comment_allowed, 100);
        assert_eq!(settings.pay_request.nostr_pubkey, DEFAULT_NOSTR_PUBKEY);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServiceSettings::from_toml("[invoice\namount_sats = ").unwrap_err();
        assert!(matches!(err, AliasError::Configuration(_)));
    }
}
