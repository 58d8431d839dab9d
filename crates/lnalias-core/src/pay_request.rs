//! # LNURL-pay Documents
//!
//! The upstream LNURL-pay metadata and the reshaped response served from
//! `/.well-known/lnurlp/{alias}`.

use crate::settings::PayRequestDefaults;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata returned by an upstream LNURL-pay host. Every field is optional
/// and kept as raw JSON so it can be passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LnurlPayMetadata {
    #[serde(default)]
    pub tag: Option<Value>,
    #[serde(default)]
    pub comment_allowed: Option<Value>,
    #[serde(default)]
    pub callback: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub min_sendable: Option<Value>,
    #[serde(default)]
    pub max_sendable: Option<Value>,
}

/// null, false, 0 and "" count as unset
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Optional payer field descriptor (LUD-18)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerField {
    pub mandatory: bool,
}

impl PayerField {
    pub const OPTIONAL: PayerField = PayerField { mandatory: false };
}

/// Payer data the relay asks wallets for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerData {
    pub name: PayerField,
    pub email: PayerField,
    pub pubkey: PayerField,
}

impl Default for PayerData {
    fn default() -> Self {
        Self {
            name: PayerField::OPTIONAL,
            email: PayerField::OPTIONAL,
            pubkey: PayerField::OPTIONAL,
        }
    }
}

/// Pay request served to wallets for a paid alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequestResponse {
    pub status: String,
    pub tag: Value,
    pub comment_allowed: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sendable: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sendable: Option<Value>,
    pub payer_data: PayerData,
    pub nostr_pubkey: String,
    pub allows_nostr: bool,
}

impl PayRequestResponse {
    /// Reshape upstream metadata. A falsy `tag` or `commentAllowed` is
    /// replaced by the default, everything else is copied as sent.
    pub fn from_upstream(upstream: LnurlPayMetadata, defaults: &PayRequestDefaults) -> Self {
        let tag = upstream
            .tag
            .filter(|t| !is_falsy(t))
            .unwrap_or_else(|| Value::String(defaults.default_tag.clone()));

        let comment_allowed = upstream
            .comment_allowed
            .filter(|c| !is_falsy(c))
            .unwrap_or_else(|| Value::from(defaults.comment_allowed));

        Self {
            status: "OK".to_string(),
            tag,
            comment_allowed,
            callback: upstream.callback,
            metadata: upstream.metadata,
            min_sendable: upstream.min_sendable,
            max_sendable: upstream.max_sendable,
            payer_data: PayerData::default(),
            nostr_pubkey: defaults.nostr_pubkey.clone(),
            allows_nostr: true,
        }
    }
}
