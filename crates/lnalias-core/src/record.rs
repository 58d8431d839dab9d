//! # Alias Records
//!
//! The single persisted entity: an alias mapped to an LNURL behind a
//! payment gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored alias → LNURL mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Lowercased alias (unique key)
    pub alias: String,

    /// Bech32 LNURL exactly as submitted
    pub lnurl: String,

    /// Set once the alias fee has been paid
    #[serde(default)]
    pub payment_status: bool,

    /// Assigned by the store, if it tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AliasRecord {
    /// Create an unpaid record
    pub fn new(alias: impl Into<String>, lnurl: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            lnurl: lnurl.into(),
            payment_status: false,
            created_at: None,
        }
    }

    /// Whether the alias may be resolved to its upstream target
    pub fn is_resolvable(&self) -> bool {
        self.payment_status
    }
}

/// Row shape sent to the store on insert
#[derive(Debug, Clone, Serialize)]
pub struct NewAlias<'a> {
    pub alias: &'a str,
    pub lnurl: &'a str,
}

/// Canonical form of an alias: trimmed and lowercased
pub fn normalize_alias(alias: &str) -> String {
    alias.trim().to_lowercase()
}
