//! # Alias Error Types
//!
//! Typed error handling for the lnalias relay.
//! All alias, store and upstream operations return `Result<T, AliasError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum AliasError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Submitted LNURL is not decodable Bech32
    #[error("Invalid LNURL: {0}")]
    InvalidLnurl(String),

    /// Stored LNURL could not be decoded into a URL
    #[error("LNURL decode failed: {0}")]
    Decode(String),

    /// No record exists for the alias
    #[error("Alias not found: {alias}")]
    AliasNotFound { alias: String },

    /// Record exists but the payment gate is still closed
    #[error("Payment incomplete for alias: {alias}")]
    PaymentIncomplete { alias: String },

    /// Store rejected the insert because the alias is taken
    #[error("Alias already exists: {alias}")]
    AliasConflict { alias: String },

    /// Any other persistence-layer failure
    #[error("Store error: {0}")]
    Store(String),

    /// Upstream HTTP failure or non-JSON body
    #[error("Upstream fetch failed: {0}")]
    Fetch(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AliasError {
    /// Returns true if the failure came from the persistence layer
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            AliasError::AliasConflict { .. } | AliasError::Store(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AliasError::Configuration(_) => 500,
            AliasError::InvalidLnurl(_) => 400,
            AliasError::Decode(_) => 500,
            AliasError::AliasNotFound { .. } => 400,
            AliasError::PaymentIncomplete { .. } => 400,
            AliasError::AliasConflict { .. } => 500,
            AliasError::Store(_) => 500,
            AliasError::Fetch(_) => 500,
            AliasError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for relay operations
pub type AliasResult<T> = Result<T, AliasError>;
