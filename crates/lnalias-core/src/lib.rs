//! # lnalias-core
//!
//! Core types and traits for the lnalias LNURL-pay relay.
//!
//! This crate provides:
//! - `lnurl` Bech32 validation and decoding of LNURL strings
//! - `AliasRecord` and alias normalization
//! - `AliasStore` trait for persistence backends, plus `MemoryAliasStore`
//! - `PayRequestResponse` reshaping of upstream LNURL-pay metadata
//! - `ServiceSettings` protocol constants and invoice defaults
//! - `AliasError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use lnalias_core::{lnurl, normalize_alias, AliasStore, PayRequestResponse};
//!
//! let alias = normalize_alias("Bob");
//! if !lnurl::is_valid(&submitted) {
//!     return Err(AliasError::InvalidLnurl(submitted));
//! }
//! store.create_alias(&alias, &submitted).await?;
//!
//! // Later, once paid
//! let record = store.lookup(&alias).await?;
//! let url = lnurl::decode(&record.lnurl)?;
//! ```

pub mod error;
pub mod lnurl;
pub mod memory;
pub mod pay_request;
pub mod record;
pub mod settings;
pub mod store;

// Re-exports for convenience
pub use error::{AliasError, AliasResult};
pub use memory::MemoryAliasStore;
pub use pay_request::{LnurlPayMetadata, PayRequestResponse, PayerData, PayerField};
pub use record::{normalize_alias, AliasRecord, NewAlias};
pub use settings::{
    InvoiceDefaults, PayRequestDefaults, ServiceSettings, DEFAULT_COMMENT_ALLOWED,
    DEFAULT_NOSTR_PUBKEY, PAY_REQUEST_TAG,
};
pub use store::{AliasStore, BoxedAliasStore};
