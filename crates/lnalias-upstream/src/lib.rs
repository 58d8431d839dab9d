//! # lnalias-upstream
//!
//! Outbound HTTP for lnalias-rs:
//!
//! 1. **LNURL-pay metadata** - `GET` against the URL a stored LNURL decodes to
//! 2. **Invoice creation** - `POST /invoices` on the Alby API with a bearer token
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lnalias_upstream::UpstreamClient;
//!
//! // Reads ALBY_CREATE_ORDER_AUTH
//! let upstream = UpstreamClient::from_env()?;
//!
//! let url = lnalias_core::lnurl::decode(&record.lnurl)?;
//! let metadata = upstream.fetch_pay_metadata(&url).await?;
//!
//! let invoice = upstream.create_invoice(1, "Service Payment").await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::{InvoiceRequest, UpstreamClient};
pub use config::{InvoiceApiConfig, DEFAULT_API_BASE_URL};
