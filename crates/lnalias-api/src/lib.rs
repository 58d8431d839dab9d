//! # lnalias-api
//!
//! HTTP API layer for lnalias-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Alias registration and payment-gate endpoints
//! - Lightning address (`.well-known/lnurlp`) resolution
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-lnurl` | Register an alias for an LNURL |
//! | PUT | `/update-payment-status/:alias` | Mark an alias as paid |
//! | GET | `/.well-known/lnurlp/:alias` | LNURL-pay document for a paid alias |
//! | POST | `/create-order` | Create the alias fee invoice |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
