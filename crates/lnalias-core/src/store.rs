//! # Alias Store Trait
//!
//! Persistence seam for alias records.
//! Implementations: Supabase (PostgREST), in-memory.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AliasStore (trait)                     │
//! │  ├── create_alias()                                         │
//! │  ├── mark_paid()                                            │
//! │  ├── lookup()                                               │
//! │  └── backend_name()                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                 ┌──────────┴──────────┐
//!                 │                     │
//!       ┌─────────┴─────────┐ ┌─────────┴─────────┐
//!       │SupabaseAliasStore │ │ MemoryAliasStore  │
//!       └───────────────────┘ └───────────────────┘
//! ```

use crate::error::AliasResult;
use crate::record::AliasRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for alias persistence backends.
///
/// Every call is a single round-trip to the backend. Uniqueness of
/// aliases is the backend's responsibility.
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Insert a new, unpaid record.
    ///
    /// # Errors
    /// `AliasConflict` if the alias is taken, `Store` on any other rejection.
    async fn create_alias(&self, alias: &str, lnurl: &str) -> AliasResult<AliasRecord>;

    /// Flip `payment_status` to true.
    ///
    /// Updating a missing alias is not an error.
    async fn mark_paid(&self, alias: &str) -> AliasResult<()>;

    /// Fetch the record for `alias`.
    ///
    /// # Errors
    /// `AliasNotFound` when no row matches, `Store` on any other failure.
    async fn lookup(&self, alias: &str) -> AliasResult<AliasRecord>;

    /// Backend name (for logging and health output).
    fn backend_name(&self) -> &'static str;
}

/// Type alias for a shared alias store (dynamic dispatch)
pub type BoxedAliasStore = Arc<dyn AliasStore>;
