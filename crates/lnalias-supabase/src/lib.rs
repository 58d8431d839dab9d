//! # lnalias-supabase
//!
//! Supabase-backed `AliasStore` for lnalias-rs.
//!
//! Talks to the PostgREST API of a Supabase project. The alias table is
//! expected to look like:
//!
//! ```sql
//! create table lnurls (
//!     id bigint generated by default as identity primary key,
//!     created_at timestamptz not null default now(),
//!     alias text not null unique,
//!     lnurl text not null,
//!     payment_status boolean not null default false
//! );
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lnalias_supabase::SupabaseAliasStore;
//! use lnalias_core::AliasStore;
//!
//! // Reads SUPABASE_URL and SUPABASE_ANON_KEY
//! let store = SupabaseAliasStore::from_env()?;
//!
//! store.create_alias("bob", "lnurl1...").await?;
//! store.mark_paid("bob").await?;
//! let record = store.lookup("bob").await?;
//! ```

pub mod config;
pub mod store;

// Re-exports
pub use config::{SupabaseConfig, DEFAULT_TABLE};
pub use store::SupabaseAliasStore;
