//! In-memory alias store.
//!
//! Thread-safe storage for local development and tests. Mirrors the
//! semantics of the hosted store: unique aliases, one-way payment flag.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};

use crate::error::{AliasError, AliasResult};
use crate::record::AliasRecord;
use crate::store::AliasStore;

/// In-memory alias store keyed by alias.
#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    records: DashMap<String, AliasRecord>,
}

impl MemoryAliasStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored aliases.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    #[instrument(skip(self, lnurl))]
    async fn create_alias(&self, alias: &str, lnurl: &str) -> AliasResult<AliasRecord> {
        match self.records.entry(alias.to_string()) {
            Entry::Occupied(_) => Err(AliasError::AliasConflict {
                alias: alias.to_string(),
            }),
            Entry::Vacant(slot) => {
                let mut record = AliasRecord::new(alias, lnurl);
                record.created_at = Some(Utc::now());
                slot.insert(record.clone());
                debug!("Stored alias in memory");
                Ok(record)
            }
        }
    }

    #[instrument(skip(self))]
    async fn mark_paid(&self, alias: &str) -> AliasResult<()> {
        if let Some(mut record) = self.records.get_mut(alias) {
            record.payment_status = true;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn lookup(&self, alias: &str) -> AliasResult<AliasRecord> {
        self.records
            .get(alias)
            .map(|r| r.value().clone())
            .ok_or_else(|| AliasError::AliasNotFound {
                alias: alias.to_string(),
            })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = MemoryAliasStore::new();
        let created = store.create_alias("bob", "lnurl1abc").await.unwrap();
        assert!(!created.payment_status);
        assert!(created.created_at.is_some());

        let found = store.lookup("bob").await.unwrap();
        assert_eq!(found, created);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_alias_conflicts() {
        let store = MemoryAliasStore::new();
        store.create_alias("bob", "lnurl1abc").await.unwrap();

        let err = store.create_alias("bob", "lnurl1def").await.unwrap_err();
        assert!(matches!(err, AliasError::AliasConflict { .. }));
        assert_eq!(store.lookup("bob").await.unwrap().lnurl, "lnurl1abc");
    }

    #[tokio::test]
    async fn test_mark_paid_is_one_way() {
        let store = MemoryAliasStore::new();
        store.create_alias("bob", "lnurl1abc").await.unwrap();

        store.mark_paid("bob").await.unwrap();
        store.mark_paid("bob").await.unwrap();
        assert!(store.lookup("bob").await.unwrap().payment_status);
    }

    #[tokio::test]
    async fn test_mark_paid_missing_alias_is_ok() {
        let store = MemoryAliasStore::new();
        assert!(store.mark_paid("ghost").await.is_ok());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_missing_alias() {
        let store = MemoryAliasStore::new();
        let err = store.lookup("ghost").await.unwrap_err();
        assert!(matches!(err, AliasError::AliasNotFound { alias } if alias == "ghost"));
    }
}
