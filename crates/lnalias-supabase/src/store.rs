//! # Supabase Alias Store
//!
//! `AliasStore` over the Supabase PostgREST API.
//! Each operation is one HTTP round-trip against the alias table.

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use lnalias_core::{AliasError, AliasRecord, AliasResult, AliasStore, NewAlias};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Alias store backed by a Supabase table
pub struct SupabaseAliasStore {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseAliasStore {
    /// Create a store with its own HTTP client
    pub fn new(config: SupabaseConfig) -> AliasResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AliasError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(config, client))
    }

    /// Create a store sharing an existing HTTP client
    pub fn with_client(config: SupabaseConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> AliasResult<Self> {
        let config = SupabaseConfig::from_env()?;
        Self::new(config)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.config.table_url())
            .header("apikey", &self.config.api_key)
            .header("Authorization", self.config.auth_header())
    }

    async fn send(&self, request: RequestBuilder) -> AliasResult<(StatusCode, String)> {
        let response = request
            .send()
            .await
            .map_err(|e| AliasError::Store(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AliasError::Store(e.to_string()))?;

        Ok((status, body))
    }
}

#[async_trait]
impl AliasStore for SupabaseAliasStore {
    #[instrument(skip(self, lnurl))]
    async fn create_alias(&self, alias: &str, lnurl: &str) -> AliasResult<AliasRecord> {
        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&NewAlias { alias, lnurl });

        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            error!("Supabase insert failed: status={}, body={}", status, body);
            return Err(rejection(alias, status, &body));
        }

        let rows: Vec<AliasRecord> = serde_json::from_str(&body).map_err(|e| {
            AliasError::Serialization(format!("Failed to parse Supabase response: {}", e))
        })?;

        let record = rows
            .into_iter()
            .next()
            .ok_or_else(|| AliasError::Store("Insert returned no rows".to_string()))?;

        info!("Stored alias in Supabase");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn mark_paid(&self, alias: &str) -> AliasResult<()> {
        let request = self
            .request(Method::PATCH)
            .query(&[("alias", format!("eq.{}", alias))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "payment_status": true }));

        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            error!("Supabase update failed: status={}, body={}", status, body);
            return Err(rejection(alias, status, &body));
        }

        debug!("Supabase update accepted: status={}", status);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn lookup(&self, alias: &str) -> AliasResult<AliasRecord> {
        let request = self.request(Method::GET).query(&[
            ("alias", format!("eq.{}", alias)),
            ("select", "*".to_string()),
            ("limit", "1".to_string()),
        ]);

        let (status, body) = self.send(request).await?;

        if !status.is_success() {
            error!("Supabase select failed: status={}, body={}", status, body);
            return Err(rejection(alias, status, &body));
        }

        let rows: Vec<AliasRecord> = serde_json::from_str(&body).map_err(|e| {
            AliasError::Serialization(format!("Failed to parse Supabase response: {}", e))
        })?;

        rows.into_iter()
            .next()
            .ok_or_else(|| AliasError::AliasNotFound {
                alias: alias.to_string(),
            })
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}

// =============================================================================
// PostgREST Error Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

fn rejection(alias: &str, status: StatusCode, body: &str) -> AliasError {
    let parsed = serde_json::from_str::<PostgrestError>(body).ok();

    let unique_violation = parsed
        .as_ref()
        .and_then(|e| e.code.as_deref())
        .is_some_and(|code| code == UNIQUE_VIOLATION);

    if status == StatusCode::CONFLICT || unique_violation {
        return AliasError::AliasConflict {
            alias: alias.to_string(),
        };
    }

    match parsed {
        Some(e) => AliasError::Store(e.message),
        None => AliasError::Store(format!("HTTP {}: {}", status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> SupabaseAliasStore {
        SupabaseAliasStore::new(SupabaseConfig::new(server.uri(), "anon-key")).unwrap()
    }

    #[tokio::test]
    async fn test_create_alias() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/lnurls"))
            .and(header("apikey", "anon-key"))
            .and(header("Authorization", "Bearer anon-key"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!({ "alias": "bob", "lnurl": "lnurl1abc" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
                "alias": "bob",
                "lnurl": "lnurl1abc",
                "payment_status": false,
                "created_at": "2024-03-01T12:00:00+00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let record = store_for(&server).create_alias("bob", "lnurl1abc").await.unwrap();
        assert_eq!(record.alias, "bob");
        assert!(!record.payment_status);
        assert!(record.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_alias_conflict() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": "23505",
                "message": "duplicate key value violates unique constraint \"lnurls_alias_key\""
            })))
            .mount(&server)
            .await;

        let err = store_for(&server)
            .create_alias("bob", "lnurl1abc")
            .await
            .unwrap_err();
        assert!(matches!(err, AliasError::AliasConflict { alias } if alias == "bob"));
    }

    #[tokio::test]
    async fn test_create_alias_store_failure_echoes_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let err = store_for(&server)
            .create_alias("bob", "lnurl1abc")
            .await
            .unwrap_err();
        assert!(matches!(err, AliasError::Store(ref m) if m == "Invalid API key"));
    }

    #[tokio::test]
    async fn test_mark_paid() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/lnurls"))
            .and(query_param("alias", "eq.bob"))
            .and(body_json(json!({ "payment_status": true })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server).mark_paid("bob").await.unwrap();
    }

    #[tokio::test]
    async fn test_mark_paid_failure() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = store_for(&server).mark_paid("bob").await.unwrap_err();
        assert!(err.is_store_error());
    }

    #[tokio::test]
    async fn test_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/lnurls"))
            .and(query_param("alias", "eq.bob"))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "alias": "bob",
                "lnurl": "lnurl1abc",
                "payment_status": true
            }])))
            .mount(&server)
            .await;

        let record = store_for(&server).lookup("bob").await.unwrap();
        assert!(record.payment_status);
        assert_eq!(record.lnurl, "lnurl1abc");
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = store_for(&server).lookup("ghost").await.unwrap_err();
        assert!(matches!(err, AliasError::AliasNotFound { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let store = SupabaseAliasStore::new(SupabaseConfig::new("http://127.0.0.1:1", "anon-key"))
            .unwrap();
        let err = store.lookup("bob").await.unwrap_err();
        assert!(matches!(err, AliasError::Store(_)));
    }
}
