//! # Supabase Configuration
//!
//! Connection settings for the hosted alias table.
//! Secrets are loaded from environment variables.

use lnalias_core::AliasError;
use std::env;

/// Default table holding alias records
pub const DEFAULT_TABLE: &str = "lnurls";

/// Supabase REST configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (https://<project>.supabase.co)
    pub url: String,

    /// Anon or service-role API key
    pub api_key: String,

    /// Table holding alias records
    pub table: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional: `SUPABASE_TABLE` (default `lnurls`)
    pub fn from_env() -> Result<Self, AliasError> {
        dotenvy::dotenv().ok();

        let url = env::var("SUPABASE_URL")
            .map_err(|_| AliasError::Configuration("SUPABASE_URL not set".to_string()))?;

        let api_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| AliasError::Configuration("SUPABASE_ANON_KEY not set".to_string()))?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AliasError::Configuration(
                "SUPABASE_URL must start with http:// or https://".to_string(),
            ));
        }

        let table = env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

        Ok(Self::new(url, api_key).with_table(table))
    }

    /// Create config with explicit values (for testing)
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Builder: use a different table
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// PostgREST endpoint for the alias table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
