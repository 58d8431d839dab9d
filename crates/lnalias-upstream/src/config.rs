//! # Invoice API Configuration
//!
//! Credentials for the Alby invoice API.

use lnalias_core::AliasError;
use std::env;

/// Default Alby API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.getalby.com";

/// Invoice API configuration
#[derive(Debug, Clone)]
pub struct InvoiceApiConfig {
    /// Bearer token used to create invoices
    pub access_token: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl InvoiceApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ALBY_CREATE_ORDER_AUTH`
    ///
    /// Optional: `ALBY_API_BASE_URL`
    pub fn from_env() -> Result<Self, AliasError> {
        dotenvy::dotenv().ok();

        let access_token = env::var("ALBY_CREATE_ORDER_AUTH").map_err(|_| {
            AliasError::Configuration("ALBY_CREATE_ORDER_AUTH not set".to_string())
        })?;

        if access_token.trim().is_empty() {
            return Err(AliasError::Configuration(
                "ALBY_CREATE_ORDER_AUTH is empty".to_string(),
            ));
        }

        let config = Self::new(access_token);
        Ok(match env::var("ALBY_API_BASE_URL") {
            Ok(url) => config.with_api_base_url(url),
            Err(_) => config,
        })
    }

    /// Create config with an explicit token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Invoice creation endpoint
    pub fn invoices_url(&self) -> String {
        format!("{}/invoices", self.api_base_url)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let config = InvoiceApiConfig::new("alby-token");
        assert_eq!(config.auth_header(), "Bearer alby-token");
    }

    #[test]
    fn test_invoices_url() {
        let config = InvoiceApiConfig::new("alby-token");
        assert_eq!(config.invoices_url(), "https://api.getalby.com/invoices");

        let config = config.with_api_base_url("http://localhost:9999/");
        assert_eq!(config.invoices_url(), "http://localhost:9999/invoices");
    }

    #[test]
    fn test_from_env_blank_token() {
        env::set_var("ALBY_CREATE_ORDER_AUTH", "   ");

        let result = InvoiceApiConfig::from_env();
        assert!(matches!(result, Err(AliasError::Configuration(_))));
    }
}
