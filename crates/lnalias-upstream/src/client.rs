//! # Upstream Client
//!
//! Outbound HTTP calls: LNURL-pay metadata from arbitrary hosts and
//! invoice creation on the Alby API. No retries; failures surface as
//! `AliasError::Fetch`.

use crate::config::InvoiceApiConfig;
use lnalias_core::{AliasError, AliasResult, LnurlPayMetadata};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument};

/// Body sent to the invoice API
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceRequest<'a> {
    /// Amount in satoshis
    pub amount: u64,
    pub description: &'a str,
}

/// Long-lived handle for all outbound calls
#[derive(Clone)]
pub struct UpstreamClient {
    invoice_api: InvoiceApiConfig,
    client: Client,
}

impl UpstreamClient {
    /// Create a client with its own connection pool
    pub fn new(invoice_api: InvoiceApiConfig) -> AliasResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AliasError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(invoice_api, client))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(invoice_api: InvoiceApiConfig, client: Client) -> Self {
        Self { invoice_api, client }
    }

    /// Create from environment variables
    pub fn from_env() -> AliasResult<Self> {
        let config = InvoiceApiConfig::from_env()?;
        Self::new(config)
    }

    /// GET the LNURL-pay document behind a decoded LNURL
    #[instrument(skip(self))]
    pub async fn fetch_pay_metadata(&self, url: &str) -> AliasResult<LnurlPayMetadata> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AliasError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("LNURL host returned status={}", status);
            return Err(AliasError::Fetch(format!(
                "LNURL host returned HTTP {}",
                status
            )));
        }

        let metadata = response
            .json::<LnurlPayMetadata>()
            .await
            .map_err(|e| AliasError::Fetch(format!("Invalid LNURL-pay response: {}", e)))?;

        debug!(
            "Fetched LNURL-pay metadata: tag={:?}, callback={:?}",
            metadata.tag, metadata.callback
        );

        Ok(metadata)
    }

    /// POST a new invoice to the invoice API and return its JSON object
    #[instrument(skip(self, description))]
    pub async fn create_invoice(
        &self,
        amount_sats: u64,
        description: &str,
    ) -> AliasResult<Map<String, Value>> {
        let body = InvoiceRequest {
            amount: amount_sats,
            description,
        };

        let response = self
            .client
            .post(self.invoice_api.invoices_url())
            .header("Authorization", self.invoice_api.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| AliasError::Fetch(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AliasError::Fetch(e.to_string()))?;

        if !status.is_success() {
            error!("Invoice API error: status={}, body={}", status, text);
            return Err(AliasError::Fetch(format!("HTTP {}: {}", status, text)));
        }

        let invoice: Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| AliasError::Fetch(format!("Invalid invoice response: {}", e)))?;

        info!(
            "Created invoice: payment_hash={:?}",
            invoice.get("payment_hash").and_then(|v| v.as_str())
        );

        Ok(invoice)
    }
}
