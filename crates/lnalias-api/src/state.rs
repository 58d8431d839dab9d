//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the alias store, the upstream client and service settings, all
//! built once at startup and handed to every handler.

use lnalias_core::{BoxedAliasStore, MemoryAliasStore, ServiceSettings};
use lnalias_supabase::{SupabaseAliasStore, SupabaseConfig};
use lnalias_upstream::{InvoiceApiConfig, UpstreamClient};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Alias store backend (supabase, memory)
    pub store_backend: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3002),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            store_backend: std::env::var("STORE_BACKEND").unwrap_or_else(|_| "supabase".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Alias persistence
    pub store: BoxedAliasStore,
    /// LNURL hosts and invoice API
    pub upstream: UpstreamClient,
    /// Protocol constants and invoice defaults
    pub settings: ServiceSettings,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Build state from the environment
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env())
    }

    /// Build state for an already loaded config
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let settings = load_service_settings()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        let store: BoxedAliasStore = match config.store_backend.as_str() {
            "supabase" => {
                let supabase = SupabaseConfig::from_env()
                    .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase: {}", e))?;
                Arc::new(SupabaseAliasStore::with_client(supabase, client.clone()))
            }
            "memory" => {
                tracing::warn!("Using in-memory alias store, records are lost on restart");
                Arc::new(MemoryAliasStore::new())
            }
            other => anyhow::bail!("Unknown STORE_BACKEND: {}", other),
        };

        let invoice_api = InvoiceApiConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize invoice API: {}", e))?;
        let upstream = UpstreamClient::with_client(invoice_api, client);

        Ok(Self::with_parts(store, upstream, settings, config))
    }

    /// Assemble state from explicit parts
    pub fn with_parts(
        store: BoxedAliasStore,
        upstream: UpstreamClient,
        settings: ServiceSettings,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            upstream,
            settings,
            config,
        }
    }
}

/// Load service settings from config file
fn load_service_settings() -> anyhow::Result<ServiceSettings> {
    let config_paths = [
        "config/lnalias.toml",
        "../config/lnalias.toml",
        "../../config/lnalias.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let settings = ServiceSettings::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded service settings from {}", path);
            return Ok(settings);
        }
    }

    tracing::warn!("No service settings found, using defaults");
    Ok(ServiceSettings::default())
}
