//! # lnalias
//!
//! Lightning address relay: aliases → LNURL-pay, behind a payment gate.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_ANON_KEY=...
//! export ALBY_CREATE_ORDER_AUTH=...
//!
//! # Run the server
//! lnalias
//! ```

use lnalias_api::{routes, state::AppConfig, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if config.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    print_banner();

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    // Initialize application state
    let state = AppState::from_config(config)?;

    info!("Environment: {}", state.config.environment);
    info!("Alias store: {}", state.store.backend_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("⚡ lnalias starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🔗 Register: POST http://{}/create-lnurl", addr);
        info!("🔎 Resolve: GET http://{}/.well-known/lnurlp/{{alias}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  ⚡ lnalias ⚡
  ━━━━━━━━━━━━━━━━━━━━━━━
  Lightning address relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
