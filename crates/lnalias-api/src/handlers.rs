//! # Request Handlers
//!
//! Axum request handlers for the alias relay.
//! Every failure is answered with a `{status: "ERROR", message}` envelope.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lnalias_core::{lnurl, normalize_alias, AliasError, AliasRecord, PayRequestResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create alias request
#[derive(Debug, Deserialize)]
pub struct CreateLnurlRequest {
    /// Requested alias (case-insensitive)
    pub alias: String,
    /// Bech32 LNURL-pay string
    pub lnurl: String,
}

/// Create alias response
#[derive(Debug, Serialize)]
pub struct CreateLnurlResponse {
    pub status: String,
    pub message: String,
    pub data: AliasRecord,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "ERROR".to_string(),
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, message: &str) -> HandlerError {
    (status, Json(ErrorResponse::new(message)))
}

/// Map an error onto its status code, echoing the underlying message
fn alias_error_to_response(err: &AliasError, message: &str) -> HandlerError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(message).with_error(err.to_string())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "service": "lnalias",
        "version": env!("CARGO_PKG_VERSION"),
        "store": state.store.backend_name()
    }))
}

/// Register an alias for an LNURL. The alias starts unpaid.
#[instrument(skip(state, payload))]
pub async fn create_lnurl(
    State(state): State<AppState>,
    payload: Result<Json<CreateLnurlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLnurlResponse>), HandlerError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected create-lnurl body: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid request body").with_error(e.body_text())),
        )
    })?;

    let alias = normalize_alias(&request.alias);
    if alias.is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "Invalid alias"));
    }

    if !lnurl::is_valid(&request.lnurl) {
        warn!("Rejected invalid LNURL for alias={}", alias);
        return Err(reject(StatusCode::BAD_REQUEST, "Invalid LNURL"));
    }

    let record = state
        .store
        .create_alias(&alias, &request.lnurl)
        .await
        .map_err(|e| {
            error!("Failed to store alias {}: {}", alias, e);
            alias_error_to_response(&e, "Error saving to database")
        })?;

    info!("Created alias: {}", record.alias);

    Ok((
        StatusCode::CREATED,
        Json(CreateLnurlResponse {
            status: "OK".to_string(),
            message: "LNURL created successfully".to_string(),
            data: record,
        }),
    ))
}

/// Open the payment gate for an alias
#[instrument(skip(state))]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<StatusCode, HandlerError> {
    let alias = normalize_alias(&alias);

    state.store.mark_paid(&alias).await.map_err(|e| {
        error!("Failed to mark alias {} as paid: {}", alias, e);
        alias_error_to_response(&e, "Error! while processing payment")
    })?;

    info!("Marked alias as paid: {}", alias);
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a paid alias to its reshaped LNURL-pay document
#[instrument(skip(state))]
pub async fn resolve_alias(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<PayRequestResponse>, HandlerError> {
    let alias = normalize_alias(&alias);

    let record = state.store.lookup(&alias).await.map_err(|e| match e {
        AliasError::AliasNotFound { .. } => reject(StatusCode::BAD_REQUEST, "Alias not found"),
        other => {
            error!("Failed to look up alias {}: {}", alias, other);
            alias_error_to_response(&other, "Error reading from database")
        }
    })?;

    if !record.is_resolvable() {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "You haven't completed your payment",
        ));
    }

    let url = lnurl::decode(&record.lnurl).map_err(|e| {
        error!("Stored LNURL for alias {} does not decode: {}", alias, e);
        alias_error_to_response(&e, "Error fetching LNURL data")
    })?;

    let metadata = state.upstream.fetch_pay_metadata(&url).await.map_err(|e| {
        error!("Failed to fetch LNURL data for alias {}: {}", alias, e);
        alias_error_to_response(&e, "Error fetching LNURL data")
    })?;

    Ok(Json(PayRequestResponse::from_upstream(
        metadata,
        &state.settings.pay_request,
    )))
}

/// Create an invoice for the alias fee
#[instrument(skip(state))]
pub async fn create_order(State(state): State<AppState>) -> Result<Json<Value>, HandlerError> {
    let invoice_settings = &state.settings.invoice;

    let mut invoice = state
        .upstream
        .create_invoice(invoice_settings.amount_sats, &invoice_settings.description)
        .await
        .map_err(|e| {
            error!("Failed to create invoice: {}", e);
            reject(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
        })?;

    invoice.insert("status".to_string(), Value::String("OK".to_string()));
    Ok(Json(Value::Object(invoice)))
}
