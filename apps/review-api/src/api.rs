//! API handlers for the review server
//!
//! Routes map one-to-one onto the document session operations: text upsert,
//! clause extraction, compliance runs, and result snapshots.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use shared_types::{new_id, Clause, ReviewSnapshot};

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on uploaded text. Requests beyond this are rejected before
/// touching the session.
const MAX_TEXT_BYTES: usize = 10 * 1024 * 1024;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "review-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentResponse {
    pub doc_id: String,
}

/// Handler: POST /api/documents
///
/// Document identity generation is owned by this boundary. The session
/// itself is created lazily on first use of the id.
pub async fn handle_create_document() -> Json<CreateDocumentResponse> {
    let doc_id = new_id();
    info!("Created document id {}", doc_id);
    Json(CreateDocumentResponse { doc_id })
}

/// Text upload body. A missing or null `text` deliberately coerces to the
/// empty string rather than being rejected.
#[derive(Deserialize, Default)]
pub struct UpsertTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct UpsertTextResponse {
    pub ok: bool,
}

/// Handler: POST /api/documents/:id/text
pub async fn handle_upsert_text(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    body: Option<Json<UpsertTextRequest>>,
) -> Result<Json<UpsertTextResponse>, ApiError> {
    validate_doc_id(&doc_id)?;

    let text = body
        .and_then(|Json(req)| req.text)
        .unwrap_or_default();

    if text.len() > MAX_TEXT_BYTES {
        return Err(ApiError::InvalidRequest(format!(
            "Text exceeds maximum size of {} bytes",
            MAX_TEXT_BYTES
        )));
    }

    debug!("Storing {} bytes of text for {}", text.len(), doc_id);

    let session = state.session(&doc_id).await;
    session.lock().await.upsert_text(text);

    Ok(Json(UpsertTextResponse { ok: true }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractClausesResponse {
    pub clauses_count: usize,
}

/// Handler: POST /api/documents/:id/extract
pub async fn handle_extract_clauses(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
) -> Result<Json<ExtractClausesResponse>, ApiError> {
    validate_doc_id(&doc_id)?;

    let session = state.session(&doc_id).await;
    let count = session.lock().await.extract_clauses();

    info!("Extracted {} clauses for {}", count, doc_id);

    Ok(Json(ExtractClausesResponse {
        clauses_count: count,
    }))
}

/// Handler: GET /api/documents/:id/clauses
pub async fn handle_get_clauses(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
) -> Result<Json<Vec<Clause>>, ApiError> {
    validate_doc_id(&doc_id)?;

    let session = state.session(&doc_id).await;
    let clauses = session.lock().await.clauses().to_vec();

    Ok(Json(clauses))
}

/// Compliance run body. A missing or non-array clause list coerces to the
/// empty list; the run still completes with zero findings.
#[derive(Deserialize, Default)]
pub struct RunComplianceRequest {
    #[serde(default)]
    pub clauses: Option<Vec<Clause>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunComplianceResponse {
    pub findings_count: usize,
    pub risk_score: u32,
}

/// Handler: POST /api/documents/:id/compliance
///
/// Evaluates an explicit clause list against the rule table, replacing the
/// document's finding set.
pub async fn handle_run_compliance(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
    body: Option<Json<RunComplianceRequest>>,
) -> Result<Json<RunComplianceResponse>, ApiError> {
    validate_doc_id(&doc_id)?;

    let clauses = body
        .and_then(|Json(req)| req.clauses)
        .unwrap_or_default();

    let session = state.session(&doc_id).await;
    let outcome = session.lock().await.run_compliance(&clauses);

    info!(
        "Compliance run for {}: {} findings, risk {}",
        doc_id, outcome.findings_count, outcome.risk_score
    );

    Ok(Json(RunComplianceResponse {
        findings_count: outcome.findings_count,
        risk_score: outcome.risk_score,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReviewResponse {
    pub ok: bool,
    pub findings_count: usize,
    pub risk_score: u32,
}

/// Handler: POST /api/documents/:id/run
///
/// Orchestrates the pipeline in sequence: extract clauses from the stored
/// text, then evaluate them. The session lock is held for the whole run so
/// both replace steps commit atomically.
pub async fn handle_run_review(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
) -> Result<Json<RunReviewResponse>, ApiError> {
    validate_doc_id(&doc_id)?;

    let session = state.session(&doc_id).await;
    let mut session = session.lock().await;

    let clause_count = session.extract_clauses();
    let clauses = session.clauses().to_vec();
    let outcome = session.run_compliance(&clauses);

    info!(
        "Review run for {}: {} clauses, {} findings, risk {}",
        doc_id, clause_count, outcome.findings_count, outcome.risk_score
    );

    Ok(Json(RunReviewResponse {
        ok: true,
        findings_count: outcome.findings_count,
        risk_score: outcome.risk_score,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub doc_id: String,
    #[serde(flatten)]
    pub snapshot: ReviewSnapshot,
}

/// Handler: GET /api/documents/:id/results
pub async fn handle_get_results(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
) -> Result<Json<ResultsResponse>, ApiError> {
    validate_doc_id(&doc_id)?;

    let session = state.session(&doc_id).await;
    let snapshot = session.lock().await.results();

    debug!("Results for {}: status {}", doc_id, snapshot.status);

    Ok(Json(ResultsResponse { doc_id, snapshot }))
}

/// Document ids travel in URL paths; constrain them to the shape this
/// boundary itself generates.
fn validate_doc_id(doc_id: &str) -> Result<(), ApiError> {
    let valid = !doc_id.is_empty()
        && doc_id.len() <= 64
        && doc_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidDocumentId(doc_id.to_string()))
    }
}
