//! Axum route handlers for the Proposal API.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{extract::State, Json};
use bytes::Bytes;
use futures::FutureExt;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::proposal::email::delivery_status;
use crate::proposal::generator::generate_proposal;
use crate::proposal::request::{FormKind, ProposalForm};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub summary: String,
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/agent
///
/// Cooperation questionnaire (areas + scenarios). Requires `companyName`.
pub async fn handle_cooperation_proposal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProposalResponse>, AppError> {
    respond(&state, &body, FormKind::Cooperation).await
}

/// POST /api/offer
///
/// Module questionnaire (modules, intensity, budget, markets).
/// Requires `companyName`, `contactPerson` and `contactEmail`.
pub async fn handle_module_proposal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProposalResponse>, AppError> {
    respond(&state, &body, FormKind::Modules).await
}

/// Parses and validates the body, then generates the proposal.
/// Validation failures return before any generation attempt. A panic during
/// generation becomes a 500 in the language the form asked for.
async fn respond(
    state: &AppState,
    body: &[u8],
    kind: FormKind,
) -> Result<Json<ProposalResponse>, AppError> {
    let submission_id = Uuid::new_v4();

    let form: ProposalForm =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))?;
    let request = form.validate(kind)?;

    info!(
        "Submission {submission_id}: {:?} form from {:?}, language {:?}",
        kind, request.company_name, request.language_mode
    );

    let letterhead = state.letterhead();
    let proposal = AssertUnwindSafe(generate_proposal(
        state.llm.as_deref(),
        &request,
        &letterhead,
    ))
    .catch_unwind()
    .await
    .map_err(|panic| AppError::Internal {
        message: format!(
            "Submission {submission_id}: generation panicked: {}",
            panic_message(panic.as_ref())
        ),
        language: request.language_mode,
    })?;
    let email = delivery_status(&request);

    info!(
        "Submission {submission_id}: proposal ready from {} ({} chars)",
        proposal.origin(),
        proposal.text().len()
    );

    Ok(Json(ProposalResponse {
        summary: proposal.into_text(),
        email_sent: email.sent,
        email_message: email.message,
    }))
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}
