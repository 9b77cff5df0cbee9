use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and whether proposals go through the LLM.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generator = match &state.llm {
        Some(llm) => llm.model().to_string(),
        None => "template".to_string(),
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "proposal-api",
        "generator": generator
    }))
}
