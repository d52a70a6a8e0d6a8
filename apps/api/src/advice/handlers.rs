//! Axum route handlers for the Advice API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advice::models::{AdviceRequest, AgeGroup};
use crate::advice::references::ReferenceLibrary;
use crate::advice::service::{generate_advice, AdviceReport};
use crate::errors::AppError;
use crate::llm_client::ModelId;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AdviceBody {
    pub age_group: String,
    #[serde(default)]
    pub concern: String,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub age_groups: Vec<AgeGroup>,
    pub models: Vec<ModelId>,
    pub default_model: ModelId,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/advice
///
/// Validates the submission, then runs the advice pipeline. An empty concern
/// is rejected here, before any prompt is built or completion call made.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(body): Json<AdviceBody>,
) -> Result<Json<AdviceReport>, AppError> {
    let request = AdviceRequest::parse(&body.age_group, &body.concern)?;

    let model = match body.model.as_deref() {
        Some(raw) => raw
            .parse::<ModelId>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => state.config.default_model,
    };

    let report = generate_advice(state.llm.as_ref(), &state.library, request, model).await;

    Ok(Json(report))
}

/// GET /api/v1/advice/options
///
/// Selector contents: age groups in display order and the supported models.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        age_groups: AgeGroup::ALL.to_vec(),
        models: ModelId::ALL.to_vec(),
        default_model: state.config.default_model,
    })
}

/// GET /api/v1/references
///
/// The bundled spiritual passages and the full quotation set.
pub async fn handle_references(State(state): State<AppState>) -> Json<ReferenceLibrary> {
    Json(state.library.as_ref().clone())
}
