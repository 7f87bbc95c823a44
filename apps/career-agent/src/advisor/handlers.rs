//! Axum route handlers for the career advisor API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::{enhance_text, predict_role_from};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub improved: String,
}

/// POST /api/v1/career/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let role = predict_role_from(state.advisor.as_ref(), &request.skills).await?;
    Ok(Json(PredictResponse { role }))
}

/// POST /api/v1/resume/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let improved = enhance_text(state.advisor.as_ref(), &request.text).await?;
    Ok(Json(RefineResponse { improved }))
}
