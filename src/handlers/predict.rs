//! FWI prediction handler

use axum::{extract::State, Json};
use serde_json::Value;

use crate::models::features::FeatureVector;
use crate::models::prediction::PredictResponse;
use crate::{AppError, AppResult, AppState};

/// POST /predict
///
/// Accepts the nine feature fields as numbers or numeric strings. Any
/// failure (bad input, artifacts unavailable) comes back as a
/// `{"success": false, "error": ...}` payload.
pub async fn predict(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> AppResult<Json<PredictResponse>> {
    let Json(body) =
        body.ok_or_else(|| AppError::InvalidInput("Invalid JSON body".to_string()))?;

    let features = FeatureVector::from_json(&body)?;
    let score = state.engine.predict(&features)?;

    tracing::debug!("Predicted FWI score {:.2}", score);

    Ok(Json(PredictResponse::from_score(score)))
}
