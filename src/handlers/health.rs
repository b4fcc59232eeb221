//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::prediction::RISK_THRESHOLD;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    scaler_loaded: bool,
    gemini_configured: bool,
    threshold: f64,
}

/// GET /health
///
/// Pure read of process state; never triggers an artifact load.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.engine.model_loaded(),
        scaler_loaded: state.engine.scaler_loaded(),
        gemini_configured: state.config.gemini_configured(),
        threshold: RISK_THRESHOLD,
    })
}
