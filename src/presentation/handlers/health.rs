use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub predictor_ready: bool,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.sentiment_service;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            backend: service.backend().to_string(),
            predictor_ready: service.is_initialized(),
        }),
    )
}
