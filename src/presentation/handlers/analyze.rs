use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::SentimentResult;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub backend: String,
    pub results: Vec<SentimentResult>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %preview_text(&request.text), "Processing analyze request");

    match state.sentiment_service.analyze(&request.text).await {
        Ok(results) => {
            tracing::info!(lines = results.len(), "Analysis successful");
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    backend: state.sentiment_service.backend().to_string(),
                    results,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Analysis failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
