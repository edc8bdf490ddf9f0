use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;
use crate::presentation::views::IndexPage;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";
pub const NO_LINES_MESSAGE: &str = "No valid lines to analyze. Try typing a sentence.";

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index_handler(State(state): State<AppState>) -> Response {
    let page = IndexPage::new(state.sentiment_service.backend().to_string());
    render(&state, &page)
}

#[tracing::instrument(skip(state, form))]
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let text = form.text.trim();
    tracing::debug!(text = %preview_text(text), "Processing form submission");

    let mut page = IndexPage {
        text: text.to_string(),
        ..Default::default()
    };

    if text.is_empty() {
        page.error = Some(EMPTY_INPUT_MESSAGE.to_string());
    } else {
        match state.sentiment_service.analyze(text).await {
            Ok(results) if results.is_empty() => {
                page.error = Some(NO_LINES_MESSAGE.to_string());
            }
            Ok(results) => {
                tracing::info!(lines = results.len(), "Analysis successful");
                page.results = Some(results);
            }
            Err(e) => {
                tracing::error!(error = %e, "Analysis failed");
                page.error = Some(format!(
                    "Something went wrong while analyzing sentiment: {}",
                    e
                ));
            }
        }
    }

    page.backend = state.sentiment_service.backend().to_string();
    render(&state, &page)
}

fn render(state: &AppState, page: &IndexPage) -> Response {
    match state.pages.render_index(page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
