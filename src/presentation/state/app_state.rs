use std::sync::Arc;

use crate::application::services::SentimentService;
use crate::presentation::views::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub sentiment_service: Arc<SentimentService>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(sentiment_service: Arc<SentimentService>, pages: Arc<PageRenderer>) -> Self {
        Self {
            sentiment_service,
            pages,
        }
    }
}
