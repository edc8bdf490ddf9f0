use async_trait::async_trait;

use crate::domain::{Backend, Line};

/// Backend-native prediction for one line, before label normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub label: String,
    pub score: f32,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Predicts a label and confidence for every line of a batch, in input order.
#[async_trait]
pub trait SentimentPredictor: Send + Sync {
    /// Backend this predictor actually runs.
    fn backend(&self) -> Backend;

    async fn predict(&self, lines: &[Line]) -> Result<Vec<RawPrediction>, PredictorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),
}
