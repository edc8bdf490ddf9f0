use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::application::ports::{PredictorError, PredictorLoader, SentimentPredictor};
use crate::domain::{Backend, SentimentResult, normalize_label, split_lines};

/// Splits text into lines and scores each one with the configured backend.
///
/// The predictor is created on first use and cached for the lifetime of the
/// service. A classifier that fails to load is replaced by the lexicon
/// predictor, and [`SentimentService::backend`] reports the replacement.
pub struct SentimentService {
    requested: Backend,
    loader: Arc<dyn PredictorLoader>,
    predictor: OnceCell<Arc<dyn SentimentPredictor>>,
}

impl SentimentService {
    pub fn new(backend: Backend, loader: Arc<dyn PredictorLoader>) -> Self {
        Self {
            requested: backend,
            loader,
            predictor: OnceCell::new(),
        }
    }

    /// Effective backend: the requested one until the predictor exists.
    pub fn backend(&self) -> Backend {
        self.predictor
            .get()
            .map(|predictor| predictor.backend())
            .unwrap_or_else(|| self.requested.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.predictor.initialized()
    }

    /// Initializes the predictor ahead of the first request.
    pub async fn warm_up(&self) -> Result<Backend, SentimentError> {
        let predictor = self.predictor().await?;
        Ok(predictor.backend())
    }

    #[tracing::instrument(skip(self, text), fields(backend = %self.requested))]
    pub async fn analyze(&self, text: &str) -> Result<Vec<SentimentResult>, SentimentError> {
        let lines = split_lines(Some(text));
        if lines.is_empty() {
            tracing::debug!("No lines to analyze");
            return Ok(Vec::new());
        }

        let predictor = self.predictor().await?;
        let predictions = predictor
            .predict(&lines)
            .await
            .map_err(SentimentError::Prediction)?;

        if predictions.len() != lines.len() {
            return Err(SentimentError::PredictionCountMismatch {
                expected: lines.len(),
                actual: predictions.len(),
            });
        }

        let results: Vec<SentimentResult> = lines
            .into_iter()
            .zip(predictions)
            .map(|(line, prediction)| {
                SentimentResult::new(
                    line.into_inner(),
                    normalize_label(Some(&prediction.label)),
                    prediction.score,
                )
            })
            .collect();

        tracing::debug!(
            lines = results.len(),
            effective_backend = %predictor.backend(),
            "Analysis complete"
        );

        Ok(results)
    }

    async fn predictor(&self) -> Result<&Arc<dyn SentimentPredictor>, SentimentError> {
        self.predictor
            .get_or_try_init(|| async {
                let loader = Arc::clone(&self.loader);
                let requested = self.requested.clone();
                tokio::task::spawn_blocking(move || initialize(loader.as_ref(), &requested))
                    .await
                    .map_err(|e| SentimentError::Initialization(e.to_string()))
            })
            .await
    }
}

fn initialize(loader: &dyn PredictorLoader, requested: &Backend) -> Arc<dyn SentimentPredictor> {
    match requested {
        Backend::Transformers => match loader.load(requested) {
            Ok(predictor) => {
                tracing::info!(backend = %predictor.backend(), "Sentiment predictor ready");
                predictor
            }
            Err(e) => {
                let fallback = loader.fallback();
                tracing::warn!(
                    error = %e,
                    fallback = %fallback.backend(),
                    "Classifier backend unavailable, falling back"
                );
                fallback
            }
        },
        Backend::Vader => loader.fallback(),
        Backend::Unrecognized(name) => {
            let fallback = loader.fallback();
            tracing::warn!(
                requested = %name,
                fallback = %fallback.backend(),
                "Unrecognized sentiment backend, using lexicon predictor"
            );
            fallback
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("prediction failed: {0}")]
    Prediction(#[source] PredictorError),
    #[error("predictor returned {actual} predictions for {expected} lines")]
    PredictionCountMismatch { expected: usize, actual: usize },
    #[error("predictor initialization failed: {0}")]
    Initialization(String),
}
