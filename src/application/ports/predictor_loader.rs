use std::sync::Arc;

use crate::domain::Backend;

use super::{PredictorError, SentimentPredictor};

/// Builds predictors for the sentiment service.
///
/// `load` may block (model downloads, weight mapping) and is run on the
/// blocking pool by the caller.
pub trait PredictorLoader: Send + Sync {
    fn load(&self, backend: &Backend) -> Result<Arc<dyn SentimentPredictor>, PredictorError>;

    /// Lexicon predictor used when the requested backend cannot be loaded.
    fn fallback(&self) -> Arc<dyn SentimentPredictor>;
}
