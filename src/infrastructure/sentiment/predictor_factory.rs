use std::sync::Arc;

use crate::application::ports::{PredictorError, PredictorLoader, SentimentPredictor};
use crate::domain::Backend;

use super::{CandleClassifierPredictor, VaderPredictor};

/// Builds the predictor for a configured backend.
pub struct PredictorFactory {
    model_id: String,
}

impl PredictorFactory {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }

    pub fn create(
        &self,
        backend: &Backend,
    ) -> Result<Arc<dyn SentimentPredictor>, PredictorError> {
        match backend {
            Backend::Vader => {
                tracing::info!("Loading lexicon sentiment predictor");
                Ok(Arc::new(VaderPredictor::new()))
            }
            Backend::Transformers => {
                tracing::info!(model = %self.model_id, "Loading classifier sentiment predictor");
                let predictor = CandleClassifierPredictor::new(&self.model_id)?;
                Ok(Arc::new(predictor))
            }
            Backend::Unrecognized(name) => Err(PredictorError::UnsupportedBackend(name.clone())),
        }
    }
}

impl PredictorLoader for PredictorFactory {
    fn load(&self, backend: &Backend) -> Result<Arc<dyn SentimentPredictor>, PredictorError> {
        self.create(backend)
    }

    fn fallback(&self) -> Arc<dyn SentimentPredictor> {
        Arc::new(VaderPredictor::new())
    }
}
