mod predictor_loader;
mod sentiment_predictor;

pub use predictor_loader::PredictorLoader;
pub use sentiment_predictor::{PredictorError, RawPrediction, SentimentPredictor};
