mod candle_classifier;
mod lexicon;
mod lexicon_analyzer;
mod predictor_factory;
mod vader_predictor;

pub use candle_classifier::{CandleClassifierPredictor, DEFAULT_SENTIMENT_MODEL};
pub use lexicon_analyzer::{LexiconAnalyzer, PolarityScores};
pub use predictor_factory::PredictorFactory;
pub use vader_predictor::{POLARITY_THRESHOLD, VaderPredictor};
