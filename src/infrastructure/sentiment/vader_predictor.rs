use async_trait::async_trait;

use crate::application::ports::{PredictorError, RawPrediction, SentimentPredictor};
use crate::domain::{Backend, Line, SentimentLabel};

use super::LexiconAnalyzer;

/// Compound scores at or beyond this magnitude are polar.
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// Lexicon backend: labels each line from its compound polarity.
#[derive(Debug, Default, Clone)]
pub struct VaderPredictor {
    analyzer: LexiconAnalyzer,
}

impl VaderPredictor {
    pub fn new() -> Self {
        Self {
            analyzer: LexiconAnalyzer::new(),
        }
    }

    pub fn predict_line(&self, line: &str) -> RawPrediction {
        let compound = self.analyzer.compound(line);

        let label = if compound >= POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= -POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        RawPrediction::new(label.as_str(), compound.abs().min(1.0) as f32)
    }
}

#[async_trait]
impl SentimentPredictor for VaderPredictor {
    fn backend(&self) -> Backend {
        Backend::Vader
    }

    async fn predict(&self, lines: &[Line]) -> Result<Vec<RawPrediction>, PredictorError> {
        Ok(lines.iter().map(|line| self.predict_line(line)).collect())
    }
}
