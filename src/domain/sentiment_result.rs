use serde::Serialize;

use super::SentimentLabel;

/// Sentiment of one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub text: String,
    pub label: SentimentLabel,
    pub score: f32,
}

impl SentimentResult {
    pub fn new(text: String, label: SentimentLabel, score: f32) -> Self {
        Self {
            text,
            label,
            score: clamp_score(score),
        }
    }
}

fn clamp_score(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
