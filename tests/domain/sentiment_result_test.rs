use sentimeter::domain::{SentimentLabel, SentimentResult};

#[test]
fn given_score_above_one_when_creating_result_then_clamps_to_one() {
    let result = SentimentResult::new("x".to_string(), SentimentLabel::Positive, 1.7);
    assert_eq!(result.score, 1.0);
}

#[test]
fn given_negative_score_when_creating_result_then_clamps_to_zero() {
    let result = SentimentResult::new("x".to_string(), SentimentLabel::Negative, -0.2);
    assert_eq!(result.score, 0.0);
}

#[test]
fn given_nan_score_when_creating_result_then_uses_zero() {
    let result = SentimentResult::new("x".to_string(), SentimentLabel::Unknown, f32::NAN);
    assert_eq!(result.score, 0.0);
}

#[test]
fn given_result_when_serializing_then_exposes_text_label_and_score() {
    let result = SentimentResult::new("fine".to_string(), SentimentLabel::Neutral, 0.5);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["text"], "fine");
    assert_eq!(value["label"], "NEUTRAL");
    assert_eq!(value["score"], 0.5);
}
