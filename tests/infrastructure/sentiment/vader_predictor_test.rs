use sentimeter::application::ports::SentimentPredictor;
use sentimeter::domain::{Backend, split_lines};
use sentimeter::infrastructure::sentiment::VaderPredictor;

#[test]
fn given_positive_line_when_predicting_then_labels_positive_with_compound_magnitude() {
    let prediction = VaderPredictor::new().predict_line("I love this.");
    assert_eq!(prediction.label, "POSITIVE");
    assert!((prediction.score - 0.6369).abs() < 1e-4);
}

#[test]
fn given_negative_line_when_predicting_then_labels_negative() {
    let prediction = VaderPredictor::new().predict_line("I hate this.");
    assert_eq!(prediction.label, "NEGATIVE");
    assert!(prediction.score > 0.05);
}

#[test]
fn given_flat_line_when_predicting_then_labels_neutral_with_zero_score() {
    let prediction = VaderPredictor::new().predict_line("The meeting is at noon.");
    assert_eq!(prediction.label, "NEUTRAL");
    assert_eq!(prediction.score, 0.0);
}

#[tokio::test]
async fn given_batch_of_lines_when_predicting_then_returns_one_prediction_per_line() {
    let predictor = VaderPredictor::new();
    let lines = split_lines(Some("great\nawful\nchair\nSO GOOD!!!!"));

    let predictions = predictor.predict(&lines).await.unwrap();

    assert_eq!(predictions.len(), lines.len());
    assert_eq!(predictions[0].label, "POSITIVE");
    assert_eq!(predictions[1].label, "NEGATIVE");
    assert_eq!(predictions[2].label, "NEUTRAL");
    for prediction in &predictions {
        assert!((0.0..=1.0).contains(&prediction.score));
    }
    assert_eq!(predictor.backend(), Backend::Vader);
}
