use sentimeter::infrastructure::sentiment::LexiconAnalyzer;

const EPSILON: f64 = 1e-4;

#[test]
fn given_loving_sentence_when_scoring_then_compound_matches_normalized_valence() {
    let analyzer = LexiconAnalyzer::new();
    let compound = analyzer.compound("I love this.");
    assert!((compound - 0.6369).abs() < EPSILON, "compound = {}", compound);
}

#[test]
fn given_hateful_sentence_when_scoring_then_compound_is_negative() {
    let analyzer = LexiconAnalyzer::new();
    let compound = analyzer.compound("I hate this.");
    assert!((compound + 0.5719).abs() < EPSILON, "compound = {}", compound);
}

#[test]
fn given_sentence_without_sentiment_words_when_scoring_then_compound_is_zero() {
    let scores = LexiconAnalyzer::new().polarity_scores("The book is on the table.");
    assert_eq!(scores.compound, 0.0);
    assert_eq!(scores.neutral, 1.0);
}

#[test]
fn given_empty_text_when_scoring_then_all_scores_are_zero() {
    let scores = LexiconAnalyzer::new().polarity_scores("");
    assert_eq!(scores.compound, 0.0);
    assert_eq!(scores.positive, 0.0);
    assert_eq!(scores.negative, 0.0);
    assert_eq!(scores.neutral, 0.0);
}

#[test]
fn given_negated_positive_word_when_scoring_then_compound_turns_negative() {
    let compound = LexiconAnalyzer::new().compound("This is not good.");
    assert!(compound < -0.05, "compound = {}", compound);
}

#[test]
fn given_no_before_negative_word_when_scoring_then_compound_turns_positive() {
    let compound = LexiconAnalyzer::new().compound("There were no problems");
    assert!(compound > 0.05, "compound = {}", compound);
}

#[test]
fn given_booster_word_when_scoring_then_intensity_increases() {
    let analyzer = LexiconAnalyzer::new();
    let plain = analyzer.compound("The food is good");
    let boosted = analyzer.compound("The food is very good");
    assert!(boosted > plain);
}

#[test]
fn given_dampener_word_when_scoring_then_intensity_decreases() {
    let analyzer = LexiconAnalyzer::new();
    let plain = analyzer.compound("The food is good");
    let dampened = analyzer.compound("The food is slightly good");
    assert!(dampened < plain);
}

#[test]
fn given_shouted_word_in_mixed_case_text_when_scoring_then_intensity_increases() {
    let analyzer = LexiconAnalyzer::new();
    let plain = analyzer.compound("The food is good");
    let shouted = analyzer.compound("The food is GOOD");
    assert!(shouted > plain);
}

#[test]
fn given_exclamation_marks_when_scoring_then_intensity_increases() {
    let analyzer = LexiconAnalyzer::new();
    let plain = analyzer.compound("The food is good");
    let excited = analyzer.compound("The food is good!!!");
    assert!(excited > plain);
}

#[test]
fn given_contrastive_but_when_scoring_then_clause_after_but_dominates() {
    let compound =
        LexiconAnalyzer::new().compound("The food is good but the service is terrible");
    assert!(compound < -0.05, "compound = {}", compound);
}

#[test]
fn given_varied_sentences_when_scoring_then_scores_stay_in_range() {
    let analyzer = LexiconAnalyzer::new();
    let samples = [
        "GREAT GREAT GREAT!!!!!!",
        "worst worst worst worst worst worst worst",
        "I am not sure about this???",
        "kind of good",
        "at least it works",
        "never so happy",
        ":) :( <3",
        "meh",
    ];

    for sample in samples {
        let scores = analyzer.polarity_scores(sample);
        assert!(
            (-1.0..=1.0).contains(&scores.compound),
            "{}: {:?}",
            sample,
            scores
        );
        let total = scores.positive + scores.negative + scores.neutral;
        assert!((total - 1.0).abs() < 0.01, "{}: {:?}", sample, scores);
    }
}

#[test]
fn given_everyday_sentiment_words_when_scoring_then_uses_full_vader_lexicon() {
    let analyzer = LexiconAnalyzer::new();

    let delicious = analyzer.compound("The food was delicious.");
    let died = analyzer.compound("My dog died yesterday.");

    assert!(delicious > 0.05, "compound = {}", delicious);
    assert!(died < -0.05, "compound = {}", died);
}

#[test]
fn given_kind_of_before_negative_word_when_scoring_then_negativity_grows() {
    let analyzer = LexiconAnalyzer::new();
    let plain = analyzer.compound("The food is bad");
    let hedged = analyzer.compound("The food is kind of bad");
    assert!(hedged < plain, "plain = {}, hedged = {}", plain, hedged);
}

#[test]
fn given_uncased_script_next_to_shouted_word_when_scoring_then_shouting_is_emphasized() {
    let analyzer = LexiconAnalyzer::new();
    let alone = analyzer.compound("GOOD");
    let mixed = analyzer.compound("好 GOOD");
    assert!(mixed > alone, "alone = {}, mixed = {}", alone, mixed);
}
