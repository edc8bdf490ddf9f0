//! Rule-based polarity scoring in the style of VADER.
//!
//! Each token found in the lexicon contributes its valence, adjusted by the
//! three preceding tokens (boosters, negations, idioms), by shouting in
//! mixed-case text and by a contrastive "but". The sum is amplified by
//! `!`/`?` emphasis and squashed into `[-1, 1]`.

use super::lexicon::{
    BOOST_DECREMENT, BOOSTERS, CAPS_INCREMENT, IDIOMS, LEXICON, NEGATION_SCALAR, NEGATIONS,
};

const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
const BUT_BEFORE_SCALAR: f64 = 0.5;
const BUT_AFTER_SCALAR: f64 = 1.5;
const NEVER_SO_SCALAR: f64 = 1.25;

/// Proportions of positive, neutral and negative signal plus the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    /// Normalized aggregate in `[-1, 1]`, rounded to four decimals.
    pub compound: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let shouting = is_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lowered[i].as_str();
            let starts_kind_of = word == "kind" && lowered.get(i + 1).is_some_and(|w| w == "of");

            if BOOSTERS.contains_key(word) || starts_kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(token_valence(&tokens, &lowered, i, shouting));
        }

        apply_but_shift(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    pub fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(strip_punctuation).collect()
}

/// Strips surrounding punctuation unless that would leave two characters or
/// fewer, which keeps emoticons such as `:)` intact.
fn strip_punctuation(token: &str) -> String {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token.to_string()
    } else {
        stripped.to_string()
    }
}

/// At least one cased character and no lowercase ones; uncased scripts never shout.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in capitals.
fn is_cap_differential(tokens: &[String]) -> bool {
    let shouted = tokens.iter().filter(|t| is_upper(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn token_valence(tokens: &[String], lowered: &[String], i: usize, shouting: bool) -> f64 {
    let word = lowered[i].as_str();
    let Some(&base) = LEXICON.get(word) else {
        return 0.0;
    };

    let mut valence = base;

    // "no" directly before another lexicon word acts as a negation, not a sentiment.
    if word == "no" && lowered.get(i + 1).is_some_and(|w| LEXICON.contains_key(w.as_str())) {
        valence = 0.0;
    }
    let preceded_by_no = (i > 0 && lowered[i - 1] == "no")
        || (i > 1 && lowered[i - 2] == "no")
        || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"));
    if preceded_by_no {
        valence = base * NEGATION_SCALAR;
    }

    if shouting && is_upper(&tokens[i]) {
        valence += CAPS_INCREMENT.copysign(valence_sign(valence));
    }

    for distance in 0..3 {
        if i <= distance {
            break;
        }
        let previous = lowered[i - distance - 1].as_str();
        if LEXICON.contains_key(previous) {
            continue;
        }

        let mut scalar = booster_scalar(&tokens[i - distance - 1], previous, valence, shouting);
        match distance {
            1 => scalar *= 0.95,
            2 => scalar *= 0.9,
            _ => {}
        }
        valence += scalar;
        valence = negation_check(valence, lowered, distance, i);
        if distance == 2 {
            valence = idiom_check(valence, lowered, i);
        }
    }

    least_check(valence, lowered, i)
}

fn valence_sign(valence: f64) -> f64 {
    if valence > 0.0 { 1.0 } else { -1.0 }
}

fn booster_scalar(token: &str, lowered: &str, valence: f64, shouting: bool) -> f64 {
    let Some(&boost) = BOOSTERS.get(lowered) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -boost } else { boost };
    if shouting && is_upper(token) {
        scalar += CAPS_INCREMENT.copysign(valence_sign(valence));
    }
    scalar
}

fn is_negated(word: &str) -> bool {
    NEGATIONS.contains(word) || word.contains("n't")
}

fn negation_check(valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
    let at = |back: usize| word_before(lowered, i, back);

    match distance {
        0 if is_negated(at(1)) => valence * NEGATION_SCALAR,
        1 if at(2) == "never" && matches!(at(1), "so" | "this") => valence * NEVER_SO_SCALAR,
        1 if at(2) == "without" && at(1) == "doubt" => valence,
        1 if is_negated(at(2)) => valence * NEGATION_SCALAR,
        2 if at(3) == "never"
            && (matches!(at(2), "so" | "this") || matches!(at(1), "so" | "this")) =>
        {
            valence * NEVER_SO_SCALAR
        }
        2 if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") => valence,
        2 if is_negated(at(3)) => valence * NEGATION_SCALAR,
        _ => valence,
    }
}

fn word_before(lowered: &[String], i: usize, back: usize) -> &str {
    lowered[i - back].as_str()
}

/// Multi-word expressions ending at or right after `i` override the valence.
fn idiom_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    let window = |start: usize, end: usize| lowered[start..=end].join(" ");

    let mut candidates = vec![
        window(i - 1, i),
        window(i - 2, i),
        window(i - 3, i - 1),
        window(i - 3, i - 2),
        window(i - 2, i - 1),
    ];
    if i + 1 < lowered.len() {
        candidates.push(window(i, i + 1));
    }
    if i + 2 < lowered.len() {
        candidates.push(window(i, i + 2));
    }

    let mut result = valence;
    for candidate in &candidates {
        let matched = IDIOMS
            .iter()
            .find(|(idiom, _)| *idiom == candidate.as_str());
        if let Some((_, idiom_valence)) = matched {
            result = *idiom_valence;
            break;
        }
    }

    // Two-word dampeners such as "kind of" sitting just before the window.
    for (start, end) in [(i - 3, i - 2), (i - 2, i - 1)] {
        if matches!(window(start, end).as_str(), "kind of" | "sort of" | "just enough") {
            result += BOOST_DECREMENT;
        }
    }

    result
}

fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i == 0 || lowered[i - 1] != "least" {
        return valence;
    }
    if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * NEGATION_SCALAR
}

fn apply_but_shift(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < pivot {
            *sentiment *= BUT_BEFORE_SCALAR;
        } else if index > pivot {
            *sentiment *= BUT_AFTER_SCALAR;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CAP,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += emphasis;
    } else if total < 0.0 {
        total -= emphasis;
    }
    let compound = normalize(total);

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            positive_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            negative_sum += sentiment - 1.0;
        } else {
            neutral_count += 1.0;
        }
    }

    if positive_sum > f64::abs(negative_sum) {
        positive_sum += emphasis;
    } else if positive_sum < f64::abs(negative_sum) {
        negative_sum -= emphasis;
    }

    let magnitude = positive_sum + f64::abs(negative_sum) + neutral_count;
    if magnitude == 0.0 {
        return PolarityScores::default();
    }

    PolarityScores {
        negative: round_to((negative_sum / magnitude).abs(), 3),
        neutral: round_to((neutral_count / magnitude).abs(), 3),
        positive: round_to((positive_sum / magnitude).abs(), 3),
        compound: round_to(compound, 4),
    }
}
