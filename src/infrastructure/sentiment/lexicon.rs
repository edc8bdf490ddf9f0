//! Valence data for the lexicon analyzer.
//!
//! Word valences come from the VADER lexicon; boosters, negations and idioms
//! are kept here. Valences run from roughly -4.0 (extremely negative) to +4.0
//! (extremely positive), with lowercase keys.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Added to a booster's scalar when it is shouted in otherwise mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a valence inside a negation window.
pub const NEGATION_SCALAR: f64 = -0.74;

const BOOST_INCREMENT: f64 = 0.293;
pub const BOOST_DECREMENT: f64 = -0.293;

/// The complete VADER word list, shipped with the `vader_sentiment` crate.
pub static LEXICON: LazyLock<HashMap<String, f64>> = LazyLock::new(|| {
    vader_sentiment::LEXICON
        .iter()
        .map(|(word, valence)| (word.to_string(), *valence))
        .collect()
});

pub static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    INTENSIFIERS
        .iter()
        .map(|w| (*w, BOOST_INCREMENT))
        .chain(DAMPENERS.iter().map(|w| (*w, BOOST_DECREMENT)))
        .collect()
});

pub static NEGATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATION_WORDS.iter().copied().collect());

/// Multi-word expressions whose valence replaces the word-level score.
pub const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
    ("cut the mustard", 2.0),
    ("hand to mouth", -2.0),
    ("back handed", -2.0),
    ("blow smoke", -2.0),
    ("upper hand", 1.0),
    ("break a leg", 2.0),
    ("cooking with gas", 2.0),
    ("in the black", 2.0),
    ("in the red", -2.0),
    ("on the ball", 2.0),
    ("under the weather", -2.0),
];

const INTENSIFIERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerable",
    "considerably",
    "decidedly",
    "deeply",
    "effing",
    "enormous",
    "enormously",
    "entirely",
    "especially",
    "exceptional",
    "exceptionally",
    "extreme",
    "extremely",
    "fabulously",
    "flipping",
    "flippin",
    "frackin",
    "fracking",
    "fricking",
    "frickin",
    "frigging",
    "friggin",
    "fully",
    "fuckin",
    "fucking",
    "greatly",
    "hella",
    "highly",
    "hugely",
    "incredible",
    "incredibly",
    "intensely",
    "major",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "total",
    "totally",
    "tremendous",
    "tremendously",
    "uber",
    "unbelievably",
    "unusually",
    "utter",
    "utterly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "kindof",
    "kind-of",
    "less",
    "little",
    "marginal",
    "marginally",
    "occasional",
    "occasionally",
    "partly",
    "scarce",
    "scarcely",
    "slight",
    "slightly",
    "somewhat",
    "sorta",
    "sortof",
    "sort-of",
];

const NEGATION_WORDS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];
