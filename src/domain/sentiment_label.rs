use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical sentiment categories exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            "NEUTRAL" => Ok(SentimentLabel::Neutral),
            "UNKNOWN" => Ok(SentimentLabel::Unknown),
            _ => Err(format!("Invalid sentiment label: {}", s)),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a backend-specific label spelling onto a canonical label.
///
/// Spellings outside the known aliases collapse to `Unknown`.
pub fn normalize_label(raw: Option<&str>) -> SentimentLabel {
    let normalized = raw.unwrap_or_default().trim().to_uppercase();

    match normalized.as_str() {
        "POSITIVE" | "POS" => SentimentLabel::Positive,
        "NEGATIVE" | "NEG" => SentimentLabel::Negative,
        "NEUTRAL" | "NEU" => SentimentLabel::Neutral,
        "" => SentimentLabel::Unknown,
        other => {
            tracing::debug!(label = other, "Unrecognized backend label");
            SentimentLabel::Unknown
        }
    }
}
