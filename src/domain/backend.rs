use std::fmt;

pub const DEFAULT_BACKEND: &str = "vader";

/// Sentiment-prediction strategy requested by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    #[default]
    Vader,
    Transformers,
    /// Any other name; resolved to the lexicon predictor at initialization.
    Unrecognized(String),
}

impl Backend {
    /// Parses a configured name, lowercased and trimmed. Blank falls back to `vader`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "vader" => Backend::Vader,
            "transformers" => Backend::Transformers,
            other => Backend::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Backend::Vader => "vader",
            Backend::Transformers => "transformers",
            Backend::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
