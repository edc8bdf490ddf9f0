mod backend;
mod line;
mod sentiment_label;
mod sentiment_result;

pub use backend::{Backend, DEFAULT_BACKEND};
pub use line::{Line, split_lines};
pub use sentiment_label::{SentimentLabel, normalize_label};
pub use sentiment_result::SentimentResult;
