mod analyze;
mod health;
mod index;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, analyze_handler};
pub use health::{HealthResponse, health_handler};
pub use index::{
    AnalyzeForm, EMPTY_INPUT_MESSAGE, NO_LINES_MESSAGE, index_handler, submit_handler,
};
