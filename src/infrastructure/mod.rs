pub mod observability;
pub mod sentiment;
