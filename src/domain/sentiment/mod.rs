// Sentiment aggregation engine
pub mod aggregate;
pub mod label;
pub mod ranking;
pub mod record;
pub mod trend;
pub mod verdict;
