use thiserror::Error;

/// Errors raised while normalizing raw observations into sentiment records.
///
/// Validation is per-record: a failing record is rejected and logged, the
/// rest of the batch proceeds.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Record text is empty (provider: {provider})")]
    EmptyText { provider: String },

    #[error("Record source is empty")]
    EmptySource,

    #[error("Record timestamp is missing (provider: {provider})")]
    MissingTimestamp { provider: String },
}

/// Errors related to ticker symbol input at the service boundary.
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("Ticker symbol is empty")]
    Empty,

    #[error("Ticker symbol too long: {symbol} ({len} > {max} chars)")]
    TooLong {
        symbol: String,
        len: usize,
        max: usize,
    },
}
