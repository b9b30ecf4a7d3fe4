use crate::domain::errors::TickerError;

/// Longest symbol accepted at the service boundary.
pub const MAX_TICKER_LEN: usize = 10;

/// Canonicalize a raw ticker symbol: trim, uppercase, bound the length.
pub fn validate_ticker(raw: &str) -> Result<String, TickerError> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(TickerError::Empty);
    }

    let len = symbol.chars().count();
    if len > MAX_TICKER_LEN {
        return Err(TickerError::TooLong {
            symbol,
            len,
            max: MAX_TICKER_LEN,
        });
    }

    Ok(symbol)
}
