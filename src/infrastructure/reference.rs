use anyhow::Result;
use async_trait::async_trait;

use crate::domain::ports::{TickerDirectory, TickerInfo};

/// Symbol, company name, sector.
const CATALOG: &[(&str, &str, &str)] = &[
    ("AAPL", "Apple Inc.", "Technology"),
    ("AMD", "Advanced Micro Devices, Inc.", "Technology"),
    ("AMZN", "Amazon.com, Inc.", "Consumer Cyclical"),
    ("GME", "GameStop Corp.", "Consumer Cyclical"),
    ("GOOGL", "Alphabet Inc.", "Communication Services"),
    ("META", "Meta Platforms, Inc.", "Communication Services"),
    ("MSFT", "Microsoft Corporation", "Technology"),
    ("NVDA", "NVIDIA Corporation", "Technology"),
    ("PLTR", "Palantir Technologies Inc.", "Technology"),
    ("TSLA", "Tesla, Inc.", "Consumer Cyclical"),
];

/// Static in-memory ticker catalog. Unknown symbols resolve to `None` and
/// presentation falls back to the raw symbol.
pub struct StaticTickerDirectory;

impl StaticTickerDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticTickerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TickerDirectory for StaticTickerDirectory {
    async fn lookup(&self, ticker: &str) -> Result<Option<TickerInfo>> {
        let symbol = ticker.to_ascii_uppercase();
        Ok(CATALOG
            .iter()
            .find(|(s, _, _)| *s == symbol)
            .map(|(s, name, sector)| TickerInfo {
                symbol: s.to_string(),
                name: name.to_string(),
                sector: sector.to_string(),
            }))
    }
}
