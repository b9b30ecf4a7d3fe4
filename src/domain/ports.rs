use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::sentiment::record::RawObservation;

/// Static descriptive data for a ticker symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerInfo {
    pub symbol: String,
    pub name: String,
    pub sector: String,
}

// Need async_trait for async functions in traits
#[async_trait]
pub trait RecordSupplier: Send + Sync {
    /// Fetch the scored observations currently available for a ticker.
    /// An unknown ticker yields an empty batch, not an error.
    async fn fetch_records(&self, ticker: &str) -> Result<Vec<RawObservation>>;
}

#[async_trait]
pub trait TickerDirectory: Send + Sync {
    /// Look up descriptive data for a ticker. `None` for unknown symbols;
    /// callers fall back to the raw symbol.
    async fn lookup(&self, ticker: &str) -> Result<Option<TickerInfo>>;
}
