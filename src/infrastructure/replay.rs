use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::ports::RecordSupplier;
use crate::domain::sentiment::record::RawObservation;

/// Serves record batches from `<TICKER>.json` files in a directory.
///
/// Useful for re-running analyses against captured upstream snapshots. A
/// missing file is an empty batch, not an error; a malformed file is an
/// error, since silently analyzing half a snapshot would be misleading.
pub struct ReplaySupplier {
    replay_dir: PathBuf,
}

impl ReplaySupplier {
    pub fn new(replay_dir: impl Into<PathBuf>) -> Self {
        Self {
            replay_dir: replay_dir.into(),
        }
    }
}

#[async_trait]
impl RecordSupplier for ReplaySupplier {
    async fn fetch_records(&self, ticker: &str) -> Result<Vec<RawObservation>> {
        let path = self
            .replay_dir
            .join(format!("{}.json", ticker.to_ascii_uppercase()));

        if !path.exists() {
            debug!("No replay file at {:?}, serving empty batch", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read replay file {:?}", path))?;
        let batch: Vec<RawObservation> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse replay file {:?}", path))?;

        info!("Loaded {} replay records from {:?}", batch.len(), path);
        Ok(batch)
    }
}
