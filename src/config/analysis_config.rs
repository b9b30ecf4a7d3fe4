//! Analysis pipeline configuration parsing from environment variables.
//!
//! Classification constants (deadband, windows, verdict thresholds) are
//! fixed by the engine and deliberately not configurable here.

use std::env;

/// Analysis environment configuration
#[derive(Debug, Clone)]
pub struct AnalysisEnvConfig {
    /// Records with |sentiment| below this floor are dropped before
    /// aggregation. Zero disables the filter.
    pub noise_floor: f64,
    /// Directory of `<TICKER>.json` batches for replay mode.
    pub replay_dir: String,
}

impl Default for AnalysisEnvConfig {
    fn default() -> Self {
        Self {
            noise_floor: 0.0,
            replay_dir: "./replay-data".to_string(),
        }
    }
}

impl AnalysisEnvConfig {
    pub fn from_env() -> Self {
        Self {
            noise_floor: env::var("ANALYSIS_NOISE_FLOOR")
                .unwrap_or_else(|_| "0.0".to_string())
                .parse::<f64>()
                .unwrap_or(0.0),
            replay_dir: env::var("REPLAY_DIR").unwrap_or_else(|_| "./replay-data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisEnvConfig::default();
        assert_eq!(config.noise_floor, 0.0);
        assert_eq!(config.replay_dir, "./replay-data");
    }
}
