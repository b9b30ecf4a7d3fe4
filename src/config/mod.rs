//! Configuration module for tickersense.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by domain: Server, Analysis, and Observability.

mod analysis_config;
mod observability_config;
mod server_config;

pub use analysis_config::AnalysisEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Application execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Curated in-memory batches, no external data.
    Demo,
    /// Record batches loaded from JSON files on disk.
    Replay,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(Mode::Demo),
            "replay" => Ok(Mode::Replay),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'demo' or 'replay'", s),
        }
    }
}

/// Main application configuration.
///
/// This struct aggregates all configuration from sub-modules and provides
/// flat field access for the rest of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // Core
    pub mode: Mode,

    // Server (from ServerEnvConfig)
    pub bind_address: String,
    pub port: u16,
    pub cors_allowed_origin: String,

    // Analysis (from AnalysisEnvConfig)
    pub noise_floor: f64,
    pub replay_dir: String,

    // Observability (from ObservabilityEnvConfig)
    pub observability_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "demo".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let server = ServerEnvConfig::from_env();
        let analysis = AnalysisEnvConfig::from_env();
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self {
            mode,

            // Server
            bind_address: server.bind_address,
            port: server.port,
            cors_allowed_origin: server.cors_allowed_origin,

            // Analysis
            noise_floor: analysis.noise_floor,
            replay_dir: analysis.replay_dir,

            // Observability
            observability_enabled: observability.enabled,
        })
    }
}
