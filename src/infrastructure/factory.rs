use crate::application::analysis_service::AnalysisService;
use crate::config::{Config, Mode};
use crate::domain::ports::{RecordSupplier, TickerDirectory};
use crate::infrastructure::demo::DemoSupplier;
use crate::infrastructure::observability::Metrics;
use crate::infrastructure::reference::StaticTickerDirectory;
use crate::infrastructure::replay::ReplaySupplier;
use std::sync::Arc;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_supplier(config: &Config) -> Arc<dyn RecordSupplier> {
        match config.mode {
            Mode::Demo => Arc::new(DemoSupplier::new()),
            Mode::Replay => Arc::new(ReplaySupplier::new(config.replay_dir.clone())),
        }
    }

    pub fn create_directory() -> Arc<dyn TickerDirectory> {
        Arc::new(StaticTickerDirectory::new())
    }

    /// Wire a fully configured analysis service for the given mode.
    pub fn create_analysis_service(config: &Config, metrics: Metrics) -> AnalysisService {
        AnalysisService::new(
            Self::create_supplier(config),
            Self::create_directory(),
            metrics,
            config.noise_floor,
            mode_label(config.mode),
        )
    }

    /// An analysis service pinned to demo data, regardless of mode.
    pub fn create_demo_service(config: &Config, metrics: Metrics) -> AnalysisService {
        AnalysisService::new(
            Arc::new(DemoSupplier::new()),
            Self::create_directory(),
            metrics,
            config.noise_floor,
            mode_label(Mode::Demo),
        )
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Demo => "demo",
        Mode::Replay => "replay",
    }
}
