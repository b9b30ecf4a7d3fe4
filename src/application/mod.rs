// Analysis orchestration
pub mod analysis_service;
