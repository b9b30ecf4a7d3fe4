//! Ticker analysis orchestration
//!
//! Pulls raw observations from the configured supplier, normalizes them,
//! runs the aggregation engine and classifies a verdict. The engine itself
//! is pure; everything stateful (suppliers, metrics, clocks) lives here.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::errors::ValidationError;
use crate::domain::ports::{RecordSupplier, TickerDirectory, TickerInfo};
use crate::domain::sentiment::aggregate::AggregateStats;
use crate::domain::sentiment::ranking::rank_by_relevance;
use crate::domain::sentiment::record::{RawObservation, SentimentRecord};
use crate::domain::sentiment::trend::TrendEntry;
use crate::domain::sentiment::verdict::Assessment;
use crate::domain::validation::ticker::validate_ticker;
use crate::infrastructure::observability::Metrics;

/// Everything one analysis run produces for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: TickerInfo,
    pub analyzed_at: DateTime<Utc>,
    pub stats: AggregateStats,
    pub assessment: Assessment,
    pub trend: Vec<TrendEntry>,
}

pub struct AnalysisService {
    supplier: Arc<dyn RecordSupplier>,
    directory: Arc<dyn TickerDirectory>,
    metrics: Metrics,
    noise_floor: f64,
    mode_label: &'static str,
}

impl AnalysisService {
    pub fn new(
        supplier: Arc<dyn RecordSupplier>,
        directory: Arc<dyn TickerDirectory>,
        metrics: Metrics,
        noise_floor: f64,
        mode_label: &'static str,
    ) -> Self {
        Self {
            supplier,
            directory,
            metrics,
            noise_floor,
            mode_label,
        }
    }

    /// Run a full analysis for one ticker against the current instant.
    pub async fn analyze(&self, ticker: &str) -> Result<AnalysisReport> {
        let symbol = validate_ticker(ticker)?;
        let (info, raw) = self.fetch_input(&symbol).await?;
        Ok(self.analyze_batch(info, raw, Utc::now()))
    }

    /// Analyze several tickers as one batch. Record fetches run
    /// concurrently; the compute fans out across a thread pool. All
    /// tickers share one observation instant so reports are comparable.
    pub async fn analyze_many(&self, tickers: &[String]) -> Result<Vec<AnalysisReport>> {
        let mut symbols = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            symbols.push(validate_ticker(ticker)?);
        }

        let inputs = try_join_all(symbols.iter().map(|s| self.fetch_input(s))).await?;

        let now = Utc::now();
        let reports = inputs
            .into_par_iter()
            .map(|(info, raw)| self.analyze_batch(info, raw, now))
            .collect();
        Ok(reports)
    }

    /// The synchronous tail of an analysis: normalize, filter, rank,
    /// aggregate, classify. Total for any input; an empty or fully
    /// rejected batch yields the neutral HOLD report.
    pub fn analyze_batch(
        &self,
        ticker: TickerInfo,
        raw: Vec<RawObservation>,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let started = Instant::now();
        let mut records = self.normalize_batch(&ticker.symbol, raw);

        if self.noise_floor > 0.0 {
            records.retain(|r| r.sentiment.abs() >= self.noise_floor);
        }
        rank_by_relevance(&mut records, now);

        let stats = AggregateStats::from_records(&records, now);
        let assessment = Assessment::from_stats(&stats);
        let trend = TrendEntry::extract(&records);

        self.metrics.inc_analyses(&assessment.verdict.to_string());
        self.metrics
            .add_records_analyzed(&ticker.symbol, stats.total_records);
        self.metrics
            .set_confidence(&ticker.symbol, assessment.confidence_score);
        self.metrics
            .observe_analysis_latency(self.mode_label, started.elapsed().as_secs_f64());

        info!(
            "Analyzed {}: {} records, verdict {} (confidence {:.3})",
            ticker.symbol, stats.total_records, assessment.verdict, assessment.confidence_score
        );

        AnalysisReport {
            ticker,
            analyzed_at: now,
            stats,
            assessment,
            trend,
        }
    }

    async fn fetch_input(&self, symbol: &str) -> Result<(TickerInfo, Vec<RawObservation>)> {
        let info = self
            .directory
            .lookup(symbol)
            .await
            .with_context(|| format!("Ticker lookup failed for {symbol}"))?
            .unwrap_or_else(|| TickerInfo {
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                sector: "Unknown".to_string(),
            });

        let raw = self
            .supplier
            .fetch_records(symbol)
            .await
            .with_context(|| format!("Record fetch failed for {symbol}"))?;

        Ok((info, raw))
    }

    /// Normalize raw observations one by one. Invalid records are logged
    /// and counted, never fatal for the batch.
    fn normalize_batch(&self, symbol: &str, raw: Vec<RawObservation>) -> Vec<SentimentRecord> {
        let mut records = Vec::with_capacity(raw.len());
        for observation in raw {
            match SentimentRecord::normalize(observation) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!("Rejected record for {}: {}", symbol, reason);
                    self.metrics.inc_records_rejected(rejection_label(&reason));
                }
            }
        }
        records
    }
}

fn rejection_label(reason: &ValidationError) -> &'static str {
    match reason {
        ValidationError::EmptyText { .. } => "empty_text",
        ValidationError::EmptySource => "empty_source",
        ValidationError::MissingTimestamp { .. } => "missing_timestamp",
    }
}
