//! Prometheus metrics definitions for tickersense
//!
//! All metrics use the `tickersense_` prefix and are read-only.

use prometheus::{
    CounterVec, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGaugeVec},
};
use std::sync::Arc;

/// Prometheus metrics for the analysis service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Completed analyses by verdict
    pub analyses_total: CounterVec,
    /// Records that passed normalization, by ticker
    pub records_analyzed_total: CounterVec,
    /// Records rejected during normalization, by reason
    pub records_rejected_total: CounterVec,
    /// End-to-end analysis latency in seconds
    pub analysis_latency_seconds: HistogramVec,
    /// Last confidence score per ticker (-1 to 1)
    pub confidence_score: GenericGaugeVec<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all counters and gauges registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let analyses_total = CounterVec::new(
            Opts::new("tickersense_analyses_total", "Completed analyses by verdict"),
            &["verdict"],
        )?;
        registry.register(Box::new(analyses_total.clone()))?;

        let records_analyzed_total = CounterVec::new(
            Opts::new(
                "tickersense_records_analyzed_total",
                "Records that passed normalization",
            ),
            &["ticker"],
        )?;
        registry.register(Box::new(records_analyzed_total.clone()))?;

        let records_rejected_total = CounterVec::new(
            Opts::new(
                "tickersense_records_rejected_total",
                "Records rejected during normalization",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(records_rejected_total.clone()))?;

        let analysis_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "tickersense_analysis_latency_seconds",
                "End-to-end analysis latency in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["mode"],
        )?;
        registry.register(Box::new(analysis_latency_seconds.clone()))?;

        let confidence_score = GaugeVec::new(
            Opts::new(
                "tickersense_confidence_score",
                "Last confidence score per ticker (-1 to 1)",
            ),
            &["ticker"],
        )?;
        registry.register(Box::new(confidence_score.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            analyses_total,
            records_analyzed_total,
            records_rejected_total,
            analysis_latency_seconds,
            confidence_score,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Increment the analysis counter for a verdict
    pub fn inc_analyses(&self, verdict: &str) {
        self.analyses_total.with_label_values(&[verdict]).inc();
    }

    /// Add to the analyzed-record counter for a ticker
    pub fn add_records_analyzed(&self, ticker: &str, count: usize) {
        self.records_analyzed_total
            .with_label_values(&[ticker])
            .inc_by(count as f64);
    }

    /// Increment the rejected-record counter for a reason
    pub fn inc_records_rejected(&self, reason: &str) {
        self.records_rejected_total
            .with_label_values(&[reason])
            .inc();
    }

    /// Observe analysis latency
    pub fn observe_analysis_latency(&self, mode: &str, latency: f64) {
        self.analysis_latency_seconds
            .with_label_values(&[mode])
            .observe(latency);
    }

    /// Update the last confidence score for a ticker
    pub fn set_confidence(&self, ticker: &str, score: f64) {
        self.confidence_score.with_label_values(&[ticker]).set(score);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create default Metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        assert!(metrics.render().contains("tickersense_"));
    }

    #[test]
    fn test_analysis_counter() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_analyses("BUY");
        metrics.inc_analyses("HOLD");
        let output = metrics.render();
        assert!(output.contains("tickersense_analyses_total"));
        assert!(output.contains("BUY"));
    }

    #[test]
    fn test_confidence_per_ticker() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.set_confidence("TSLA", 0.42);
        metrics.set_confidence("GME", -0.18);
        let output = metrics.render();
        assert!(output.contains("tickersense_confidence_score"));
        assert!(output.contains("TSLA"));
        assert!(output.contains("GME"));
    }

    #[test]
    fn test_rejection_counter() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_records_rejected("missing_timestamp");
        let output = metrics.render();
        assert!(output.contains("tickersense_records_rejected_total"));
        assert!(output.contains("missing_timestamp"));
    }
}
