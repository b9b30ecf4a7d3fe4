//! Display-ready projection of an analysis report.
//!
//! All percentage conversion and rounding happens here so the engine can
//! stay fractional end to end. The shapes below are the public JSON
//! contract served over HTTP and printed by the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::analysis_service::AnalysisReport;
use crate::domain::sentiment::aggregate::AggregateStats;
use crate::domain::sentiment::trend::TrendEntry;
use crate::domain::sentiment::verdict::{VOLUME_SATURATION, recency_ratio};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportViewModel {
    pub ticker: String,
    pub company: String,
    pub sector: String,
    pub analyzed_at: DateTime<Utc>,
    pub verdict: String,
    pub confidence_pct: f64,
    pub signal_strength: String,
    pub data_quality: String,
    pub stats: StatsView,
    pub market_strength: MarketStrengthView,
    pub source_breakdown: Vec<SourceView>,
    pub headlines: Vec<HeadlineView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsView {
    pub total_records: usize,
    pub bullish: usize,
    pub neutral: usize,
    pub bearish: usize,
    pub bullish_pct: f64,
    pub neutral_pct: f64,
    pub bearish_pct: f64,
    pub avg_sentiment_pct: f64,
    pub volatility_pct: f64,
    pub momentum_pct: f64,
    pub consensus_pct: f64,
    pub articles_24h: usize,
    pub articles_7d: usize,
    pub sentiment_24h_pct: f64,
    pub sentiment_7d_pct: f64,
}

/// Radar axes, each scaled to 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketStrengthView {
    pub sentiment: f64,
    pub consensus: f64,
    pub recency: f64,
    pub volume: f64,
    pub stability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceView {
    pub source: String,
    pub bullish: usize,
    pub neutral: usize,
    pub bearish: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineView {
    pub text: String,
    pub source: String,
    pub score_pct: f64,
    pub label: String,
    pub hours_old: f64,
    pub time_ago: String,
}

impl ReportViewModel {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let stats = &report.stats;

        Self {
            ticker: report.ticker.symbol.clone(),
            company: report.ticker.name.clone(),
            sector: report.ticker.sector.clone(),
            analyzed_at: report.analyzed_at,
            verdict: report.assessment.verdict.to_string(),
            confidence_pct: round1(report.assessment.confidence_score * 100.0),
            signal_strength: report.assessment.signal_strength.to_string(),
            data_quality: report.assessment.data_quality.to_string(),
            stats: StatsView::from_stats(stats),
            market_strength: MarketStrengthView::from_stats(stats),
            source_breakdown: stats
                .source_breakdown
                .iter()
                .map(|s| SourceView {
                    source: s.source.clone(),
                    bullish: s.bullish,
                    neutral: s.neutral,
                    bearish: s.bearish,
                    total: s.total,
                })
                .collect(),
            headlines: report
                .trend
                .iter()
                .map(|entry| HeadlineView::from_entry(entry, report.analyzed_at))
                .collect(),
        }
    }
}

impl StatsView {
    fn from_stats(stats: &AggregateStats) -> Self {
        let share = |count: usize| {
            if stats.total_records == 0 {
                0.0
            } else {
                round1(count as f64 / stats.total_records as f64 * 100.0)
            }
        };

        Self {
            total_records: stats.total_records,
            bullish: stats.bullish_count,
            neutral: stats.neutral_count,
            bearish: stats.bearish_count,
            bullish_pct: share(stats.bullish_count),
            neutral_pct: share(stats.neutral_count),
            bearish_pct: share(stats.bearish_count),
            avg_sentiment_pct: round2(stats.avg_sentiment * 100.0),
            volatility_pct: round2(stats.volatility * 100.0),
            momentum_pct: round2(stats.momentum * 100.0),
            consensus_pct: round1(stats.consensus_strength * 100.0),
            articles_24h: stats.articles_24h,
            articles_7d: stats.articles_7d,
            sentiment_24h_pct: round2(stats.sentiment_24h * 100.0),
            sentiment_7d_pct: round2(stats.sentiment_7d * 100.0),
        }
    }
}

impl MarketStrengthView {
    fn from_stats(stats: &AggregateStats) -> Self {
        let volume = (stats.total_records as f64 / VOLUME_SATURATION).min(1.0);
        let stability = (1.0 - stats.volatility).max(0.0);

        Self {
            sentiment: round1((stats.avg_sentiment + 1.0) / 2.0 * 100.0),
            consensus: round1(stats.consensus_strength * 100.0),
            recency: round1(recency_ratio(stats) * 100.0),
            volume: round1(volume * 100.0),
            stability: round1(stability * 100.0),
        }
    }
}

impl HeadlineView {
    fn from_entry(entry: &TrendEntry, analyzed_at: DateTime<Utc>) -> Self {
        let hours_old =
            ((analyzed_at - entry.observed_at).num_milliseconds() as f64 / 3_600_000.0).max(0.0);

        Self {
            text: entry.text.clone(),
            source: entry.source.clone(),
            score_pct: round1(entry.sentiment * 100.0),
            label: entry.label.to_string().to_lowercase(),
            hours_old: round1(hours_old),
            time_ago: time_ago(hours_old),
        }
    }
}

/// Humanize an age in hours: minutes under an hour, hours under a day,
/// whole days beyond that.
fn time_ago(hours: f64) -> String {
    if hours < 1.0 {
        format!("{}m ago", (hours * 60.0).floor() as i64)
    } else if hours < 24.0 {
        format!("{}h ago", hours.floor() as i64)
    } else {
        format!("{}d ago", (hours / 24.0).floor() as i64)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TickerInfo;
    use crate::domain::sentiment::record::SentimentRecord;
    use crate::domain::sentiment::verdict::Assessment;
    use chrono::Duration;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    fn sample_report() -> AnalysisReport {
        let now = fixed_now();
        let records = vec![
            SentimentRecord {
                text: "Earnings beat across the board".to_string(),
                source: "Yahoo Finance".to_string(),
                sentiment: 0.8,
                observed_at: now - Duration::hours(1),
            },
            SentimentRecord {
                text: "Strong guidance for next quarter".to_string(),
                source: "Seeking Alpha".to_string(),
                sentiment: 0.6,
                observed_at: now - Duration::hours(30),
            },
            SentimentRecord {
                text: "Some profit taking expected".to_string(),
                source: "Yahoo Finance".to_string(),
                sentiment: -0.2,
                observed_at: now - Duration::hours(100),
            },
        ];
        let stats = AggregateStats::from_records(&records, now);
        let assessment = Assessment::from_stats(&stats);
        let trend = TrendEntry::extract(&records);

        AnalysisReport {
            ticker: TickerInfo {
                symbol: "TSLA".to_string(),
                name: "Tesla, Inc.".to_string(),
                sector: "Consumer Cyclical".to_string(),
            },
            analyzed_at: now,
            stats,
            assessment,
            trend,
        }
    }

    #[test]
    fn test_percentages_are_scaled_and_rounded() {
        let view = ReportViewModel::from_report(&sample_report());

        assert_eq!(view.stats.avg_sentiment_pct, 40.0);
        assert_eq!(view.stats.bullish_pct, 66.7);
        assert_eq!(view.stats.bearish_pct, 33.3);
        assert_eq!(view.stats.consensus_pct, 33.3);
        // 0.4 * (1/3) * (0.5 + 0.5/3) = 0.0889
        assert_eq!(view.confidence_pct, 8.9);
    }

    #[test]
    fn test_market_strength_axes() {
        let view = ReportViewModel::from_report(&sample_report());
        let strength = &view.market_strength;

        // ((0.4 + 1) / 2) * 100
        assert_eq!(strength.sentiment, 70.0);
        assert_eq!(strength.consensus, 33.3);
        // 1 of 3 records inside 24h
        assert_eq!(strength.recency, 33.3);
        // 3 of 50 records
        assert_eq!(strength.volume, 6.0);
        assert!(strength.stability > 0.0 && strength.stability < 100.0);
    }

    #[test]
    fn test_headlines_carry_display_fields() {
        let view = ReportViewModel::from_report(&sample_report());
        let lead = &view.headlines[0];

        assert_eq!(lead.text, "Earnings beat across the board");
        assert_eq!(lead.score_pct, 80.0);
        assert_eq!(lead.label, "bullish");
        assert_eq!(lead.hours_old, 1.0);
        assert_eq!(lead.time_ago, "1h ago");
    }

    #[test]
    fn test_verdict_and_labels_are_display_strings() {
        let view = ReportViewModel::from_report(&sample_report());
        assert_eq!(view.verdict, "HOLD");
        assert_eq!(view.signal_strength, "Moderate");
        assert_eq!(view.data_quality, "Low");
    }

    #[test]
    fn test_empty_report_renders_without_division_errors() {
        let report = AnalysisReport {
            ticker: TickerInfo {
                symbol: "ZZZZ".to_string(),
                name: "ZZZZ".to_string(),
                sector: "Unknown".to_string(),
            },
            analyzed_at: fixed_now(),
            stats: AggregateStats::default(),
            assessment: Assessment::from_stats(&AggregateStats::default()),
            trend: Vec::new(),
        };
        let view = ReportViewModel::from_report(&report);

        assert_eq!(view.verdict, "HOLD");
        assert_eq!(view.confidence_pct, 0.0);
        assert_eq!(view.stats.bullish_pct, 0.0);
        assert_eq!(view.market_strength.sentiment, 50.0);
        assert_eq!(view.market_strength.stability, 100.0);
        assert!(view.headlines.is_empty());
    }

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(time_ago(0.0), "0m ago");
        assert_eq!(time_ago(0.5), "30m ago");
        assert_eq!(time_ago(1.0), "1h ago");
        assert_eq!(time_ago(23.9), "23h ago");
        assert_eq!(time_ago(24.0), "1d ago");
        assert_eq!(time_ago(100.0), "4d ago");
    }
}
