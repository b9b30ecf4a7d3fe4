use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::domain::sentiment::label::SentimentLabel;
use crate::domain::sentiment::record::SentimentRecord;

/// Short recency window, in hours.
pub const WINDOW_24H: f64 = 24.0;
/// Long recency window, in hours (7 days).
pub const WINDOW_7D: f64 = 168.0;

/// Per-source bucket tallies, ordered by first appearance in the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceStats {
    pub source: String,
    pub bullish: usize,
    pub neutral: usize,
    pub bearish: usize,
    pub total: usize,
}

impl SourceStats {
    fn new(source: String) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

/// Snapshot of one aggregation run over a record batch.
///
/// Every field is total over its input: an empty batch produces the
/// all-zero snapshot rather than an error, and every ratio substitutes a
/// defined fallback for a zero denominator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_records: usize,
    pub bullish_count: usize,
    pub neutral_count: usize,
    pub bearish_count: usize,
    pub bullish_ratio: f64,
    pub bearish_ratio: f64,
    pub avg_sentiment: f64,
    pub volatility: f64,
    pub momentum: f64,
    pub consensus_strength: f64,
    pub articles_24h: usize,
    pub articles_7d: usize,
    pub sentiment_24h: f64,
    pub sentiment_7d: f64,
    pub source_breakdown: Vec<SourceStats>,
}

impl AggregateStats {
    /// Aggregate a batch of validated records against a fixed observation
    /// instant. Pure: the same `(records, now)` pair always produces the
    /// same snapshot.
    pub fn from_records(records: &[SentimentRecord], now: DateTime<Utc>) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let scores: Vec<f64> = records.iter().map(|r| r.sentiment).collect();
        let total = records.len();

        let mut bullish = 0usize;
        let mut neutral = 0usize;
        let mut bearish = 0usize;
        for record in records {
            match record.label() {
                SentimentLabel::Bullish => bullish += 1,
                SentimentLabel::Neutral => neutral += 1,
                SentimentLabel::Bearish => bearish += 1,
            }
        }

        let (articles_24h, sentiment_24h) = window_stats(records, now, WINDOW_24H);
        let (articles_7d, sentiment_7d) = window_stats(records, now, WINDOW_7D);

        Self {
            total_records: total,
            bullish_count: bullish,
            neutral_count: neutral,
            bearish_count: bearish,
            bullish_ratio: bullish as f64 / total as f64,
            bearish_ratio: bearish as f64 / total as f64,
            avg_sentiment: scores.iter().mean(),
            volatility: volatility(&scores),
            momentum: momentum(records),
            consensus_strength: consensus_strength(bullish, bearish),
            articles_24h,
            articles_7d,
            sentiment_24h,
            sentiment_7d,
            source_breakdown: source_breakdown(records),
        }
    }
}

/// Record count and mean sentiment for records strictly younger than
/// `window_hours`. An empty window reports a mean of zero.
fn window_stats(
    records: &[SentimentRecord],
    now: DateTime<Utc>,
    window_hours: f64,
) -> (usize, f64) {
    let scores: Vec<f64> = records
        .iter()
        .filter(|r| r.age_hours(now) < window_hours)
        .map(|r| r.sentiment)
        .collect();

    if scores.is_empty() {
        (0, 0.0)
    } else {
        let mean = scores.iter().mean();
        (scores.len(), mean)
    }
}

/// Population standard deviation of the score distribution. Zero below
/// two records, where dispersion is undefined.
fn volatility(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 0.0;
    }
    scores.iter().population_std_dev()
}

/// Mean sentiment of the newer half minus the older half, on records
/// sorted by observation time ascending. With an odd count the extra
/// record joins the newer half. Zero below two records.
fn momentum(records: &[SentimentRecord]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }

    let mut by_time: Vec<&SentimentRecord> = records.iter().collect();
    by_time.sort_by_key(|r| r.observed_at);

    let split = by_time.len() / 2;
    let older: Vec<f64> = by_time[..split].iter().map(|r| r.sentiment).collect();
    let newer: Vec<f64> = by_time[split..].iter().map(|r| r.sentiment).collect();

    newer.iter().mean() - older.iter().mean()
}

/// |2p - 1| where p is the bullish share of directional (non-neutral)
/// records. A fully neutral batch has no directional signal and scores 0.
fn consensus_strength(bullish: usize, bearish: usize) -> f64 {
    let directional = bullish + bearish;
    if directional == 0 {
        return 0.0;
    }
    let p = bullish as f64 / directional as f64;
    (2.0 * p - 1.0).abs()
}

/// Bucket tallies grouped by source, preserving first-appearance order of
/// each source in the batch. Sources never seen are never synthesized.
fn source_breakdown(records: &[SentimentRecord]) -> Vec<SourceStats> {
    let mut breakdown: Vec<SourceStats> = Vec::new();

    for record in records {
        let index = match breakdown.iter().position(|s| s.source == record.source) {
            Some(i) => i,
            None => {
                breakdown.push(SourceStats::new(record.source.clone()));
                breakdown.len() - 1
            }
        };

        let entry = &mut breakdown[index];
        entry.total += 1;
        match record.label() {
            SentimentLabel::Bullish => entry.bullish += 1,
            SentimentLabel::Neutral => entry.neutral += 1,
            SentimentLabel::Bearish => entry.bearish += 1,
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(sentiment: f64, hours_ago: i64, source: &str) -> SentimentRecord {
        SentimentRecord {
            text: format!("Headline {sentiment}"),
            source: source.to_string(),
            sentiment,
            observed_at: fixed_now() - Duration::hours(hours_ago),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_empty_batch_is_all_zero() {
        let stats = AggregateStats::from_records(&[], fixed_now());
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.avg_sentiment, 0.0);
        assert_eq!(stats.volatility, 0.0);
        assert_eq!(stats.momentum, 0.0);
        assert_eq!(stats.consensus_strength, 0.0);
        assert_eq!(stats.articles_24h, 0);
        assert_eq!(stats.articles_7d, 0);
        assert_eq!(stats.sentiment_24h, 0.0);
        assert!(stats.source_breakdown.is_empty());
    }

    #[test]
    fn test_counts_partition_the_batch() {
        let records = vec![
            record(0.8, 1, "Reuters"),
            record(0.05, 2, "Reuters"),
            record(-0.05, 3, "Bloomberg"),
            record(-0.4, 4, "Bloomberg"),
            record(0.0, 5, "WSJ"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(stats.bullish_count, 1);
        assert_eq!(stats.neutral_count, 3);
        assert_eq!(stats.bearish_count, 1);
        assert_eq!(
            stats.bullish_count + stats.neutral_count + stats.bearish_count,
            stats.total_records
        );
        assert!((stats.bullish_ratio - 0.2).abs() < 1e-12);
        assert!((stats.bearish_ratio - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_windows_are_strict_and_nested() {
        let records = vec![
            record(0.5, 23, "Wire"),  // inside both
            record(0.5, 24, "Wire"),  // exactly 24h: outside short window
            record(0.5, 100, "Wire"), // inside 7d only
            record(0.5, 168, "Wire"), // exactly 7d: outside both
            record(0.5, 500, "Wire"), // outside both
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(stats.articles_24h, 1);
        assert_eq!(stats.articles_7d, 3);
        assert!(stats.articles_24h <= stats.articles_7d);
        assert_eq!(stats.total_records, 5);
    }

    #[test]
    fn test_window_means_default_to_zero() {
        let records = vec![record(0.9, 200, "Wire"), record(-0.9, 300, "Wire")];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(stats.articles_24h, 0);
        assert_eq!(stats.sentiment_24h, 0.0);
        assert_eq!(stats.articles_7d, 0);
        assert_eq!(stats.sentiment_7d, 0.0);
        // Whole-batch stats still cover every record.
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.avg_sentiment, 0.0);
    }

    #[test]
    fn test_volatility_is_population_std_dev() {
        let records = vec![
            record(0.8, 1, "Wire"),
            record(0.6, 2, "Wire"),
            record(-0.2, 3, "Wire"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        // mean 0.4, squared deviations 0.16 + 0.04 + 0.36, over n (not n-1)
        let expected = (0.56f64 / 3.0).sqrt();
        assert!((stats.volatility - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_record_has_no_dispersion_or_momentum() {
        let records = vec![record(0.7, 1, "Wire")];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(stats.volatility, 0.0);
        assert_eq!(stats.momentum, 0.0);
        assert_eq!(stats.avg_sentiment, 0.7);
        assert_eq!(stats.bullish_count, 1);
    }

    #[test]
    fn test_momentum_odd_record_joins_newer_half() {
        // Oldest first after sorting: -0.2 (100h), 0.6 (30h), 0.8 (1h).
        // Older half is [-0.2], newer half is [0.6, 0.8].
        let records = vec![
            record(0.8, 1, "Wire"),
            record(-0.2, 100, "Wire"),
            record(0.6, 30, "Wire"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert!((stats.momentum - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_ignores_input_order() {
        let mut records = vec![
            record(0.1, 50, "Wire"),
            record(0.9, 2, "Wire"),
            record(-0.3, 90, "Wire"),
            record(0.5, 10, "Wire"),
        ];
        let forward = AggregateStats::from_records(&records, fixed_now());
        records.reverse();
        let reversed = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(forward.momentum, reversed.momentum);
    }

    #[test]
    fn test_consensus_ignores_neutral_records() {
        let records = vec![
            record(0.8, 1, "Wire"),
            record(0.6, 2, "Wire"),
            record(0.0, 3, "Wire"),
            record(0.01, 4, "Wire"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        // All directional records agree: full consensus.
        assert_eq!(stats.consensus_strength, 1.0);
    }

    #[test]
    fn test_consensus_all_neutral_is_zero() {
        let records = vec![record(0.0, 1, "Wire"), record(0.02, 2, "Wire")];
        let stats = AggregateStats::from_records(&records, fixed_now());

        assert_eq!(stats.consensus_strength, 0.0);
    }

    #[test]
    fn test_consensus_split_opinions() {
        let records = vec![
            record(0.8, 1, "Wire"),
            record(0.7, 2, "Wire"),
            record(-0.6, 3, "Wire"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        // p = 2/3, |2p - 1| = 1/3
        assert!((stats.consensus_strength - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_source_breakdown_first_appearance_order() {
        let records = vec![
            record(0.8, 1, "Reuters"),
            record(-0.4, 2, "Bloomberg"),
            record(0.0, 3, "Reuters"),
            record(0.6, 4, "WSJ"),
            record(0.3, 5, "Bloomberg"),
        ];
        let stats = AggregateStats::from_records(&records, fixed_now());

        let order: Vec<&str> = stats
            .source_breakdown
            .iter()
            .map(|s| s.source.as_str())
            .collect();
        assert_eq!(order, vec!["Reuters", "Bloomberg", "WSJ"]);

        let reuters = &stats.source_breakdown[0];
        assert_eq!(reuters.bullish, 1);
        assert_eq!(reuters.neutral, 1);
        assert_eq!(reuters.bearish, 0);
        assert_eq!(reuters.total, 2);

        let bloomberg = &stats.source_breakdown[1];
        assert_eq!(bloomberg.bullish, 1);
        assert_eq!(bloomberg.bearish, 1);
        assert_eq!(bloomberg.total, 2);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let records = vec![
            record(0.8, 1, "Reuters"),
            record(0.6, 30, "Bloomberg"),
            record(-0.2, 100, "WSJ"),
        ];
        let now = fixed_now();

        let first = AggregateStats::from_records(&records, now);
        let second = AggregateStats::from_records(&records, now);

        assert_eq!(first.avg_sentiment, second.avg_sentiment);
        assert_eq!(first.volatility, second.volatility);
        assert_eq!(first.momentum, second.momentum);
        assert_eq!(first.consensus_strength, second.consensus_strength);
        assert_eq!(first.articles_24h, second.articles_24h);
    }
}
