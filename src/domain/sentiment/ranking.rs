use chrono::{DateTime, Utc};

use crate::domain::sentiment::record::SentimentRecord;

/// Relevance weight of a record: raw sentiment scaled by a logarithmic
/// recency decay over whole days, flat beyond a week.
pub fn relevance_weight(record: &SentimentRecord, now: DateTime<Utc>) -> f64 {
    let age_days = (record.age_hours(now) / 24.0).floor().min(7.0);
    let freshness = (7.0 - age_days).max(1.0);
    record.sentiment * (freshness + 1.0).ln()
}

/// Order records by descending relevance magnitude so the strongest,
/// freshest opinions lead the batch. Stable: ties keep input order.
pub fn rank_by_relevance(records: &mut [SentimentRecord], now: DateTime<Utc>) {
    records.sort_by(|a, b| {
        let wa = relevance_weight(a, now).abs();
        let wb = relevance_weight(b, now).abs();
        wb.partial_cmp(&wa).unwrap_or(std::cmp::Ordering::Equal)
    });
}
