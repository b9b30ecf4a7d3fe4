use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::sentiment::label::SentimentLabel;
use crate::domain::sentiment::record::SentimentRecord;

/// Maximum entries in a trend excerpt.
pub const TREND_LIMIT: usize = 10;
/// Maximum characters of record text carried per entry.
pub const TREND_TEXT_MAX_CHARS: usize = 200;

/// Compact excerpt of one record for presentation payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendEntry {
    pub text: String,
    pub source: String,
    pub sentiment: f64,
    pub label: SentimentLabel,
    pub observed_at: DateTime<Utc>,
}

impl TrendEntry {
    /// Take the first [`TREND_LIMIT`] records in the order presented,
    /// truncating text for display. No re-sorting here: callers decide
    /// what order is meaningful.
    pub fn extract(records: &[SentimentRecord]) -> Vec<TrendEntry> {
        records
            .iter()
            .take(TREND_LIMIT)
            .map(|record| TrendEntry {
                text: truncate_chars(&record.text, TREND_TEXT_MAX_CHARS),
                source: record.source.clone(),
                sentiment: record.sentiment,
                label: record.label(),
                observed_at: record.observed_at,
            })
            .collect()
    }
}

/// Truncate on a char boundary so multi-byte text never splits.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, sentiment: f64) -> SentimentRecord {
        SentimentRecord {
            text: text.to_string(),
            source: "Wire".to_string(),
            sentiment,
            observed_at: Utc::now(),
        }
    }

    #[test]
    fn test_extract_caps_at_limit() {
        let records: Vec<SentimentRecord> = (0..25)
            .map(|i| record(&format!("Headline {i}"), 0.1))
            .collect();
        let trend = TrendEntry::extract(&records);

        assert_eq!(trend.len(), TREND_LIMIT);
        assert_eq!(trend[0].text, "Headline 0");
        assert_eq!(trend[9].text, "Headline 9");
    }

    #[test]
    fn test_extract_preserves_input_order() {
        let records = vec![record("third", -0.5), record("first", 0.9), record("second", 0.2)];
        let trend = TrendEntry::extract(&records);

        let texts: Vec<&str> = trend.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_short_batch_yields_short_trend() {
        let records = vec![record("only one", 0.3)];
        let trend = TrendEntry::extract(&records);
        assert_eq!(trend.len(), 1);
    }

    #[test]
    fn test_text_truncation_is_char_safe() {
        let long_ascii = "x".repeat(450);
        let trend = TrendEntry::extract(&[record(&long_ascii, 0.1)]);
        assert_eq!(trend[0].text.chars().count(), TREND_TEXT_MAX_CHARS);

        let long_multibyte = "é".repeat(300);
        let trend = TrendEntry::extract(&[record(&long_multibyte, 0.1)]);
        assert_eq!(trend[0].text.chars().count(), TREND_TEXT_MAX_CHARS);
    }

    #[test]
    fn test_entries_carry_labels() {
        let trend = TrendEntry::extract(&[record("bad quarter", -0.6)]);
        assert_eq!(trend[0].label, SentimentLabel::Bearish);
    }
}
