use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::sentiment::label::SentimentLabel;

/// One scored article or comment as delivered by an upstream provider
/// adapter. Scoring happens upstream; this crate only aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservation {
    pub text: String,
    pub source: String,
    pub sentiment: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Validated record. `sentiment` is guaranteed to lie in [-1.0, 1.0] and
/// `observed_at` is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub text: String,
    pub source: String,
    pub sentiment: f64,
    pub observed_at: DateTime<Utc>,
}

impl SentimentRecord {
    /// Normalize a raw observation into a canonical record.
    ///
    /// Out-of-range scores are clamped rather than rejected; missing
    /// timestamps and blank text/source fields reject the record.
    pub fn normalize(raw: RawObservation) -> Result<Self, ValidationError> {
        let source = raw.source.trim();
        if source.is_empty() {
            return Err(ValidationError::EmptySource);
        }

        let text = raw.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText {
                provider: source.to_string(),
            });
        }

        let observed_at = raw.observed_at.ok_or_else(|| ValidationError::MissingTimestamp {
            provider: source.to_string(),
        })?;

        Ok(Self {
            text: text.to_string(),
            source: source.to_string(),
            sentiment: raw.sentiment.clamp(-1.0, 1.0),
            observed_at,
        })
    }

    /// Fractional hours elapsed since the record was observed. Records
    /// timestamped in the future count as age zero so they always fall
    /// inside every time window.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        let elapsed_secs = (now - self.observed_at).num_milliseconds() as f64 / 1000.0;
        (elapsed_secs / 3600.0).max(0.0)
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment)
    }
}
