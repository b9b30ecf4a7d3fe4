use serde::{Deserialize, Serialize};
use std::fmt;

/// Deadband around zero: scores within [-0.05, +0.05] inclusive are neutral.
pub const SENTIMENT_DEADBAND: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Bullish,
    Neutral,
    Bearish,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Bearish => write!(f, "Bearish"),
        }
    }
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_DEADBAND {
            Self::Bullish
        } else if score < -SENTIMENT_DEADBAND {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Bullish => "#22C55E", // Green
            Self::Neutral => "#808080", // Gray
            Self::Bearish => "#EF4444", // Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_buckets() {
        assert_eq!(SentimentLabel::from_score(0.8), SentimentLabel::Bullish);
        assert_eq!(SentimentLabel::from_score(0.051), SentimentLabel::Bullish);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.051), SentimentLabel::Bearish);
        assert_eq!(SentimentLabel::from_score(-0.9), SentimentLabel::Bearish);
    }

    #[test]
    fn test_deadband_boundaries_are_neutral() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Neutral);
    }
}
