use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::sentiment::aggregate::AggregateStats;

/// Record count at which volume coverage saturates.
pub const VOLUME_SATURATION: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::Buy => write!(f, "BUY"),
            Self::Hold => write!(f, "HOLD"),
            Self::Sell => write!(f, "SELL"),
            Self::StrongSell => write!(f, "STRONG SELL"),
        }
    }
}

impl Verdict {
    /// Map a signed confidence score onto the verdict ladder. HOLD owns
    /// both boundaries of its band, so an exact 0.10 is still HOLD and an
    /// exact -0.30 is still SELL.
    pub fn from_confidence(score: f64) -> Self {
        if score > 0.30 {
            Self::StrongBuy
        } else if score > 0.10 {
            Self::Buy
        } else if score >= -0.10 {
            Self::Hold
        } else if score >= -0.30 {
            Self::Sell
        } else {
            Self::StrongSell
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::StrongBuy => "#16A34A",
            Self::Buy => "#22C55E",
            Self::Hold => "#808080",
            Self::Sell => "#EF4444",
            Self::StrongSell => "#B91C1C",
        }
    }
}

/// How decisive the confidence score is, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong => write!(f, "Strong"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Weak => write!(f, "Weak"),
        }
    }
}

impl SignalStrength {
    pub fn from_confidence(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude > 0.15 {
            Self::Strong
        } else if magnitude > 0.05 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// How well the batch covers the ticker: volume and freshness, not
/// direction. Deliberately distinct from [`SignalStrength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataQuality {
    High,
    Moderate,
    Low,
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl DataQuality {
    pub fn from_coverage(score: f64) -> Self {
        if score > 0.7 {
            Self::High
        } else if score > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Final classification of an aggregation run: verdict plus the signed
/// confidence behind it and the two display labels derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub confidence_score: f64,
    pub signal_strength: SignalStrength,
    pub data_quality: DataQuality,
}

impl Assessment {
    pub fn from_stats(stats: &AggregateStats) -> Self {
        let recency_ratio = recency_ratio(stats);
        let recency_weight = 0.5 + 0.5 * recency_ratio;

        let confidence_score =
            (stats.avg_sentiment * stats.consensus_strength * recency_weight).clamp(-1.0, 1.0);

        let volume_coverage = (stats.total_records as f64 / VOLUME_SATURATION).min(1.0);
        let coverage = 0.5 * volume_coverage + 0.5 * recency_ratio;

        Self {
            verdict: Verdict::from_confidence(confidence_score),
            confidence_score,
            signal_strength: SignalStrength::from_confidence(confidence_score),
            data_quality: DataQuality::from_coverage(coverage),
        }
    }
}

/// Share of the 7-day batch that arrived in the last 24 hours. Zero when
/// the long window is empty.
pub fn recency_ratio(stats: &AggregateStats) -> f64 {
    stats.articles_24h as f64 / stats.articles_7d.max(1) as f64
}
