use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::ports::RecordSupplier;
use crate::domain::sentiment::record::RawObservation;

/// Curated in-memory record batches for a handful of well-known tickers.
///
/// Timestamps are offsets from the current instant so recency windows and
/// momentum behave the way they would on live data. Unknown tickers get a
/// small neutral batch rather than an error.
pub struct DemoSupplier;

impl DemoSupplier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoSupplier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSupplier for DemoSupplier {
    async fn fetch_records(&self, ticker: &str) -> Result<Vec<RawObservation>> {
        let now = Utc::now();
        let batch = match ticker.to_ascii_uppercase().as_str() {
            "TSLA" => tsla_batch(now),
            "GME" => gme_batch(now),
            "AAPL" => aapl_batch(now),
            "NVDA" => nvda_batch(now),
            other => {
                debug!("No curated batch for {}, serving generic demo data", other);
                generic_batch(now)
            }
        };
        Ok(batch)
    }
}

fn observation(
    now: DateTime<Utc>,
    hours_ago: i64,
    text: &str,
    source: &str,
    sentiment: f64,
) -> RawObservation {
    RawObservation {
        text: text.to_string(),
        source: source.to_string(),
        sentiment,
        observed_at: Some(now - Duration::hours(hours_ago)),
    }
}

fn tsla_batch(now: DateTime<Utc>) -> Vec<RawObservation> {
    vec![
        observation(
            now,
            2,
            "Tesla's production numbers are through the roof! Q4 delivery beat expectations significantly.",
            "Yahoo Finance",
            0.891,
        ),
        observation(
            now,
            5,
            "FSD Beta is getting really impressive. Tried it yesterday and was blown away by the improvements.",
            "Seeking Alpha",
            0.847,
        ),
        observation(
            now,
            9,
            "Energy division revenue up 120% YoY. This is becoming a major profit center.",
            "Google News",
            0.823,
        ),
        observation(
            now,
            18,
            "Competition is heating up but Tesla still has the tech advantage and scale.",
            "Yahoo Finance",
            0.756,
        ),
        observation(
            now,
            30,
            "Cybertruck orders exceeding expectations. Pre-orders at all-time high.",
            "Finnhub",
            0.734,
        ),
        observation(
            now,
            48,
            "Stock might be overvalued short term, taking some profits here.",
            "Seeking Alpha",
            -0.456,
        ),
        observation(
            now,
            72,
            "Great company but valuation seems stretched at current levels.",
            "Google News",
            -0.378,
        ),
        observation(
            now,
            110,
            "Holding long term. Musk's vision continues to deliver results.",
            "Yahoo Finance",
            0.689,
        ),
    ]
}

fn gme_batch(now: DateTime<Utc>) -> Vec<RawObservation> {
    vec![
        observation(
            now,
            1,
            "Ryan Cohen's strategy is paying off. E-commerce growth is solid.",
            "Yahoo Finance",
            0.812,
        ),
        observation(
            now,
            6,
            "Fundamentals improving quarter over quarter. Real turnaround story.",
            "Seeking Alpha",
            0.776,
        ),
        observation(
            now,
            14,
            "Diamond hands! This company is transforming into something special.",
            "Google News",
            0.745,
        ),
        observation(
            now,
            40,
            "New partnership announcements looking promising for future revenue.",
            "Finnhub",
            0.698,
        ),
        observation(
            now,
            70,
            "Still overvalued compared to earnings. Waiting for better entry point.",
            "Seeking Alpha",
            -0.512,
        ),
        observation(
            now,
            120,
            "Retail stores closing but online sales compensating well.",
            "Google News",
            0.234,
        ),
    ]
}

fn aapl_batch(now: DateTime<Utc>) -> Vec<RawObservation> {
    vec![
        observation(
            now,
            3,
            "iPhone 16 sales exceeding projections. Services revenue hitting new records.",
            "Yahoo Finance",
            0.865,
        ),
        observation(
            now,
            8,
            "Apple Vision Pro adoption better than expected. This could be huge.",
            "Google News",
            0.834,
        ),
        observation(
            now,
            16,
            "Dividend increase and buyback program shows strong cash position.",
            "Seeking Alpha",
            0.798,
        ),
        observation(
            now,
            36,
            "Warren Buffett continues to hold massive position. That says something.",
            "Yahoo Finance",
            0.756,
        ),
        observation(
            now,
            60,
            "China sales declining slightly but overall global growth solid.",
            "Finnhub",
            0.145,
        ),
        observation(
            now,
            96,
            "Stock feels expensive at these levels but quality always costs premium.",
            "Seeking Alpha",
            0.023,
        ),
    ]
}

fn nvda_batch(now: DateTime<Utc>) -> Vec<RawObservation> {
    vec![
        observation(
            now,
            1,
            "AI chip demand is absolutely insane. They can't manufacture fast enough.",
            "Yahoo Finance",
            0.923,
        ),
        observation(
            now,
            4,
            "Data center revenue grew 300% YoY. This is unprecedented growth.",
            "Seeking Alpha",
            0.901,
        ),
        observation(
            now,
            10,
            "Every major tech company scrambling to get their GPUs. Total dominance.",
            "Google News",
            0.887,
        ),
        observation(
            now,
            22,
            "New Blackwell architecture pre-orders already sold out for next year.",
            "Finnhub",
            0.856,
        ),
        observation(
            now,
            45,
            "Partnership with OpenAI, Microsoft, Google - basically powering entire AI revolution.",
            "Yahoo Finance",
            0.834,
        ),
        observation(
            now,
            90,
            "Gaming segment still strong despite focus shifting to enterprise.",
            "Google News",
            0.789,
        ),
        observation(
            now,
            140,
            "Stock split making it more accessible to retail investors. Smart move.",
            "Seeking Alpha",
            0.745,
        ),
    ]
}

fn generic_batch(now: DateTime<Utc>) -> Vec<RawObservation> {
    vec![
        observation(
            now,
            4,
            "This is demo data. Configure a record supplier for real analysis.",
            "Yahoo Finance",
            0.0,
        ),
        observation(
            now,
            20,
            "Waiting for market to show clearer direction before taking position.",
            "Google News",
            0.123,
        ),
        observation(
            now,
            50,
            "Fundamentals look okay but nothing exciting at current valuation.",
            "Seeking Alpha",
            0.045,
        ),
    ]
}
