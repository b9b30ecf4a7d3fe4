//! Ticker sentiment analysis CLI
//!
//! Runs the configured record supplier and the aggregation engine for one
//! or more tickers and prints a report to stdout. Analysis itself is never
//! fatal: a ticker with no data prints a neutral HOLD report. Nonzero exit
//! codes are reserved for configuration and I/O failures.

use anyhow::Result;
use clap::Parser;
use tickersense::application::analysis_service::AnalysisReport;
use tickersense::config::Config;
use tickersense::infrastructure::factory::ServiceFactory;
use tickersense::infrastructure::observability::Metrics;
use tickersense::interfaces::view_models::ReportViewModel;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Ticker sentiment analysis", long_about = None)]
struct Cli {
    /// Ticker symbol to analyze
    #[arg(short, long, default_value = "TSLA")]
    ticker: String,

    /// Comma-separated list of tickers; overrides --ticker
    #[arg(long)]
    tickers: Option<String>,

    /// Emit the JSON report payload instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    info!("Mode: {:?}", config.mode);

    let metrics = Metrics::new()?;
    let service = ServiceFactory::create_analysis_service(&config, metrics);

    let tickers: Vec<String> = match &cli.tickers {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => vec![cli.ticker.clone()],
    };

    let reports = service.analyze_many(&tickers).await?;

    for report in &reports {
        if cli.json {
            let view = ReportViewModel::from_report(report);
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print_report(report);
        }
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let view = ReportViewModel::from_report(report);
    let stats = &view.stats;

    println!("{}", "=".repeat(64));
    println!("{} — {} ({})", view.ticker, view.company, view.sector);
    println!("{}", "=".repeat(64));
    println!(
        "Verdict: {}  (confidence {:+.1}%, {} signal, {} data quality)",
        view.verdict, view.confidence_pct, view.signal_strength, view.data_quality
    );
    println!(
        "Records: {} total | {} bullish / {} neutral / {} bearish",
        stats.total_records, stats.bullish, stats.neutral, stats.bearish
    );
    println!(
        "Sentiment: avg {:+.2}% | volatility {:.2}% | momentum {:+.2}% | consensus {:.1}%",
        stats.avg_sentiment_pct, stats.volatility_pct, stats.momentum_pct, stats.consensus_pct
    );
    println!(
        "Coverage: {} articles in 24h ({:+.2}%), {} in 7d ({:+.2}%)",
        stats.articles_24h, stats.sentiment_24h_pct, stats.articles_7d, stats.sentiment_7d_pct
    );

    if !view.source_breakdown.is_empty() {
        println!("\nBy source:");
        for source in &view.source_breakdown {
            println!(
                "  {:<16} {} bullish / {} neutral / {} bearish ({} total)",
                source.source, source.bullish, source.neutral, source.bearish, source.total
            );
        }
    }

    if !view.headlines.is_empty() {
        println!("\nTop headlines:");
        for headline in &view.headlines {
            println!(
                "  [{:>8}] {:+6.1}%  {}  ({}, {})",
                headline.label,
                headline.score_pct,
                headline.text,
                headline.source,
                headline.time_ago
            );
        }
    }
    println!();
}
