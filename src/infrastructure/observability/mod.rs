//! Observability for tickersense
//!
//! Metrics are collected in-process and exposed read-only through the HTTP
//! server's `/metrics` endpoint in Prometheus text format.

pub mod metrics;

pub use metrics::Metrics;
