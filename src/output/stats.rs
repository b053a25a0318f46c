//! Aggregate statistics over a completed batch
//!
//! A pure reduction from the result sequence to summary counters; no part
//! of the concurrent machinery reaches in here.

use crate::analyzer::FetchResult;
use serde::Serialize;

/// Summary counters for one batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of URLs measured
    pub total_requests: usize,

    /// Requests that completed with an HTTP status below 400
    pub successful_requests: usize,

    /// Everything else: 4xx/5xx statuses and transport failures
    pub failed_requests: usize,

    /// Mean latency across all results, rounded to two decimals;
    /// None for an empty batch
    pub average_latency_ms: Option<f64>,
}

/// Reduces a result sequence into summary counters
///
/// Latency is averaged over every result, failures included, since a
/// latency is measured for failures too.
pub fn summarize(results: &[FetchResult]) -> Summary {
    let total = results.len();
    let successful = results
        .iter()
        .filter(|result| result.outcome.is_success())
        .count();

    let average_latency_ms = if total > 0 {
        let sum: f64 = results.iter().map(|result| result.latency_ms).sum();
        Some(((sum / total as f64) * 100.0).round() / 100.0)
    } else {
        None
    };

    Summary {
        total_requests: total,
        successful_requests: successful,
        failed_requests: total - successful,
        average_latency_ms,
    }
}
