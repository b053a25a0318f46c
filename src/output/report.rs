//! Report rendering for batch results
//!
//! Text output prints a summary block followed by one line per URL; JSON
//! output serializes both together for machine consumption.

use crate::analyzer::FetchResult;
use crate::output::Summary;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    results: &'a [FetchResult],
}

/// Prints the summary block to stdout
pub fn print_summary(summary: &Summary) {
    println!("\n=== Web Performance Summary ===");
    println!("Total Requests: {}", summary.total_requests);
    println!("Successful: {}", summary.successful_requests);
    println!("Failed: {}", summary.failed_requests);
    match summary.average_latency_ms {
        Some(avg) => println!("Average Latency: {} ms", avg),
        None => println!("Average Latency: n/a"),
    }
}

/// Prints one line per result to stdout, in input order
pub fn print_results(results: &[FetchResult]) {
    println!("\n=== Individual Results ===");
    for result in results {
        println!(
            "URL: {} | Status: {} | Latency: {} ms",
            result.url, result.outcome, result.latency_ms
        );
    }
}

/// Renders the summary and results as pretty-printed JSON
pub fn render_json(results: &[FetchResult], summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { summary, results })
}
