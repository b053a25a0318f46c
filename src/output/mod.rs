//! Output module for webperf
//!
//! Reduces batch results into summary statistics and renders reports.

mod report;
mod stats;

pub use report::{print_results, print_summary, render_json};
pub use stats::{summarize, Summary};
