//! Analyzer module for concurrent URL fetching and measurement
//!
//! This module contains the core measurement logic, including:
//! - HTTP fetching with per-request timeouts and failure classification
//! - Concurrency bounding via a counting permit pool
//! - Per-completion notification
//! - Batch orchestration with submission-order result collection

mod admission;
mod fetcher;
mod notify;
mod orchestrator;

pub use admission::{AdmissionController, AdmissionPermit};
pub use fetcher::{build_http_client, fetch_url, FailureKind, FetchResult, Outcome};
pub use notify::{Notifier, ProgressPrinter};
pub use orchestrator::run_batch;
