//! Webperf: a concurrency-bounded web latency analyzer
//!
//! This crate fires many independent HTTP requests against a batch of URLs,
//! measures per-request latency and outcome, and reduces the results into
//! summary statistics, while bounding how many requests are in flight at
//! any moment.

pub mod analyzer;
pub mod config;
pub mod input;
pub mod output;

use thiserror::Error;

/// Main error type for webperf operations
#[derive(Debug, Error)]
pub enum WebperfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Load(#[from] LoadError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Batch worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors from loading the input URL list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON input must be a flat array of URL strings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV input must contain a 'url' column")]
    MissingUrlColumn,

    #[error("CSV record {0} is missing the 'url' field")]
    MissingUrlField(u64),

    #[error("Unsupported input format for '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Result type alias for webperf operations
pub type Result<T> = std::result::Result<T, WebperfError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

// Re-export commonly used types
pub use analyzer::{
    build_http_client, fetch_url, run_batch, AdmissionController, FailureKind, FetchResult,
    Notifier, Outcome, ProgressPrinter,
};
pub use config::{load_config, AnalyzerConfig, Config};
pub use input::load_urls;
pub use output::{summarize, Summary};
