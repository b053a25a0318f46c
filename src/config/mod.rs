//! Configuration module for webperf
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the defaults used when no file is given.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use webperf::config::load_config;
//!
//! let config = load_config(Path::new("webperf.toml")).unwrap();
//! println!("Timeout: {}s", config.analyzer.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, Config, HttpConfig};

// Re-export parser and validation entry points
pub use parser::load_config;
pub use validation::validate;
