//! Input module for webperf
//!
//! Loads the batch URL list from JSON or CSV files. Malformed input fails
//! here, before any network work is dispatched.

mod loader;

pub use loader::load_urls;
