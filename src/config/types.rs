use serde::Deserialize;

/// Main configuration structure for webperf
///
/// Every field carries a default so the tool runs with CLI flags alone;
/// a TOML file only needs to name the keys it changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

/// Batch measurement configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum number of requests in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,

    /// Total per-request timeout in seconds, connect through body
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Batch size above which the per-completion notifier is disabled
    #[serde(rename = "progress-threshold", default = "default_progress_threshold")]
    pub progress_threshold: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_concurrency() -> u32 {
    10
}

fn default_timeout_secs() -> f64 {
    10.0
}

fn default_progress_threshold() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("webperf/{}", env!("CARGO_PKG_VERSION"))
}

fn default_connect_timeout_secs() -> u64 {
    10
}
