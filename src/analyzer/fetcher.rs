//! HTTP fetch unit
//!
//! This module performs single-URL measurements, including:
//! - Building the shared HTTP client
//! - Issuing one GET request with a per-request timeout
//! - Draining the response body so latency covers the full transfer
//! - Classifying transport failures into stable categories
//! - Invoking the completion notifier

use crate::analyzer::Notifier;
use crate::config::HttpConfig;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Category of a failed fetch
///
/// Carries a stable label naming the failure class, not the full error
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The configured timeout expired before the body completed
    Timeout,
    /// The connection could not be established
    ConnectionRefused,
    /// The hostname could not be resolved
    DnsFailure,
    /// Any other transport or protocol failure
    Other,
}

impl FailureKind {
    /// Returns the stable label for this failure category
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::ConnectionRefused => "connection-refused",
            FailureKind::DnsFailure => "dns-failure",
            FailureKind::Other => "other",
        }
    }

    /// Classifies a reqwest error into a failure category
    fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return FailureKind::Timeout;
        }

        if error.is_connect() {
            // reqwest does not expose DNS failures directly; the hyper
            // error chain names them
            let mut message = error.to_string();
            let mut source = std::error::Error::source(error);
            while let Some(cause) = source {
                message.push_str(&cause.to_string());
                source = std::error::Error::source(cause);
            }
            let message = message.to_lowercase();

            if message.contains("dns") || message.contains("resolve") {
                return FailureKind::DnsFailure;
            }
            return FailureKind::ConnectionRefused;
        }

        FailureKind::Other
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a fetch: a completed request or a categorized failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    /// The request completed with an HTTP status code
    HttpStatus { code: u16 },

    /// The request failed at the transport level
    Error { kind: FailureKind },
}

impl Outcome {
    /// Returns true for a completed request with a status below 400
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::HttpStatus { code } if *code < 400)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::HttpStatus { code } => write!(f, "HTTP {}", code),
            Outcome::Error { kind } => write!(f, "ERROR: {}", kind),
        }
    }
}

/// Result of measuring one URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult {
    /// The input URL, copied verbatim, never normalized
    pub url: String,

    /// The request outcome
    #[serde(flatten)]
    pub outcome: Outcome,

    /// Wall-clock time from request start to result availability,
    /// in milliseconds, present for failures too
    pub latency_ms: f64,
}

/// Builds the HTTP client shared by all fetches in a batch
///
/// The client carries no total timeout of its own; each request gets the
/// batch timeout individually.
///
/// # Arguments
///
/// * `config` - HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and measures its latency
///
/// Never fails outward: every transport failure is converted into an
/// `Outcome::Error` carrying the elapsed latency up to the failure point.
/// On a completed response the body is drained before latency is taken, so
/// the measurement reflects full transfer time rather than header arrival.
///
/// Invokes `notifier`, if supplied, exactly once, synchronously, after the
/// result is finalized and before returning.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `timeout` - Total per-request timeout, connect through body
/// * `notifier` - Optional per-completion observer
pub async fn fetch_url(
    client: &Client,
    url: &str,
    timeout: Duration,
    notifier: Option<&dyn Notifier>,
) -> FetchResult {
    let start = Instant::now();

    let outcome = match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            match response.bytes().await {
                Ok(_) => Outcome::HttpStatus { code },
                Err(e) => Outcome::Error {
                    kind: FailureKind::classify(&e),
                },
            }
        }
        Err(e) => Outcome::Error {
            kind: FailureKind::classify(&e),
        },
    };

    let result = FetchResult {
        url: url.to_string(),
        outcome,
        latency_ms: round_ms(start.elapsed()),
    };

    if let Some(notifier) = notifier {
        notifier.on_complete(&result);
    }

    result
}

/// Converts an elapsed duration to milliseconds, rounded to two decimals
fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> HttpConfig {
        HttpConfig {
            user_agent: "webperf-test/1.0".to_string(),
            connect_timeout_secs: 5,
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_failure_labels_are_stable() {
        assert_eq!(FailureKind::Timeout.label(), "timeout");
        assert_eq!(FailureKind::ConnectionRefused.label(), "connection-refused");
        assert_eq!(FailureKind::DnsFailure.label(), "dns-failure");
        assert_eq!(FailureKind::Other.label(), "other");
    }

    #[test]
    fn test_outcome_success_threshold() {
        assert!(Outcome::HttpStatus { code: 200 }.is_success());
        assert!(Outcome::HttpStatus { code: 301 }.is_success());
        assert!(Outcome::HttpStatus { code: 399 }.is_success());
        assert!(!Outcome::HttpStatus { code: 400 }.is_success());
        assert!(!Outcome::HttpStatus { code: 503 }.is_success());
        assert!(!Outcome::Error {
            kind: FailureKind::Timeout
        }
        .is_success());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::HttpStatus { code: 404 }.to_string(), "HTTP 404");
        assert_eq!(
            Outcome::Error {
                kind: FailureKind::DnsFailure
            }
            .to_string(),
            "ERROR: dns-failure"
        );
    }

    #[test]
    fn test_round_ms() {
        assert_eq!(round_ms(Duration::from_micros(1_234_567)), 1234.57);
        assert_eq!(round_ms(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_fetch_result_serialization() {
        let result = FetchResult {
            url: "https://example.com".to_string(),
            outcome: Outcome::Error {
                kind: FailureKind::Timeout,
            },
            latency_ms: 1500.0,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["status"], "error");
        assert_eq!(json["kind"], "timeout");
        assert_eq!(json["latency_ms"], 1500.0);
    }
}
