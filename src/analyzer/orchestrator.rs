//! Batch orchestration
//!
//! This module turns a URL list into a bounded set of in-flight fetches:
//! - Validates the batch configuration before any work is dispatched
//! - Spawns one task per URL, gated by the admission controller
//! - Joins every task, propagating notifier panics to the caller
//! - Returns results in submission order, not completion order

use crate::analyzer::{fetch_url, AdmissionController, FetchResult, Notifier};
use crate::config::AnalyzerConfig;
use crate::{ConfigError, WebperfError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Fetches every URL in the batch with bounded concurrency
///
/// Dispatch is eager and completion is unordered; the returned sequence is
/// reordered to match the input by index, with exactly one `FetchResult`
/// per input URL. Individual transport failures are captured as data and
/// never fail the batch. The only failure modes of the call itself are
/// invalid configuration (rejected before dispatch) and a panicking
/// notifier, which aborts the remaining fetches and resumes the panic.
///
/// The notifier is disabled automatically when the batch is larger than
/// `config.progress_threshold`, so per-completion output cannot dominate
/// large runs.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `urls` - URLs to fetch, one unit of work each
/// * `config` - Concurrency limit, timeout, and notifier threshold
/// * `notifier` - Optional per-completion observer
///
/// # Returns
///
/// * `Ok(Vec<FetchResult>)` - One result per URL, in input order
/// * `Err(WebperfError)` - Invalid configuration or a failed worker task
pub async fn run_batch(
    client: &Client,
    urls: &[String],
    config: &AnalyzerConfig,
    notifier: Option<Arc<dyn Notifier>>,
) -> crate::Result<Vec<FetchResult>> {
    if config.concurrency == 0 {
        return Err(ConfigError::Validation(
            "concurrency must be a positive integer".to_string(),
        )
        .into());
    }
    if !config.timeout_secs.is_finite() || config.timeout_secs <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be a positive number, got {}",
            config.timeout_secs
        ))
        .into());
    }

    // try_from rejects values too large to represent as a Duration
    let timeout = Duration::try_from_secs_f64(config.timeout_secs).map_err(|_| {
        ConfigError::Validation(format!(
            "timeout-secs is too large for a request timeout, got {}",
            config.timeout_secs
        ))
    })?;
    let admission = Arc::new(AdmissionController::new(config.concurrency as usize));

    // Per-completion output is only worth its overhead on small batches
    let notifier = match notifier {
        Some(n) if urls.len() <= config.progress_threshold => Some(n),
        _ => None,
    };

    tracing::debug!(
        "Dispatching {} URLs with concurrency {} and timeout {:?}",
        urls.len(),
        config.concurrency,
        timeout
    );

    let mut tasks = JoinSet::new();
    for (index, url) in urls.iter().enumerate() {
        let client = client.clone();
        let url = url.clone();
        let admission = Arc::clone(&admission);
        let notifier = notifier.clone();

        tasks.spawn(async move {
            let _permit = admission.admit().await;
            let result = fetch_url(&client, &url, timeout, notifier.as_deref()).await;
            (index, result)
        });
    }

    let mut completed: Vec<(usize, FetchResult)> = Vec::with_capacity(urls.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(pair) => completed.push(pair),
            // A panic can only come from caller-supplied notifier code;
            // dropping the JoinSet aborts the remaining fetches
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => return Err(WebperfError::Join(e)),
        }
    }

    tracing::debug!(
        "Batch complete: {} results, peak concurrency {}",
        completed.len(),
        admission.peak_in_flight()
    );

    // No two tasks share an index, so sorting restores submission order
    completed.sort_unstable_by_key(|(index, _)| *index);
    Ok(completed.into_iter().map(|(_, result)| result).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;

    fn create_test_client() -> Client {
        crate::analyzer::build_http_client(&HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_zero_concurrency_fails_fast() {
        let client = create_test_client();
        let config = AnalyzerConfig {
            concurrency: 0,
            ..AnalyzerConfig::default()
        };

        let result = run_batch(&client, &["http://localhost/".to_string()], &config, None).await;
        assert!(matches!(
            result,
            Err(WebperfError::Config(ConfigError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_non_positive_timeout_fails_fast() {
        let client = create_test_client();

        for timeout_secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnalyzerConfig {
                timeout_secs,
                ..AnalyzerConfig::default()
            };
            let result =
                run_batch(&client, &["http://localhost/".to_string()], &config, None).await;
            assert!(
                matches!(
                    result,
                    Err(WebperfError::Config(ConfigError::Validation(_)))
                ),
                "timeout {} should be rejected",
                timeout_secs
            );
        }
    }

    #[tokio::test]
    async fn test_oversized_timeout_fails_fast() {
        let client = create_test_client();
        let config = AnalyzerConfig {
            // Finite and positive, but beyond what a Duration can hold
            timeout_secs: 1e20,
            ..AnalyzerConfig::default()
        };

        let result = run_batch(&client, &["http://localhost/".to_string()], &config, None).await;
        assert!(matches!(
            result,
            Err(WebperfError::Config(ConfigError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_empty_batch_returns_empty_results() {
        let client = create_test_client();
        let config = AnalyzerConfig::default();

        let results = run_batch(&client, &[], &config, None).await.unwrap();
        assert!(results.is_empty());
    }
}
