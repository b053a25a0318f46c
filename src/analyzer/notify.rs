//! Per-completion notification
//!
//! A notifier is a caller-supplied observer invoked once per finished
//! fetch, on the fetch task's own execution context. Notifiers are trusted
//! instrumentation code: they must not block materially, and a panic
//! inside one aborts the whole batch rather than being swallowed.

use crate::analyzer::FetchResult;

/// Observer invoked synchronously as each fetch completes
///
/// Invocations happen in completion order, not submission order.
pub trait Notifier: Send + Sync {
    /// Called exactly once per fetch, after the result is finalized and
    /// before it is stored
    fn on_complete(&self, result: &FetchResult);
}

/// Notifier that prints a progress line for each completed fetch
pub struct ProgressPrinter;

impl Notifier for ProgressPrinter {
    fn on_complete(&self, result: &FetchResult) {
        println!(
            "[DONE] {} -> {} in {} ms",
            result.url, result.outcome, result.latency_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Outcome;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingNotifier {
        calls: AtomicUsize,
    }

    impl Notifier for CountingNotifier {
        fn on_complete(&self, _result: &FetchResult) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_notifier_is_object_safe() {
        let counting = CountingNotifier {
            calls: AtomicUsize::new(0),
        };
        let notifier: &dyn Notifier = &counting;

        let result = FetchResult {
            url: "https://example.com".to_string(),
            outcome: Outcome::HttpStatus { code: 200 },
            latency_ms: 12.34,
        };

        notifier.on_complete(&result);
        notifier.on_complete(&result);

        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);
    }
}
