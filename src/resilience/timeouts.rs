//! Deadline enforcement for outbound calls.
//!
//! # Responsibilities
//! - Race an async operation against a wall-clock deadline
//! - Keep timeout errors distinct from the operation's own errors
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - A zero deadline fails immediately without polling the operation
//! - On timeout the operation future is dropped; nothing awaits its late result

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

/// Outcome of an operation that did not produce a value within its deadline.
#[derive(Debug, Error, PartialEq)]
pub enum DeadlineError<E> {
    /// The deadline elapsed before the operation settled.
    #[error("operation timed out after {} ms", .0.as_millis())]
    Elapsed(Duration),

    /// The operation settled first, with its own error.
    #[error("{0}")]
    Failed(E),
}

impl<E> DeadlineError<E> {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, DeadlineError::Elapsed(_))
    }
}

/// Run `operation`, giving up after `deadline`.
///
/// The operation's error is passed through unchanged as [`DeadlineError::Failed`].
pub async fn with_deadline<F, T, E>(deadline: Duration, operation: F) -> Result<T, DeadlineError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    if deadline.is_zero() {
        return Err(DeadlineError::Elapsed(deadline));
    }

    match timeout(deadline, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(DeadlineError::Failed(e)),
        Err(_) => Err(DeadlineError::Elapsed(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::{sleep, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_value_within_deadline() {
        let result: Result<u32, DeadlineError<String>> = with_deadline(Duration::from_millis(5000), async {
            sleep(Duration::from_millis(100)).await;
            Ok(7)
        })
        .await;

        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_operation_times_out_at_deadline() {
        let start = Instant::now();
        let result: Result<u32, DeadlineError<String>> = with_deadline(Duration::from_millis(5000), async {
            sleep(Duration::from_millis(6000)).await;
            Ok(7)
        })
        .await;

        assert_eq!(result, Err(DeadlineError::Elapsed(Duration::from_millis(5000))));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(5000));
        assert!(elapsed < Duration::from_millis(5100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_operation_error_passes_through() {
        let result: Result<u32, DeadlineError<&str>> =
            with_deadline(Duration::from_millis(5000), async { Err("backend unavailable") }).await;

        let err = result.unwrap_err();
        assert!(!err.is_elapsed());
        assert_eq!(err, DeadlineError::Failed("backend unavailable"));
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[tokio::test]
    async fn test_zero_deadline_fails_without_polling() {
        let polled = Arc::new(AtomicBool::new(false));
        let flag = polled.clone();

        let result: Result<u32, DeadlineError<String>> = with_deadline(Duration::ZERO, async move {
            flag.store(true, Ordering::SeqCst);
            Ok(1)
        })
        .await;

        assert!(result.unwrap_err().is_elapsed());
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_settling_operation() {
        let result: Result<u32, DeadlineError<String>> =
            with_deadline(Duration::from_millis(250), std::future::pending()).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "operation timed out after 250 ms"
        );
    }
}
