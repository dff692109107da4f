//! Simulated detail fetch.
//!
//! Stands in for a backend call: waits a fixed latency, then returns a report
//! built from the headline. There is no real failure path, but the error type
//! carries the variants a real backend would need so the UI already has a
//! "failed" state to show.

use std::time::Duration;
use thiserror::Error;

/// Default simulated latency.
pub const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(1200);

/// Default upper bound before a fetch is reported as timed out.
pub const DEFAULT_DETAIL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DetailError {
    #[error("Detail fetch timed out after {0:?}")]
    Timeout(Duration),
    #[error("Detail fetch task panicked: {0}")]
    Panicked(String),
}

/// Report text for `title`.
fn render_report(title: &str) -> String {
    format!(
        "Laporan mendalam: {}. \
         Konten ini berhasil dimuat secara asynchronous menggunakan tokio. \
         Data diproses di worker runtime, bukan di thread UI.",
        title
    )
}

/// Resolve the detail report for `title` after `delay`.
pub async fn fetch_detail(title: &str, delay: Duration) -> Result<String, DetailError> {
    tracing::debug!(title = %title, delay_ms = delay.as_millis() as u64, "Fetching detail");
    tokio::time::sleep(delay).await;
    Ok(render_report(title))
}

/// [`fetch_detail`] bounded by `timeout`.
pub async fn fetch_detail_with_timeout(
    title: &str,
    delay: Duration,
    timeout: Duration,
) -> Result<String, DetailError> {
    match tokio::time::timeout(timeout, fetch_detail(title, delay)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(title = %title, timeout_ms = timeout.as_millis() as u64, "Detail fetch timed out");
            Err(DetailError::Timeout(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn returns_title_after_delay() {
        let start = Instant::now();
        let text = fetch_detail("Foo", DEFAULT_DETAIL_DELAY).await.unwrap();
        assert!(text.contains("Foo"));
        assert!(text.starts_with("Laporan mendalam: Foo."));
        assert_eq!(start.elapsed(), DEFAULT_DETAIL_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn not_ready_before_delay() {
        let handle = tokio::spawn(async { fetch_detail("Foo", Duration::from_millis(1200)).await });

        tokio::time::sleep(Duration::from_millis(1199)).await;
        assert!(!handle.is_finished());

        let text = handle.await.unwrap().unwrap();
        assert!(text.contains("Foo"));
    }

    #[tokio::test(start_paused = true)]
    async fn deterministic_output() {
        let a = fetch_detail("Sama", Duration::ZERO).await.unwrap();
        let b = fetch_detail("Sama", Duration::ZERO).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_shorter_than_delay_fails() {
        let err = fetch_detail_with_timeout("Foo", Duration::from_secs(5), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert_eq!(err, DetailError::Timeout(Duration::from_secs(1)));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_longer_than_delay_succeeds() {
        let text = fetch_detail_with_timeout("Foo", DEFAULT_DETAIL_DELAY, DEFAULT_DETAIL_TIMEOUT)
            .await
            .unwrap();
        assert!(text.contains("Foo"));
    }
}
