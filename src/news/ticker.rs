//! Periodic headline emission.
//!
//! The loop walks the catalog by `tick % len`, one tick per period, starting
//! with an immediate first tick. Filtering happens downstream of the index, so
//! a suppressed tick still advances the cycle.

use super::{catalog, Category, NewsItem};
use futures::{future, stream, Stream, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior};

/// Default time between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Floor for the tick period; `tokio::time::interval` panics on zero.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Decorated item surfaced at `tick` under `filter`, or `None` if suppressed.
pub fn emission_at(tick: usize, filter: Category) -> Option<NewsItem> {
    let items = catalog();
    let item = &items[tick % items.len()];
    filter.matches(item).then(|| item.decorated())
}

/// Lazy, infinite stream of decorated headlines passing `filter`.
///
/// Each call starts from tick zero. The first tick fires immediately and each
/// subsequent one `period` later. Must be polled inside a tokio runtime.
pub fn news_stream(filter: Category, period: Duration) -> impl Stream<Item = NewsItem> + Send {
    let period = period.max(MIN_TICK_INTERVAL);

    stream::unfold(
        (None::<Interval>, 0usize),
        move |(interval, tick)| async move {
            // Interval creation needs a runtime handle, so defer it to the first poll.
            let mut interval = interval.unwrap_or_else(|| {
                let mut i = tokio::time::interval(period);
                i.set_missed_tick_behavior(MissedTickBehavior::Delay);
                i
            });
            interval.tick().await;
            Some((tick, (Some(interval), tick.wrapping_add(1))))
        },
    )
    .filter_map(move |tick| future::ready(emission_at(tick, filter)))
}

/// Drive [`news_stream`] on a background task, pushing each item through `wrap` into `tx`.
///
/// The task ends when the receiver is dropped; callers restart the loop by
/// aborting the returned handle and spawning a new one.
pub fn spawn_ticker<E, F>(
    filter: Category,
    period: Duration,
    tx: mpsc::Sender<E>,
    wrap: F,
) -> JoinHandle<()>
where
    E: Send + 'static,
    F: Fn(NewsItem) -> E + Send + 'static,
{
    tracing::debug!(filter = %filter, period_ms = period.as_millis() as u64, "Spawning ticker");

    tokio::spawn(async move {
        let stream = news_stream(filter, period);
        futures::pin_mut!(stream);

        while let Some(item) = stream.next().await {
            tracing::trace!(id = item.id, filter = %filter, "Ticker emission");
            if tx.send(wrap(item)).await.is_err() {
                tracing::debug!(filter = %filter, "Ticker receiver dropped, stopping");
                break;
            }
        }
    })
}
