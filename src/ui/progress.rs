//! Decorative progress feedback.
//!
//! The ticker knows nothing about the backend. It walks a fixed list of
//! status lines on a fixed period and then goes quiet; it never reports
//! completion on its own.

use futures::{Stream, StreamExt};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_stream::wrappers::IntervalStream;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1200);
pub const PERCENT_PER_TICK: u8 = 20;
pub const PROGRESS_STEPS: [&str; 5] = [
    "Finding trending topic...",
    "Generating images...",
    "Creating video...",
    "Finalizing video...",
    "Uploading to YouTube...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    pub percent: u8,
    pub status: &'static str,
}

/// One tick per `period`, first one after a full period, one per step.
pub fn progress_ticks(period: Duration) -> impl Stream<Item = ProgressTick> {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    IntervalStream::new(interval)
        .zip(futures::stream::iter(PROGRESS_STEPS.into_iter().zip(1u8..)))
        .map(|(_, (status, step))| ProgressTick {
            percent: step.saturating_mul(PERCENT_PER_TICK),
            status,
        })
}

/// Drive `request` to completion while feeding ticks to `on_tick`.
///
/// Ticks stop as soon as `request` resolves; the request is never delayed
/// or cancelled by the ticker.
pub async fn with_progress<F, T>(
    request: F,
    period: Duration,
    mut on_tick: impl FnMut(ProgressTick),
) -> T
where
    F: Future<Output = T>,
{
    let ticks = progress_ticks(period);
    tokio::pin!(request);
    tokio::pin!(ticks);

    let mut ticking = true;
    loop {
        tokio::select! {
            output = &mut request => return output,
            tick = ticks.next(), if ticking => match tick {
                Some(tick) => on_tick(tick),
                None => ticking = false,
            },
        }
    }
}
