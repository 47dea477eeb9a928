//! Recurring tick task for a poller session
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Ticker Task        │
//! │  (Tokio spawn)      │
//! │                     │
//! │  1. Tick at t=0     │
//! │  2. on_tick() ──────┼──> spawns one fetch task (never awaited here)
//! │  3. Wait interval   │
//! │  4. Repeat          │
//! └─────────────────────┘
//! ```
//!
//! The first tick fires immediately so `start()` fetches right away.
//! `on_tick` must not block: the poller spawns the fetch and returns, so a
//! slow response never delays the next tick. The task runs until its
//! `JoinHandle` is aborted by `stop()`.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Tick loop body
///
/// # Arguments
/// * `interval` - Duration between ticks
/// * `on_tick` - Called once per tick, starting immediately
pub async fn ticker_task<T>(interval: Duration, mut on_tick: T)
where
    T: FnMut() + Send + 'static,
{
    let mut ticker = tokio::time::interval(interval);
    // A stalled runtime should not produce a burst of catch-up fetches
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    debug!("Ticker task started with interval: {:?}", interval);

    loop {
        ticker.tick().await;
        on_tick();
    }
}

/// Spawn a ticker task on the current runtime
pub fn spawn_ticker<T>(interval: Duration, on_tick: T) -> JoinHandle<()>
where
    T: FnMut() + Send + 'static,
{
    tokio::spawn(ticker_task(interval, on_tick))
}
