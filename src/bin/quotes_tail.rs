//! Quotes Tail - Headless quote poller
//!
//! Logs every price movement the board would highlight, plus a periodic
//! heartbeat with poller metrics, until Ctrl+C.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use hyperpoll::PollEvent;
use quote_flash::bin_common::{load_quotes_config, ConfigType};
use quotes::application::QuoteSession;
use quotes::domain::Direction;
use quotes::infrastructure::init_tracing_with_level;
use quotes::utils::{Heartbeat, ShutdownManager};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(60);
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_quotes_config(ConfigType::Quotes)?;
    init_tracing_with_level(&config.log_level);

    info!("========================================");
    info!("Starting quotes-tail");
    info!("========================================");
    config.log();

    let shutdown = ShutdownManager::new();
    shutdown.spawn_signal_handler();

    let session = QuoteSession::new(&config)?;
    let events = session.events();
    let board = session.board();
    let mut heartbeat = Heartbeat::new(HEARTBEAT_INTERVAL);

    session.start()?;

    while shutdown.is_running() {
        for event in events.try_iter() {
            match event {
                PollEvent::Applied(generation) => {
                    let board = board.lock();
                    let directions = board.last_directions();
                    let (ups, downs) = directions.counts();
                    info!(
                        "Batch #{}: {} quotes, {} up, {} down",
                        generation,
                        board.store().quotes().len(),
                        ups,
                        downs
                    );

                    let mut changes: Vec<_> = directions.changes().collect();
                    changes.sort_by(|a, b| a.0.cmp(b.0));
                    for (cell, direction) in changes {
                        let arrow = if direction == Direction::Up { "▲" } else { "▼" };
                        let value = directions
                            .value(cell)
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        info!("  {} {} {}", arrow, cell, value);
                    }
                }
                PollEvent::Failed(generation, message) => {
                    warn!("Batch #{} failed: {}", generation, message);
                }
                PollEvent::Discarded(generation, reason) => {
                    info!("Batch #{} discarded ({:?})", generation, reason);
                }
                _ => {}
            }
        }

        if heartbeat.tick() {
            let metrics = session.metrics();
            info!(
                "[Heartbeat] ticks={} ok={} failed={} discarded={} skipped={} in_flight={}",
                metrics.ticks,
                metrics.successes,
                metrics.failures,
                metrics.discarded,
                metrics.skipped,
                session.in_flight()
            );
        }

        shutdown.interruptible_sleep(EVENT_POLL_INTERVAL).await;
    }

    session.stop();
    info!("quotes-tail stopped");
    Ok(())
}
