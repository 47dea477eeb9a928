//! Quote session
//!
//! Wires the feed client and the board into a poller and exposes the only
//! two lifecycle entry points, `start()` and `stop()`. The embedding UI
//! calls them when its view gains or loses focus.

use super::board::{QuoteBoard, SharedQuoteBoard};
use crate::infrastructure::client::{FeedError, QuoteFeedClient};
use crate::infrastructure::config::QuotesConfig;
use crossbeam_channel::Receiver;
use hyperpoll::{HyperPollError, Metrics, OverlapPolicy, PollEvent, Poller, SessionState};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to build feed client: {0}")]
    Feed(#[from] FeedError),

    #[error("Poller error: {0}")]
    Poll(#[from] HyperPollError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub struct QuoteSession {
    poller: Poller<QuoteFeedClient, QuoteBoard>,
    board: SharedQuoteBoard,
}

impl QuoteSession {
    /// Build a session with the default overlap policy
    pub fn new(config: &QuotesConfig) -> Result<Self> {
        Self::with_overlap(config, OverlapPolicy::default())
    }

    pub fn with_overlap(config: &QuotesConfig, overlap: OverlapPolicy) -> Result<Self> {
        let client = QuoteFeedClient::with_timeout(config.feed.url.clone(), config.fetch_timeout())?;
        let board = QuoteBoard::from_config(config).shared();

        let poller = hyperpoll::builder()
            .fetcher(client)
            .shared_state(SharedQuoteBoard::clone(&board))
            .interval(config.refresh_interval())
            .fetch_timeout(config.fetch_timeout())
            .overlap(overlap)
            .name("quotes")
            .build()?;

        info!(
            "Quote session ready: {} every {:?}",
            config.feed.url,
            config.refresh_interval()
        );

        Ok(Self { poller, board })
    }

    /// Start polling, fetching immediately
    pub fn start(&self) -> Result<()> {
        self.poller.start()?;
        Ok(())
    }

    /// Stop polling; late results are discarded
    pub fn stop(&self) {
        self.poller.stop();
    }

    pub fn board(&self) -> SharedQuoteBoard {
        SharedQuoteBoard::clone(&self.board)
    }

    pub fn is_running(&self) -> bool {
        self.poller.is_running()
    }

    pub fn session_state(&self) -> SessionState {
        self.poller.session_state()
    }

    pub fn metrics(&self) -> Metrics {
        self.poller.metrics()
    }

    pub fn in_flight(&self) -> usize {
        self.poller.in_flight()
    }

    pub fn events(&self) -> Receiver<PollEvent> {
        self.poller.events()
    }
}
