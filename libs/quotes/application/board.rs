//! Quote board
//!
//! The state handler the poller applies fetch outcomes to. One board owns
//! the store, the diff tracker and the animator, so the diff always runs
//! against the previously applied batch.

use super::diff::{DiffTracker, DirectionMap};
use super::highlight::{AnimationTiming, HighlightAnimator, Palette};
use super::store::QuotesStore;
use crate::domain::QuoteBatch;
use crate::infrastructure::config::QuotesConfig;
use hyperpoll::{HyperPollError, StateHandler};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Board shared between the poller and renderers
pub type SharedQuoteBoard = Arc<Mutex<QuoteBoard>>;

#[derive(Debug, Default)]
pub struct QuoteBoard {
    store: QuotesStore,
    diff: DiffTracker,
    animator: HighlightAnimator,
    last_directions: DirectionMap,
    last_failure: Option<String>,
}

impl QuoteBoard {
    pub fn new(animator: HighlightAnimator) -> Self {
        Self {
            animator,
            ..Self::default()
        }
    }

    pub fn from_config(config: &QuotesConfig) -> Self {
        let timing = AnimationTiming::new(config.attack(), config.decay());
        let palette = Palette::from(&config.palette);
        Self::new(HighlightAnimator::new(timing, palette))
    }

    pub fn shared(self) -> SharedQuoteBoard {
        Arc::new(Mutex::new(self))
    }

    /// Apply a batch at an explicit instant
    pub fn apply_batch_at(&mut self, batch: QuoteBatch, now: Instant) {
        let directions = self.diff.observe(&batch);
        let (ups, downs) = directions.counts();

        if self.store.is_loading() {
            info!("First batch received: {} quotes", batch.len());
        } else {
            debug!("Batch of {} quotes: {} up, {} down", batch.len(), ups, downs);
        }

        self.store.apply_batch(batch);
        self.animator.advance(now);
        self.animator.trigger(&directions, now);
        self.last_directions = directions;
        self.last_failure = None;
    }

    /// Apply a failed fetch
    pub fn apply_failure(&mut self, detail: impl Into<String>) {
        self.store.apply_failure();
        self.last_directions = DirectionMap::new();
        self.last_failure = Some(detail.into());
    }

    pub fn store(&self) -> &QuotesStore {
        &self.store
    }

    pub fn diff(&self) -> &DiffTracker {
        &self.diff
    }

    pub fn animator(&self) -> &HighlightAnimator {
        &self.animator
    }

    /// Advance animations, called once per rendered frame
    pub fn tick_animations(&mut self, now: Instant) -> usize {
        self.animator.advance(now)
    }

    /// Directions from the last applied batch
    pub fn last_directions(&self) -> &DirectionMap {
        &self.last_directions
    }

    /// Underlying cause of the last failure, for logs only
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }
}

impl StateHandler<QuoteBatch> for QuoteBoard {
    fn on_success(&mut self, output: QuoteBatch) {
        self.apply_batch_at(output, Instant::now());
    }

    fn on_failure(&mut self, error: &HyperPollError) {
        warn!("Quote fetch failed: {}", error);
        self.apply_failure(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::{StoreView, FETCH_ERROR_MESSAGE};
    use crate::domain::{Direction, QuoteField, QuoteRecord};

    const SYM: &str = "BTCUSDTPERP";

    fn batch(price: &str) -> QuoteBatch {
        vec![QuoteRecord::new(SYM, price, "1", "2", "3")]
    }

    #[test]
    fn test_success_updates_store_and_directions() {
        let mut board = QuoteBoard::default();
        let t0 = Instant::now();

        board.apply_batch_at(batch("100"), t0);
        assert!(!board.store().is_loading());
        assert!(board.last_directions().is_empty());

        board.apply_batch_at(batch("105"), t0);
        assert_eq!(
            board.last_directions().get(SYM, QuoteField::Price),
            Direction::Up
        );
        assert_eq!(board.animator().active_count(), 1);
        assert!(matches!(board.store().view(), StoreView::Ready(b) if b.len() == 1));
    }

    #[test]
    fn test_failure_via_handler() {
        let mut board = QuoteBoard::default();
        board.on_failure(&HyperPollError::Status {
            status: 500,
            body: "boom".to_string(),
        });

        assert_eq!(board.store().error(), Some(FETCH_ERROR_MESSAGE));
        assert!(board.store().quotes().is_empty());
        assert!(!board.store().is_loading());
        assert!(board.last_failure().unwrap().contains("500"));
    }

    #[test]
    fn test_failure_keeps_diff_history() {
        let mut board = QuoteBoard::default();
        let t0 = Instant::now();
        board.apply_batch_at(batch("100"), t0);
        board.apply_failure("timeout");
        board.apply_batch_at(batch("99"), t0);

        assert_eq!(
            board.last_directions().get(SYM, QuoteField::Price),
            Direction::Down
        );
        assert!(board.store().error().is_none());
        assert!(board.last_failure().is_none());
    }

    #[test]
    fn test_from_config_uses_palette() {
        let mut config = QuotesConfig::default();
        config.palette.up = [1, 2, 3];
        config.animation.attack_ms = 100;
        let board = QuoteBoard::from_config(&config);
        assert_eq!(board.animator().palette().up.g, 2);
        assert_eq!(board.animator().timing().attack.as_millis(), 100);
    }
}
