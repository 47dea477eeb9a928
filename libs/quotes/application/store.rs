//! Polling store state
//!
//! Holds what the renderer reads: the current batch, the first-load flag
//! and the user-facing error. Only the board's apply path mutates it.

use crate::domain::QuoteBatch;

/// The one message shown for any fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load quotes.\n\nPlease wait.";

/// What a renderer should show right now
#[derive(Debug, PartialEq)]
pub enum StoreView<'a> {
    /// Nothing to show yet
    Loading,
    /// The last fetch failed
    Failed(&'a str),
    /// Quotes to render
    Ready(&'a QuoteBatch),
}

#[derive(Debug, Clone)]
pub struct QuotesStore {
    quotes: QuoteBatch,
    loading: bool,
    error: Option<String>,
    revision: u64,
}

impl QuotesStore {
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            loading: true,
            error: None,
            revision: 0,
        }
    }

    /// Replace quotes with a successful batch
    pub fn apply_batch(&mut self, batch: QuoteBatch) {
        self.error = None;
        self.quotes = batch;
        self.loading = false;
        self.revision += 1;
    }

    /// Record a failed fetch
    pub fn apply_failure(&mut self) {
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.quotes.clear();
        self.loading = false;
        self.revision += 1;
    }

    pub fn quotes(&self) -> &QuoteBatch {
        &self.quotes
    }

    /// True until the first fetch completes, successful or not
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of applied outcomes so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Error wins; the table shows only once loaded and non-empty
    pub fn view(&self) -> StoreView<'_> {
        if let Some(error) = self.error.as_deref() {
            StoreView::Failed(error)
        } else if !self.loading && !self.quotes.is_empty() {
            StoreView::Ready(&self.quotes)
        } else {
            StoreView::Loading
        }
    }
}

impl Default for QuotesStore {
    fn default() -> Self {
        Self::new()
    }
}
