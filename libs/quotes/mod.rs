//! Quotes
//!
//! Polls a futures tickers endpoint, detects per-field price movements
//! between batches and animates a highlight for every moved cell.
//!
//! - `domain`: quote records, fields and directions
//! - `infrastructure`: feed client, configuration and logging
//! - `application`: polling store, diff tracker, highlight animator,
//!   session lifecycle and the terminal visualizer
//! - `utils`: shutdown and heartbeat helpers for the binaries

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export commonly used items
pub use application::{
    DiffTracker, DirectionMap, HighlightAnimator, QuoteBoard, QuoteSession, QuotesStore,
    SessionError, SharedQuoteBoard, StoreView, FETCH_ERROR_MESSAGE,
};
pub use domain::{CellKey, Direction, QuoteBatch, QuoteField, QuoteRecord};
pub use infrastructure::{init_tracing, init_tracing_with_level, QuoteFeedClient, QuotesConfig};
pub use utils::{Heartbeat, ShutdownManager};
