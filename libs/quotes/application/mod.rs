//! Application Layer
//!
//! Polling store, change detection, highlight animation and the session
//! that drives them. Depends on domain and infrastructure.

pub mod board;
pub mod diff;
pub mod highlight;
pub mod session;
pub mod store;
pub mod visualizer;

pub use board::{QuoteBoard, SharedQuoteBoard};
pub use diff::{DiffTracker, DirectionMap};
pub use highlight::{AnimationTiming, HighlightAnimator, Palette, Rgb, Stage, Timeline};
pub use session::{QuoteSession, SessionError};
pub use store::{QuotesStore, StoreView, FETCH_ERROR_MESSAGE};
