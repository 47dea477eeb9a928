//! # HyperPoll
//!
//! A small engine for "fetch every N milliseconds and apply the result"
//! loops whose lifetime is bound to something else (a focused view, a
//! CLI run, a test).
//!
//! ## Features
//!
//! - **Idempotent lifecycle**: `start()`/`stop()` can be called any number of times
//! - **Non-blocking ticks**: each fetch runs in its own task, bounded by a timeout
//! - **Late-result safety**: results from stopped sessions or older generations are dropped
//! - **Type-state builder**: a poller cannot be built without a fetcher and a state handler
//! - **Lock-free metrics**: atomic counters and a bounded event channel

pub mod traits;
pub mod core;

// Re-export all traits
pub use traits::*;

// Re-export core functionality
pub use self::core::{
    builder, config, poller, session_state, ticker,
    builder::{states, PollerBuilder},
    config::{OverlapPolicy, PollerConfig},
    poller::{DiscardReason, PollEvent, Poller},
    session_state::{AtomicMetrics, AtomicSessionState, Metrics, SessionState},
};

/// Type alias for Result with HyperPollError
pub type Result<T> = std::result::Result<T, traits::HyperPollError>;
