//! # HyperPoll Core
//!
//! ## Example
//!
//! ```rust,ignore
//! use hyperpoll::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let poller = hyperpoll::builder()
//!         .fetcher(MyFetcher::new())
//!         .state(MyState::default())
//!         .interval(Duration::from_secs(5))
//!         .fetch_timeout(Duration::from_secs(2))
//!         .build()?;
//!
//!     poller.start()?;
//!     // ... later, e.g. when the view loses focus
//!     poller.stop();
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod poller;
pub mod session_state;
pub mod ticker;

// Re-export main types
pub use builder::{states, PollerBuilder, DEFAULT_INTERVAL};
pub use config::{OverlapPolicy, PollerConfig};
pub use poller::{DiscardReason, PollEvent, Poller};
pub use session_state::{AtomicMetrics, AtomicSessionState, Metrics, SessionState};

// Re-export traits for convenience
pub use crate::traits::*;

/// Create a new poller builder
pub fn builder() -> PollerBuilder<states::NoFetcher, states::NoHandler, (), ()> {
    PollerBuilder::new()
}
