//! # HyperPoll Traits
//!
//! The two seams of the polling engine:
//!
//! - **Fetcher**: issue one request and decode it
//! - **StateHandler**: apply a success or a failure to owned state
//!
//! ## Example
//!
//! ```rust,ignore
//! use hyperpoll::*;
//!
//! struct Clock;
//!
//! #[async_trait]
//! impl Fetcher for Clock {
//!     type Output = u64;
//!
//!     async fn fetch(&self) -> Result<u64> {
//!         Ok(42)
//!     }
//! }
//! ```

pub mod error;
pub mod fetcher;
pub mod state;

pub use error::{HyperPollError, Result};
pub use fetcher::Fetcher;
pub use state::{CountingState, StateHandler};
