//! Quote feed client
//!
//! # Example
//!
//! ```rust,ignore
//! use quotes::infrastructure::client::feed::QuoteFeedClient;
//!
//! let client = QuoteFeedClient::new()?;
//! let batch = client.get_tickers().await?;
//! ```

mod client;
mod types;

pub use client::{FeedError, QuoteFeedClient, Result, FEED_URL};
pub use types::TickersResponse;
