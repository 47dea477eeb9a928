//! Remote API clients

pub mod feed;

pub use feed::{FeedError, QuoteFeedClient, TickersResponse, FEED_URL};
