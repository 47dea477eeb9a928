//! Infrastructure Layer
//!
//! Contains implementations of external interfaces (feed client, config, logging).
//! This layer depends on the domain layer but not on the application layer.

pub mod client;
pub mod config;
pub mod logging;

// Re-export commonly used types from client
pub use client::{FeedError, QuoteFeedClient, TickersResponse, FEED_URL};

// Re-export config types
pub use config::{AnimationConfig, ConfigError, FeedConfig, PaletteConfig, QuotesConfig};

pub use logging::{init_tracing, init_tracing_with_level};
