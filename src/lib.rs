//! Quote Flash - Main Library
//!
//! Live quote table with per-cell change highlighting.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (config resolution)
//! - **quotes**: Quote domain, feed client, store, diff tracker, animator (re-exported from workspace)
//! - **hyperpoll**: Polling engine (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,ignore
//! use quote_flash::bin_common::{load_quotes_config, ConfigType};
//! use quote_flash::quotes::application::QuoteSession;
//! ```

// Re-export workspace libraries for convenience
pub use hyperpoll;
pub use quotes;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, load_quotes_config, ConfigType};
}
