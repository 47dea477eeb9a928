//! Feed response envelope

use crate::domain::QuoteRecord;
use serde::{Deserialize, Serialize};

/// Top-level body of the tickers endpoint
///
/// Only `data` is required; the status code field some deployments send
/// is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickersResponse {
    #[serde(default)]
    pub code: Option<String>,

    pub data: Vec<QuoteRecord>,
}
