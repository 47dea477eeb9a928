//! Quote records as delivered by the feed

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the contract suffix dropped by `display_symbol`
/// (e.g. `USDTPERP` in `BTCUSDTPERP`)
const CONTRACT_SUFFIX_LEN: usize = 8;

/// One row of the feed. Numeric fields stay as text until compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Unique key within a batch (not enforced by the source)
    pub symbol: String,
    pub price: String,
    pub best_bid_price: String,
    pub best_ask_price: String,
    pub best_ask_size: String,
}

/// One full snapshot, in display order
pub type QuoteBatch = Vec<QuoteRecord>;

impl QuoteRecord {
    /// Build a record; mostly useful in tests and fixtures
    pub fn new(
        symbol: impl Into<String>,
        price: impl Into<String>,
        best_bid_price: impl Into<String>,
        best_ask_price: impl Into<String>,
        best_ask_size: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
            best_bid_price: best_bid_price.into(),
            best_ask_price: best_ask_price.into(),
            best_ask_size: best_ask_size.into(),
        }
    }

    /// Raw text of a field
    pub fn field(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Price => &self.price,
            QuoteField::BestBidPrice => &self.best_bid_price,
            QuoteField::BestAskPrice => &self.best_ask_price,
            QuoteField::BestAskSize => &self.best_ask_size,
        }
    }

    /// Parsed value of a field, `None` for anything that is not a finite number
    pub fn numeric(&self, field: QuoteField) -> Option<f64> {
        parse_decimal(self.field(field))
    }

    /// Symbol without its contract suffix, for narrow table columns
    ///
    /// Symbols of eight characters or fewer are shown in full rather than cut to nothing.
    pub fn display_symbol(&self) -> &str {
        let chars = self.symbol.chars().count();
        if chars <= CONTRACT_SUFFIX_LEN {
            return &self.symbol;
        }
        match self.symbol.char_indices().nth(chars - CONTRACT_SUFFIX_LEN) {
            Some((end, _)) => &self.symbol[..end],
            None => &self.symbol,
        }
    }
}

/// Parse decimal text the way the comparison expects
///
/// Surrounding whitespace is ignored; empty, NaN and infinite values are
/// rejected so they never become a comparison baseline.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric columns that take part in diffing and highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuoteField {
    Price,
    BestBidPrice,
    BestAskPrice,
    BestAskSize,
}

impl QuoteField {
    /// All tracked fields in column order
    pub const ALL: [QuoteField; 4] = [
        QuoteField::Price,
        QuoteField::BestBidPrice,
        QuoteField::BestAskPrice,
        QuoteField::BestAskSize,
    ];

    /// Column header
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::Price => "Price",
            QuoteField::BestBidPrice => "BP",
            QuoteField::BestAskPrice => "AP",
            QuoteField::BestAskSize => "AS",
        }
    }

    /// Long name shown in the legend
    pub fn description(&self) -> &'static str {
        match self {
            QuoteField::Price => "Price",
            QuoteField::BestBidPrice => "Best Bid Price",
            QuoteField::BestAskPrice => "Best Ask Price",
            QuoteField::BestAskSize => "Best Ask Size",
        }
    }

    /// Key on the wire
    pub fn key(&self) -> &'static str {
        match self {
            QuoteField::Price => "price",
            QuoteField::BestBidPrice => "bestBidPrice",
            QuoteField::BestAskPrice => "bestAskPrice",
            QuoteField::BestAskSize => "bestAskSize",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Address of one animated cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub symbol: String,
    pub field: QuoteField,
}

impl CellKey {
    pub fn new(symbol: impl Into<String>, field: QuoteField) -> Self {
        Self {
            symbol: symbol.into(),
            field,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.symbol, self.field)
    }
}
