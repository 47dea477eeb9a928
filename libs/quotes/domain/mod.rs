//! Domain Layer
//!
//! Contains pure quote entities.
//! This layer has no dependencies on infrastructure or application layers.

pub mod direction;
pub mod quote;

pub use direction::Direction;
pub use quote::{parse_decimal, CellKey, QuoteBatch, QuoteField, QuoteRecord};
