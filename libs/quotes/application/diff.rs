//! Per-field change detection between applied batches
//!
//! # Algorithm
//! 1. Collapse duplicate symbols, keeping the last occurrence
//! 2. For each tracked field, parse the text; unparseable ⇒ `Unchanged`,
//!    history untouched
//! 3. No history for the field ⇒ seed it, `Unchanged`
//! 4. Otherwise compare against history, then overwrite history

use crate::domain::{CellKey, Direction, QuoteField, QuoteRecord};
use std::collections::HashMap;
use tracing::trace;

/// Directions computed for one batch
///
/// Only changed cells are stored; every other lookup is `Unchanged`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionMap {
    changes: HashMap<CellKey, Direction>,
    /// Parsed value of each changed cell, as observed this batch
    values: HashMap<CellKey, f64>,
}

impl DirectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, key: CellKey, direction: Direction, value: f64) {
        if direction.is_change() {
            self.values.insert(key.clone(), value);
            self.changes.insert(key, direction);
        }
    }

    /// Direction of a cell, `Unchanged` when absent
    pub fn get(&self, symbol: &str, field: QuoteField) -> Direction {
        self.changes
            .get(&CellKey::new(symbol, field))
            .copied()
            .unwrap_or_default()
    }

    /// Value that caused the change of a cell
    pub fn value(&self, key: &CellKey) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Iterate over cells that moved up or down
    pub fn changes(&self) -> impl Iterator<Item = (&CellKey, Direction)> {
        self.changes.iter().map(|(k, d)| (k, *d))
    }

    /// Number of changed cells
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// (ups, downs)
    pub fn counts(&self) -> (usize, usize) {
        self.changes.values().fold((0, 0), |(up, down), d| match d {
            Direction::Up => (up + 1, down),
            Direction::Down => (up, down + 1),
            Direction::Unchanged => (up, down),
        })
    }
}

/// Last good value of every (symbol, field) seen so far
///
/// Entries are created lazily and never removed, so symbols that drop out
/// of the feed keep their baseline for as long as the tracker lives.
#[derive(Debug, Clone, Default)]
pub struct DiffTracker {
    history: HashMap<String, HashMap<QuoteField, f64>>,
}

impl DiffTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare a new batch against history and advance history
    pub fn observe(&mut self, batch: &[QuoteRecord]) -> DirectionMap {
        let mut directions = DirectionMap::new();

        for record in canonical_records(batch) {
            let fields = self.history.entry(record.symbol.clone()).or_default();

            for field in QuoteField::ALL {
                let Some(current) = record.numeric(field) else {
                    trace!("{}.{} is not numeric: {:?}", record.symbol, field, record.field(field));
                    continue;
                };

                let direction = match fields.insert(field, current) {
                    Some(previous) => Direction::compare(previous, current),
                    None => Direction::Unchanged,
                };

                directions.record(CellKey::new(record.symbol.clone(), field), direction, current);
            }
        }

        directions
    }

    /// Stored baseline of a cell
    pub fn baseline(&self, symbol: &str, field: QuoteField) -> Option<f64> {
        self.history.get(symbol)?.get(&field).copied()
    }

    /// Number of symbols ever seen
    pub fn tracked_symbols(&self) -> usize {
        self.history.len()
    }
}

/// Records of a batch with duplicate symbols collapsed to their last occurrence,
/// in order of first appearance
fn canonical_records(batch: &[QuoteRecord]) -> Vec<&QuoteRecord> {
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(batch.len());
    let mut records: Vec<&QuoteRecord> = Vec::with_capacity(batch.len());

    for record in batch {
        match position.get(record.symbol.as_str()) {
            Some(&idx) => records[idx] = record,
            None => {
                position.insert(record.symbol.as_str(), records.len());
                records.push(record);
            }
        }
    }

    records
}
