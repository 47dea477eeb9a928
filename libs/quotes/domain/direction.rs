//! Direction of a field's change between two applied batches

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Unchanged,
}

impl Direction {
    /// Classify `current` against `previous`
    pub fn compare(previous: f64, current: f64) -> Self {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Direction::Up,
            Some(Ordering::Less) => Direction::Down,
            _ => Direction::Unchanged,
        }
    }

    /// Animation target: +1 for up, -1 for down, 0 otherwise
    pub fn signed_magnitude(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
            Direction::Unchanged => 0.0,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Direction::Unchanged)
    }
}
