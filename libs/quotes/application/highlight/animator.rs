use super::color::{Palette, Rgb};
use super::timeline::{AnimationTiming, Timeline};
use crate::application::diff::DirectionMap;
use crate::domain::{CellKey, QuoteField};
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Highlight state of every cell that has ever changed
///
/// Cells are inserted lazily on their first change. Unknown cells render at
/// phase 0 and the neutral color.
#[derive(Debug, Clone)]
pub struct HighlightAnimator {
    timelines: HashMap<CellKey, Timeline>,
    timing: AnimationTiming,
    palette: Palette,
}

impl Default for HighlightAnimator {
    fn default() -> Self {
        Self::new(AnimationTiming::default(), Palette::default())
    }
}

impl HighlightAnimator {
    pub fn new(timing: AnimationTiming, palette: Palette) -> Self {
        Self {
            timelines: HashMap::new(),
            timing,
            palette,
        }
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Start an animation for every changed cell, superseding running ones
    pub fn trigger(&mut self, directions: &DirectionMap, now: Instant) {
        for (key, direction) in directions.changes() {
            let value = directions.value(key);
            self.timelines
                .entry(key.clone())
                .or_default()
                .trigger(direction, value, now, &self.timing);
        }

        if !directions.is_empty() {
            debug!(
                "Triggered {} highlight(s), {} active",
                directions.len(),
                self.active_count()
            );
        }
    }

    /// Live phase of a cell
    pub fn phase(&self, symbol: &str, field: QuoteField, now: Instant) -> f64 {
        self.timelines
            .get(&CellKey::new(symbol, field))
            .map(|timeline| timeline.phase(now, &self.timing))
            .unwrap_or(0.0)
    }

    /// Live color of a cell
    pub fn color(&self, symbol: &str, field: QuoteField, now: Instant) -> Rgb {
        self.palette.interpolate(self.phase(symbol, field, now))
    }

    /// Settle finished timelines, returns how many reached idle
    pub fn advance(&mut self, now: Instant) -> usize {
        let timing = self.timing;
        self.timelines
            .values_mut()
            .filter(|timeline| !timeline.is_idle())
            .map(|timeline| timeline.advance(now, &timing))
            .filter(|finished| *finished)
            .count()
    }

    /// Value of the last animation on this cell that ran to completion
    pub fn settled_value(&self, symbol: &str, field: QuoteField) -> Option<f64> {
        self.timelines
            .get(&CellKey::new(symbol, field))
            .and_then(Timeline::settled_value)
    }

    /// Cells currently attacking or decaying
    pub fn active_count(&self) -> usize {
        self.timelines.values().filter(|t| !t.is_idle()).count()
    }
}
