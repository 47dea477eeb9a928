//! Highlight animator
//!
//! Turns per-cell directions into a phase in [-1, 1] that rises to ±1 over
//! the attack and falls back to 0 over the decay. The phase is mapped to a
//! color through a three-point palette. Time is always passed in by the
//! caller so rendering and tests share the same clock.

pub mod animator;
pub mod color;
pub mod timeline;

pub use animator::HighlightAnimator;
pub use color::{Palette, Rgb};
pub use timeline::{AnimationTiming, Stage, Timeline};
