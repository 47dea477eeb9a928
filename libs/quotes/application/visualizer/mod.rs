//! Quote board visualizer
//!
//! Terminal table of the latest quotes. Each cell is painted with the
//! animator's live color; focus events drive the session lifecycle.

pub mod app;
pub mod ui;

pub use app::App;
