//! Phase → color mapping

use crate::infrastructure::config::PaletteConfig;
use ratatui::style::Color;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`, `t` in [0, 1]
    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            let value = a as f64 + (b as f64 - a as f64) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Three control points at phase -1, 0 and +1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub down: Rgb,
    pub neutral: Rgb,
    pub up: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}

impl From<&PaletteConfig> for Palette {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            down: config.down.into(),
            neutral: config.neutral.into(),
            up: config.up.into(),
        }
    }
}

impl Palette {
    /// Color for a phase value
    ///
    /// Piecewise linear between adjacent control points. Phases outside
    /// [-1, 1] are clamped and NaN maps to neutral.
    pub fn interpolate(&self, phase: f64) -> Rgb {
        if phase.is_nan() {
            return self.neutral;
        }

        let phase = phase.clamp(-1.0, 1.0);
        if phase >= 0.0 {
            self.neutral.lerp(self.up, phase)
        } else {
            self.neutral.lerp(self.down, -phase)
        }
    }
}
