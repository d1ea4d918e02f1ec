//! Cosmetic particle colors.
//!
//! Every spawned particle takes the next color of a slowly rotating hue wheel. The wheel is a
//! fixed table of tenth-of-a-degree steps, so a [`ColorCursor`] is just an index into it.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Hue steps in a full turn (tenths of a degree).
const HUE_STEPS: usize = 3600;
const SAND_SATURATION: f32 = 0.4;
const SAND_VALUE: f32 = 0.9;

lazy_static! {
    static ref SAND_PALETTE: Vec<Rgb> = (0..HUE_STEPS)
        .map(|step| hsv_to_rgb(step as f32 / 10.0, SAND_SATURATION, SAND_VALUE))
        .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Converts a hue in degrees with saturation and value in `[0, 1]` to RGB.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let channel = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Position on the sand hue wheel. Advances 0.1 degree per color handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCursor {
    step: usize,
}

impl ColorCursor {
    pub fn new(start_hue: f32) -> Self {
        let step = (start_hue.rem_euclid(360.0) * 10.0).round() as usize % HUE_STEPS;
        Self { step }
    }

    /// Current hue in degrees.
    pub fn hue(&self) -> f32 {
        self.step as f32 / 10.0
    }

    pub fn next_color(&mut self) -> Rgb {
        let color = SAND_PALETTE[self.step];
        self.step = (self.step + 1) % HUE_STEPS;
        color
    }
}

impl Default for ColorCursor {
    fn default() -> Self {
        Self::new(220.0)
    }
}
