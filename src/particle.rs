use crate::color::Rgb;

/// A single grain of sand.
///
/// Only the color is visible outside the crate; the fall velocity is simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    fall_velocity: f32,
    color: Rgb,
}

impl Particle {
    pub(crate) fn new(fall_velocity: f32, color: Rgb) -> Self {
        debug_assert!(fall_velocity >= 0.0);
        Self {
            fall_velocity: fall_velocity.max(0.0),
            color,
        }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn fall_velocity(&self) -> f32 {
        self.fall_velocity
    }

    /// Whole cells this particle would cover in one tick of free fall.
    pub(crate) fn leap(&self) -> usize {
        self.fall_velocity.floor() as usize
    }

    pub(crate) fn accelerate(&mut self, gravity: f32) {
        self.fall_velocity += gravity;
    }

    /// Takes over the velocity of whatever it landed on.
    pub(crate) fn land_on(&mut self, fall_velocity: f32) {
        self.fall_velocity = fall_velocity.max(0.0);
    }
}
