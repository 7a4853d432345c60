//! The player-controlled bird

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::clamp;
use crate::tuning::Tuning;

/// The falling body the player keeps airborne
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Fixed horizontal position of the centre
    pub x: f32,
    pub y: f32,
    /// Vertical velocity per scale unit (positive is down)
    pub velocity_y: f32,
    pub radius: f32,
    /// Display-only tilt in radians, derived from `velocity_y`
    pub rotation: f32,
}

impl Bird {
    /// A bird at rest in the vertical centre of the canvas
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.bird_x,
            y: tuning.height / 2.0,
            velocity_y: 0.0,
            radius: tuning.bird_radius,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }

    /// Put the bird back in the centre with zero velocity
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Integrate one scaled step: velocity first, then position with the new velocity
    pub fn apply_gravity(&mut self, gravity: f32, scale: f32) {
        self.velocity_y += gravity * scale;
        self.y += self.velocity_y * scale;
    }

    /// Tilt up when rising, nose down when falling
    pub fn recompute_tilt(&mut self, tuning: &Tuning) {
        self.rotation = clamp(
            self.velocity_y * tuning.tilt_factor,
            tuning.min_tilt,
            tuning.max_tilt,
        );
    }

    /// Full physics update for one step
    pub fn update(&mut self, tuning: &Tuning, scale: f32) {
        self.apply_gravity(tuning.gravity, scale);
        self.recompute_tilt(tuning);
    }

    /// Instantaneous upward impulse; replaces the current velocity
    pub fn flap(&mut self, tuning: &Tuning) {
        self.velocity_y = tuning.flap_impulse;
    }
}
