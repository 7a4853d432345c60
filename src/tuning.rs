//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults are the shipped
//! balance; tests build variants to exercise edge cases.

use serde::{Deserialize, Serialize};

/// Reasons a [`Tuning`] cannot drive a session
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuningError {
    #[error("canvas must be larger than the ground band (height {height}, ground {ground_height})")]
    EmptyPlayArea { height: f32, ground_height: f32 },
    #[error("gap does not fit the play area: max gap top {max_gap_top} < min gap top {min_gap_top}")]
    GapDoesNotFit { min_gap_top: f32, max_gap_top: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("tilt range is inverted ({min} > {max})")]
    InvertedTilt { min: f32, max: f32 },
}

/// Gameplay constants
///
/// Units are canvas pixels; velocities and accelerations are per scale unit
/// (one 60 Hz frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub width: f32,
    pub height: f32,
    /// Height of the ground band at the bottom of the canvas
    pub ground_height: f32,

    // === Bird ===
    /// Fixed horizontal position of the bird's centre
    pub bird_x: f32,
    pub bird_radius: f32,
    /// Downward acceleration per scale unit
    pub gravity: f32,
    /// Velocity set (not added) on every flap; negative is up
    pub flap_impulse: f32,
    /// Radians of tilt per unit of vertical velocity
    pub tilt_factor: f32,
    pub min_tilt: f32,
    pub max_tilt: f32,

    // === Pipes ===
    pub pipe_width: f32,
    pub gap_height: f32,
    /// Horizontal speed per scale unit
    pub pipe_speed: f32,
    pub spawn_interval_ms: f32,
    /// Minimum solid height above the gap
    pub min_gap_top: f32,
    /// Minimum solid height below the gap
    pub min_gap_bottom: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            ground_height: 100.0,

            bird_x: 100.0,
            bird_radius: 15.0,
            gravity: 0.38,
            flap_impulse: -7.4,
            tilt_factor: 0.08,
            min_tilt: -0.65,
            max_tilt: 1.1,

            pipe_width: 60.0,
            gap_height: 150.0,
            pipe_speed: 2.4,
            spawn_interval_ms: 1500.0,
            min_gap_top: 50.0,
            min_gap_bottom: 50.0,
        }
    }
}

impl Tuning {
    /// Height of the area above the ground where the bird can fly
    #[inline]
    pub fn play_height(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Largest gap top that still leaves `min_gap_bottom` below the gap
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.play_height() - self.gap_height - self.min_gap_bottom
    }

    /// Check that these constants describe a playable round
    pub fn validate(&self) -> Result<(), TuningError> {
        let positives = [
            ("width", self.width),
            ("bird_radius", self.bird_radius),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
            ("pipe_speed", self.pipe_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        for (name, value) in positives {
            // Written as a negated comparison so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        if !(self.play_height() > 0.0) {
            return Err(TuningError::EmptyPlayArea {
                height: self.height,
                ground_height: self.ground_height,
            });
        }

        if self.max_gap_top() < self.min_gap_top {
            return Err(TuningError::GapDoesNotFit {
                min_gap_top: self.min_gap_top,
                max_gap_top: self.max_gap_top(),
            });
        }

        if self.min_tilt > self.max_tilt {
            return Err(TuningError::InvertedTilt {
                min: self.min_tilt,
                max: self.max_tilt,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = Tuning::default();
        assert_eq!(tuning.validate(), Ok(()));
        assert_eq!(tuning.play_height(), 500.0);
        assert_eq!(tuning.max_gap_top(), 300.0);
    }

    #[test]
    fn test_oversized_gap_rejected() {
        let tuning = Tuning {
            gap_height: 450.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_ground_covering_canvas_rejected() {
        let tuning = Tuning {
            ground_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyPlayArea { .. })
        ));
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let tuning = Tuning {
            spawn_interval_ms: 0.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonPositive {
                name: "spawn_interval_ms",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_tight_gap_exactly_fits() {
        // max gap top == min gap top leaves a single valid placement
        let tuning = Tuning {
            gap_height: 400.0,
            ..Default::default()
        };
        assert_eq!(tuning.max_gap_top(), tuning.min_gap_top);
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 0.5}"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.gap_height, Tuning::default().gap_height);
    }
}
