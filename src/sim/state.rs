//! Session state and core simulation types
//!
//! A [`Session`] owns everything one game needs: the bird, the pipe field,
//! the round phase and score, frame timing and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipeField;
use crate::tuning::{Tuning, TuningError};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Title screen, waiting for the first activate
    NotStarted,
    /// Active gameplay
    Running,
    /// Bird crashed; waiting for activate to restart
    Ended,
}

/// What ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Ceiling,
    Ground,
    /// Index into the live pipe list at the time of the hit
    Pipe { index: usize },
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct Session {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: RoundPhase,
    pub score: u32,
    pub bird: Bird,
    pub pipes: PipeField,
    /// Timestamp of the previous frame, cleared on reset
    pub last_frame_ms: Option<f64>,
    /// Last round-ending collision, kept for the game-over screen and logs
    pub last_collision: Option<Collision>,
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Create a session with the default tuning
    pub fn new(seed: u64) -> Self {
        let tuning = Tuning::default();
        debug_assert!(tuning.validate().is_ok());
        Self::build(tuning, seed)
    }

    /// Create a session with custom tuning, rejecting unplayable constants
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        if let Err(e) = tuning.validate() {
            log::error!("Rejected tuning: {e}");
            return Err(e);
        }
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        Self {
            bird: Bird::new(&tuning),
            tuning,
            seed,
            phase: RoundPhase::NotStarted,
            score: 0,
            pipes: PipeField::new(),
            last_frame_ms: None,
            last_collision: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Clear the round back to its starting layout
    ///
    /// Leaves `phase` alone; callers set it as part of the transition that
    /// required the reset.
    pub fn reset(&mut self) {
        self.score = 0;
        self.pipes.clear();
        self.bird.reset(&self.tuning);
        self.last_frame_ms = None;
        self.last_collision = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_started() {
        let session = Session::new(7);
        assert_eq!(session.phase, RoundPhase::NotStarted);
        assert_eq!(session.score, 0);
        assert!(session.pipes.items.is_empty());
        assert!(session.last_frame_ms.is_none());
        assert_eq!(session.bird.y, session.tuning.height / 2.0);
    }

    #[test]
    fn test_with_tuning_rejects_oversized_gap() {
        let tuning = Tuning {
            gap_height: 1000.0,
            ..Default::default()
        };
        assert!(Session::with_tuning(tuning, 1).is_err());
    }

    #[test]
    fn test_reset_keeps_phase() {
        let mut session = Session::new(7);
        session.phase = RoundPhase::Ended;
        session.score = 4;
        session.last_frame_ms = Some(1000.0);
        session.reset();
        assert_eq!(session.phase, RoundPhase::Ended);
        assert_eq!(session.score, 0);
        assert!(session.last_frame_ms.is_none());
    }
}
