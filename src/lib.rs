//! Flap Gauntlet - a single-screen falling-bird arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, round state)
//! - `game`: Frame driver tying the simulation to a scheduler and renderer
//! - `renderer`: Drawing surface, render pass and WebGPU pipeline
//! - `platform`: Frame scheduling abstraction
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, frame_scale};
pub use platform::{FrameHandle, ManualScheduler, Scheduler};
pub use sim::{RoundPhase, Session};
pub use tuning::{Tuning, TuningError};

/// Frame timing constants
pub mod consts {
    /// Duration of one frame at the 60 Hz baseline
    pub const TARGET_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest scale factor a single frame may apply (caps catch-up after stalls)
    pub const MAX_FRAME_SCALE: f64 = 2.5;
}
