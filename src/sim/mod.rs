//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as a scale factor and elapsed milliseconds
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bird;
pub mod geometry;
pub mod pipes;
pub mod round;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use geometry::{Rect, circle_intersects_rect, clamp, random_between};
pub use pipes::{Pipe, PipeField};
pub use round::{RoundEvent, Transition, transition};
pub use state::{Collision, RoundPhase, Session};
pub use tick::{StepReport, find_collision, step};
