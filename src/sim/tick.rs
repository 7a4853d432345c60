//! Simulation step
//!
//! Advances one frame: bird physics, then pipes, then collisions. Pipes move
//! before collisions are tested so a hit is judged against their new position.

use super::bird::Bird;
use super::geometry::circle_intersects_rect;
use super::pipes::PipeField;
use super::round::RoundEvent;
use super::state::{Collision, Session};
use crate::tuning::Tuning;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Pipes cleared (and points scored) this step
    pub cleared: u32,
    /// Collision that ended the round, if any
    pub collision: Option<Collision>,
}

/// Advance a running session by `scale` frames worth of motion
///
/// `elapsed_ms` is the raw frame time and only feeds the spawn clock.
pub fn step(session: &mut Session, scale: f32, elapsed_ms: f32) -> StepReport {
    if !session.is_running() {
        return StepReport::default();
    }

    session.bird.update(&session.tuning, scale);

    let cleared = session.pipes.tick(
        &session.tuning,
        scale,
        elapsed_ms,
        session.bird.x,
        &mut session.rng,
    );
    if cleared > 0 {
        session.score += cleared;
        log::debug!("Pipe cleared, score {}", session.score);
    }

    let collision = find_collision(&session.bird, &session.pipes, &session.tuning);
    if let Some(cause) = collision {
        session.handle(RoundEvent::Collided(cause));
    }

    StepReport { cleared, collision }
}

/// First collision between the bird and the world, if any
///
/// Bounds are checked before pipes; among pipes the oldest wins. Order only
/// affects which cause is reported, never whether one is.
pub fn find_collision(bird: &Bird, pipes: &PipeField, tuning: &Tuning) -> Option<Collision> {
    if bird.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird.bottom() >= tuning.play_height() {
        return Some(Collision::Ground);
    }

    let center = bird.center();
    pipes
        .items
        .iter()
        .position(|pipe| {
            circle_intersects_rect(center, bird.radius, &pipe.top_rect(tuning))
                || circle_intersects_rect(center, bird.radius, &pipe.bottom_rect(tuning))
        })
        .map(|index| Collision::Pipe { index })
}
