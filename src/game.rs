//! Frame driver
//!
//! [`Game`] ties a [`Session`] to a [`Scheduler`]: each callback turns the
//! timestamp delta into a scale factor, steps the simulation, redraws, and
//! asks for another frame only while the round is still running.

use crate::consts::{MAX_FRAME_SCALE, TARGET_FRAME_MS};
use crate::platform::{FrameHandle, Scheduler};
use crate::renderer::{Surface, draw};
use crate::sim::{Session, StepReport, Transition, autopilot, step};

/// Convert a frame delta into the physics scale factor
///
/// One 60 Hz frame is 1.0. Long stalls are capped so the bird and pipes cannot
/// jump through each other after the tab was in the background.
pub fn frame_scale(delta_ms: f64) -> f32 {
    (delta_ms / TARGET_FRAME_MS).clamp(0.0, MAX_FRAME_SCALE) as f32
}

/// A session plus the scheduling needed to run it
pub struct Game<S: Scheduler> {
    pub session: Session,
    pub scheduler: S,
    /// Flap automatically (idle/demo mode)
    pub autopilot: bool,
    pending: Option<FrameHandle>,
}

impl<S: Scheduler> Game<S> {
    pub fn new(session: Session, scheduler: S) -> Self {
        Self {
            session,
            scheduler,
            autopilot: false,
            pending: None,
        }
    }

    /// The frame request currently outstanding, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Draw the current state without advancing it
    pub fn render<D: Surface + ?Sized>(&self, surface: &mut D) {
        draw(&self.session, surface);
    }

    /// Player input: start, flap or restart depending on the phase
    pub fn activate(&mut self) -> Transition {
        let t = self.session.activate();
        if matches!(t, Transition::Start | Transition::Restart) {
            self.cancel_pending();
            self.pending = Some(self.scheduler.request_frame());
        }
        t
    }

    /// Scheduler callback for one display refresh
    ///
    /// Returns `None` when the round was not running and nothing happened.
    pub fn frame<D: Surface + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        surface: &mut D,
    ) -> Option<StepReport> {
        // This callback is the request we were waiting on
        self.pending = None;

        if !self.session.is_running() {
            return None;
        }

        let previous = self.session.last_frame_ms.unwrap_or(timestamp_ms);
        let delta_ms = (timestamp_ms - previous).max(0.0);
        self.session.last_frame_ms = Some(timestamp_ms);
        let scale = frame_scale(delta_ms);

        if self.autopilot && autopilot::wants_flap(&self.session) {
            self.session.activate();
        }

        let report = step(&mut self.session, scale, delta_ms as f32);
        draw(&self.session, surface);

        if self.session.is_running() {
            self.pending = Some(self.scheduler.request_frame());
        } else {
            self.cancel_pending();
        }

        Some(report)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualScheduler;
    use crate::renderer::ShapeBatch;
    use crate::sim::{Collision, RoundPhase};

    const FRAME: f64 = TARGET_FRAME_MS;

    fn game() -> Game<ManualScheduler> {
        Game::new(Session::new(42), ManualScheduler::new())
    }

    #[test]
    fn test_frame_scale() {
        assert_eq!(frame_scale(0.0), 0.0);
        assert!((frame_scale(FRAME) - 1.0).abs() < 1e-6);
        assert!((frame_scale(FRAME / 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(frame_scale(10_000.0), MAX_FRAME_SCALE as f32);
    }

    #[test]
    fn test_activate_schedules_first_frame() {
        let mut g = game();
        assert_eq!(g.activate(), Transition::Start);
        assert_eq!(g.scheduler.pending(), 1);
        assert!(g.pending_frame().is_some());
    }

    #[test]
    fn test_flap_does_not_schedule() {
        let mut g = game();
        g.activate();
        assert_eq!(g.activate(), Transition::Flap);
        assert_eq!(g.scheduler.requested, 1);
        assert_eq!(g.scheduler.pending(), 1);
    }

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.activate();
        g.scheduler.fire();
        let y0 = g.session.bird.y;

        g.frame(5000.0, &mut batch);

        assert_eq!(g.session.bird.y, y0);
        assert_eq!(g.session.last_frame_ms, Some(5000.0));
        assert_eq!(g.scheduler.pending(), 1);
    }

    #[test]
    fn test_steady_frames_run_at_unit_scale() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.activate();
        g.session.bird.velocity_y = 0.0;

        g.frame(1000.0, &mut batch);
        g.frame(1000.0 + FRAME, &mut batch);

        let gravity = g.session.tuning.gravity;
        assert!((g.session.bird.velocity_y - gravity).abs() < 1e-5);
        assert!(!batch.vertices.is_empty());
    }

    #[test]
    fn test_stall_spawns_every_missed_pipe() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.activate();

        g.frame(0.0, &mut batch);
        let report = g.frame(10_000.0, &mut batch).unwrap();

        // Spawn timer is uncapped, motion is capped at MAX_FRAME_SCALE
        assert_eq!(g.session.pipes.items.len(), 6);
        assert!(report.collision.is_none());
        let moved = g.session.tuning.width - g.session.pipes.items[0].x;
        let expected = g.session.tuning.pipe_speed * MAX_FRAME_SCALE as f32;
        assert!((moved - expected).abs() < 1e-4);
    }

    #[test]
    fn test_collision_stops_rescheduling() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.activate();
        g.scheduler.fire();
        g.session.bird.y = g.session.bird.radius - 1.0;
        let requested = g.scheduler.requested;

        let report = g.frame(16.0, &mut batch).unwrap();

        assert_eq!(report.collision, Some(Collision::Ceiling));
        assert_eq!(g.session.phase, RoundPhase::Ended);
        assert_eq!(g.scheduler.requested, requested);
        assert_eq!(g.scheduler.pending(), 0);
        assert!(g.pending_frame().is_none());
        // Game-over overlay is on screen
        assert!(batch.text.iter().any(|t| t.text == "Game Over"));
    }

    #[test]
    fn test_restart_after_crash() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.activate();
        g.scheduler.fire();
        g.session.bird.y = 0.0;
        g.frame(16.0, &mut batch);
        assert_eq!(g.session.phase, RoundPhase::Ended);

        assert_eq!(g.activate(), Transition::Restart);
        assert_eq!(g.session.score, 0);
        assert!(g.session.pipes.items.is_empty());
        assert_eq!(g.session.bird.y, g.session.tuning.height / 2.0);
        assert!(g.session.last_frame_ms.is_none());
        assert_eq!(g.scheduler.pending(), 1);
    }

    #[test]
    fn test_frame_ignored_before_start() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        assert!(g.frame(100.0, &mut batch).is_none());
        assert_eq!(g.scheduler.requested, 0);
    }

    #[test]
    fn test_autopilot_keeps_bird_airborne() {
        let mut g = game();
        let mut batch = ShapeBatch::new();
        g.autopilot = true;
        g.activate();

        // Two seconds, before the first pipe reaches the bird
        let mut t = 0.0;
        while g.scheduler.fire().is_some() && t < 2000.0 {
            g.frame(t, &mut batch);
            t += FRAME;
        }
        assert!(g.session.is_running());
    }
}
