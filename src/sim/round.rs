//! Round state machine
//!
//! All phase changes go through [`transition`], which matches every
//! `(phase, event)` pair so a new phase cannot be added without deciding how
//! each event treats it.

use super::state::{Collision, RoundPhase, Session};

/// Inputs that can move a round between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The single player action (key, click or tap)
    Activate,
    /// The simulation step found a collision
    Collided(Collision),
}

/// What a round should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First round from the title screen
    Start,
    /// Activate while running: flap, stay running
    Flap,
    /// Activate after a crash: reset, then run
    Restart,
    /// Collision while running
    End(Collision),
    /// Event has no meaning in this phase
    Ignore,
}

/// Decide the transition for `event` in `phase`
pub fn transition(phase: RoundPhase, event: RoundEvent) -> Transition {
    match (phase, event) {
        (RoundPhase::NotStarted, RoundEvent::Activate) => Transition::Start,
        (RoundPhase::Running, RoundEvent::Activate) => Transition::Flap,
        (RoundPhase::Ended, RoundEvent::Activate) => Transition::Restart,
        (RoundPhase::Running, RoundEvent::Collided(cause)) => Transition::End(cause),
        (RoundPhase::NotStarted | RoundPhase::Ended, RoundEvent::Collided(_)) => {
            Transition::Ignore
        }
    }
}

impl Session {
    /// Feed an event through the state machine and apply the result
    pub fn handle(&mut self, event: RoundEvent) -> Transition {
        let t = transition(self.phase, event);
        match t {
            Transition::Start | Transition::Restart => self.begin_round(),
            Transition::Flap => self.bird.flap(&self.tuning),
            Transition::End(cause) => {
                self.phase = RoundPhase::Ended;
                self.last_collision = Some(cause);
                log::info!("Round over ({:?}), score {}", cause, self.score);
            }
            Transition::Ignore => {}
        }
        t
    }

    /// Player input
    pub fn activate(&mut self) -> Transition {
        self.handle(RoundEvent::Activate)
    }

    fn begin_round(&mut self) {
        self.reset();
        self.phase = RoundPhase::Running;
        // Start with an upward impulse rather than free-fall
        self.bird.flap(&self.tuning);
        log::info!("Round started (seed {})", self.seed);
    }
}
