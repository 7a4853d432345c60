//! Idle/demo mode: decides when to flap on the player's behalf
//!
//! A flap rises roughly `flap_impulse² / (2 * gravity)` pixels, so the bird
//! waits until it has fallen to a line in the lower part of the next gap
//! before flapping again.

use super::state::Session;

/// Fraction of the gap height, measured from its top, where the bird flaps
const GAP_AIM: f32 = 0.7;
/// Aim line as a fraction of the play height when no pipe is ahead
const OPEN_SKY_AIM: f32 = 0.6;

/// Height the autopilot tries to stay above
pub fn aim_line(session: &Session) -> f32 {
    let tuning = &session.tuning;
    let bird = &session.bird;
    match session.pipes.next_ahead_of(tuning, bird.x - bird.radius) {
        Some(pipe) => pipe.gap_top + tuning.gap_height * GAP_AIM,
        None => tuning.play_height() * OPEN_SKY_AIM,
    }
}

/// True when the bird is falling at or below the aim line
pub fn wants_flap(session: &Session) -> bool {
    session.is_running() && session.bird.velocity_y >= 0.0 && session.bird.y >= aim_line(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipes::Pipe;
    use crate::sim::tick::step;

    #[test]
    fn test_aims_for_next_gap() {
        let mut session = Session::new(3);
        session.pipes.items.push(Pipe {
            x: 200.0,
            gap_top: 100.0,
            scored: false,
        });
        assert_eq!(aim_line(&session), 100.0 + 150.0 * GAP_AIM);
    }

    #[test]
    fn test_flaps_only_when_falling_below_line() {
        let mut session = Session::new(3);
        session.activate();

        session.bird.y = 400.0;
        session.bird.velocity_y = 2.0;
        assert!(wants_flap(&session));

        session.bird.velocity_y = -2.0;
        assert!(!wants_flap(&session));

        session.bird.y = 100.0;
        session.bird.velocity_y = 2.0;
        assert!(!wants_flap(&session));
    }

    #[test]
    fn test_never_flaps_on_title_screen() {
        let mut session = Session::new(3);
        session.bird.y = 480.0;
        assert!(!wants_flap(&session));
    }

    #[test]
    fn test_survives_open_sky() {
        let mut session = Session::new(3);
        session.activate();
        // No pipes ever spawn with zero elapsed time
        for _ in 0..600 {
            if wants_flap(&session) {
                session.activate();
            }
            step(&mut session, 1.0, 0.0);
        }
        assert!(session.is_running());
    }
}
