//! Render pass
//!
//! Draws a [`Session`] onto any [`Surface`]. Reads state only; calling it
//! twice in a row produces the same output.

use glam::Vec2;

use super::surface::{Surface, TextAlign, TextBaseline, TextStyle};
use super::vertex::colors;
use crate::sim::{Rect, RoundPhase, Session};

/// Height of the darker strip along the top of the ground
const GROUND_EDGE_HEIGHT: f32 = 12.0;
/// Pipe lip: extra width on each side and band height
const LIP_OVERHANG: f32 = 2.0;
const LIP_HEIGHT: f32 = 10.0;
/// Eye dot offset from the bird's centre (rotates with the bird)
const EYE_OFFSET: Vec2 = Vec2::new(6.0, -5.0);
const EYE_RADIUS: f32 = 3.0;

const SCORE_TOP: f32 = 20.0;
const SCORE_SIZE: f32 = 40.0;
const TITLE_SIZE: f32 = 42.0;
const TITLE_LINE_HEIGHT: f32 = 46.0;
/// Offset of the first title line above the canvas centre
const TITLE_RAISE: f32 = 35.0;
const SUBTITLE_SIZE: f32 = 24.0;
const SUBTITLE_DROP: f32 = 60.0;

/// Draw the whole frame
pub fn draw<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    draw_background(session, surface);
    draw_pipes(session, surface);
    draw_ground(session, surface);
    draw_bird(session, surface);
    draw_score(session, surface);

    if let Some((title, subtitle)) = overlay_text(session) {
        draw_overlay(session, surface, &title, subtitle);
    }
}

/// Title and subtitle for the current phase, `None` while running
pub fn overlay_text(session: &Session) -> Option<(String, &'static str)> {
    match session.phase {
        RoundPhase::NotStarted => Some((
            "Press Space to Start".to_string(),
            "Flap to fly through the gaps",
        )),
        RoundPhase::Running => None,
        RoundPhase::Ended => Some((
            format!("Game Over\nScore: {}", session.score),
            "Press Space to Restart",
        )),
    }
}

fn draw_background<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    let t = &session.tuning;
    surface.clear(colors::CLEAR);
    surface.fill_rect(Rect::new(0.0, 0.0, t.width, t.play_height()), colors::SKY);
}

fn draw_pipes<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    let t = &session.tuning;
    for pipe in &session.pipes.items {
        let top = pipe.top_rect(t);
        let bottom = pipe.bottom_rect(t);
        surface.fill_rect(top, colors::PIPE);
        surface.fill_rect(bottom, colors::PIPE);

        let lip_x = pipe.x - LIP_OVERHANG;
        let lip_w = t.pipe_width + 2.0 * LIP_OVERHANG;
        surface.fill_rect(
            Rect::new(lip_x, top.bottom() - LIP_HEIGHT, lip_w, LIP_HEIGHT),
            colors::PIPE_LIP,
        );
        surface.fill_rect(
            Rect::new(lip_x, bottom.y, lip_w, LIP_HEIGHT),
            colors::PIPE_LIP,
        );
    }
}

fn draw_ground<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    let t = &session.tuning;
    let y = t.play_height();
    surface.fill_rect(Rect::new(0.0, y, t.width, t.ground_height), colors::GROUND);
    surface.fill_rect(
        Rect::new(0.0, y, t.width, GROUND_EDGE_HEIGHT),
        colors::GROUND_EDGE,
    );
}

fn draw_bird<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    let bird = &session.bird;
    surface.save();
    surface.translate(bird.center());
    surface.rotate(bird.rotation);
    surface.fill_circle(Vec2::ZERO, bird.radius, colors::BIRD);
    surface.fill_circle(EYE_OFFSET, EYE_RADIUS, colors::BIRD_EYE);
    surface.restore();
}

fn draw_score<S: Surface + ?Sized>(session: &Session, surface: &mut S) {
    let style = TextStyle {
        size: SCORE_SIZE,
        bold: true,
        color: colors::SCORE,
        align: TextAlign::Center,
        baseline: TextBaseline::Top,
    };
    surface.fill_text(
        &session.score.to_string(),
        Vec2::new(session.tuning.width / 2.0, SCORE_TOP),
        &style,
    );
}

fn draw_overlay<S: Surface + ?Sized>(session: &Session, surface: &mut S, title: &str, subtitle: &str) {
    let t = &session.tuning;
    surface.fill_rect(Rect::new(0.0, 0.0, t.width, t.height), colors::OVERLAY);

    let center = Vec2::new(t.width / 2.0, t.height / 2.0);
    let mut style = TextStyle {
        size: TITLE_SIZE,
        bold: true,
        color: colors::OVERLAY_TEXT,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    for (i, line) in title.split('\n').enumerate() {
        let y = center.y - TITLE_RAISE + i as f32 * TITLE_LINE_HEIGHT;
        surface.fill_text(line, Vec2::new(center.x, y), &style);
    }

    style.size = SUBTITLE_SIZE;
    surface.fill_text(subtitle, Vec2::new(center.x, center.y + SUBTITLE_DROP), &style);
}
