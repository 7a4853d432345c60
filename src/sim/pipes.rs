//! Pipe obstacles: timed spawning, scrolling, scoring and pruning

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, random_between};
use crate::tuning::Tuning;

/// One top/bottom pipe pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Y of the gap's upper edge, fixed at spawn
    pub gap_top: f32,
    /// Set once the bird has passed the trailing edge
    pub scored: bool,
}

impl Pipe {
    /// Rightmost x of the pipe
    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Y of the gap's lower edge
    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.gap_height
    }

    /// Solid block from the top of the canvas down to the gap
    pub fn top_rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.x, 0.0, tuning.pipe_width, self.gap_top)
    }

    /// Solid block from the bottom of the gap down to the ground
    pub fn bottom_rect(&self, tuning: &Tuning) -> Rect {
        let y = self.gap_bottom(tuning);
        Rect::new(self.x, y, tuning.pipe_width, tuning.play_height() - y)
    }
}

/// The live pipe collection and its spawn clock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeField {
    /// Live pipes, oldest first
    pub items: Vec<Pipe>,
    /// Milliseconds accumulated toward the next spawn
    pub spawn_timer_ms: f32,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every pipe and restart the spawn clock
    pub fn clear(&mut self) {
        self.items.clear();
        self.spawn_timer_ms = 0.0;
    }

    /// Add a pipe at the right edge with a random gap that fits the play area
    pub fn spawn<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        let max_gap_top = tuning.max_gap_top();
        debug_assert!(
            max_gap_top >= tuning.min_gap_top,
            "gap of {} does not fit the play area",
            tuning.gap_height
        );

        let gap_top = random_between(rng, tuning.min_gap_top, max_gap_top);
        log::trace!("spawned pipe with gap top {gap_top:.1}");

        self.items.push(Pipe {
            x: tuning.width,
            gap_top,
            scored: false,
        });
    }

    /// Advance the field by one step
    ///
    /// Returns how many pipes the bird cleared during this step. Several pipes
    /// may spawn at once when `elapsed_ms` spans more than one interval, which
    /// keeps the spawn cadence fixed across dropped frames.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        tuning: &Tuning,
        scale: f32,
        elapsed_ms: f32,
        bird_x: f32,
        rng: &mut R,
    ) -> u32 {
        self.spawn_timer_ms += elapsed_ms;
        while self.spawn_timer_ms >= tuning.spawn_interval_ms {
            self.spawn_timer_ms -= tuning.spawn_interval_ms;
            self.spawn(tuning, rng);
        }

        let mut cleared = 0;
        for pipe in &mut self.items {
            pipe.x -= tuning.pipe_speed * scale;

            if !pipe.scored && pipe.trailing_edge(tuning) < bird_x {
                pipe.scored = true;
                cleared += 1;
            }
        }

        self.items.retain(|p| p.trailing_edge(tuning) > 0.0);
        cleared
    }

    /// First pipe whose trailing edge is still ahead of `x`
    pub fn next_ahead_of(&self, tuning: &Tuning, x: f32) -> Option<&Pipe> {
        self.items.iter().find(|p| p.trailing_edge(tuning) >= x)
    }
}
