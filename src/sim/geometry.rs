//! Numeric helpers shared by physics, spawning and collision

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point of this rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp(p.x, self.x, self.right()),
            clamp(p.y, self.y, self.bottom()),
        )
    }
}

/// Bound `value` to `[min, max]`
///
/// Unlike `f32::clamp` this never panics; with an inverted range the result
/// is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Uniform sample from `[min, max)`
///
/// A degenerate range (`min == max`) yields `min` without consuming the RNG.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    debug_assert!(max >= min, "inverted random range [{min}, {max})");
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// True when the circle touches or overlaps the rectangle
///
/// Tangent contact counts as a hit; a centre inside the rectangle is
/// always a hit.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOX: Rect = Rect::new(10.0, 20.0, 60.0, 100.0);

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_circle_inside_rect_hits() {
        assert!(circle_intersects_rect(Vec2::new(40.0, 70.0), 1.0, &BOX));
    }

    #[test]
    fn test_circle_tangent_hits() {
        // Exactly `radius` from each edge
        assert!(circle_intersects_rect(Vec2::new(0.0, 70.0), 10.0, &BOX));
        assert!(circle_intersects_rect(Vec2::new(80.0, 70.0), 10.0, &BOX));
        assert!(circle_intersects_rect(Vec2::new(40.0, 10.0), 10.0, &BOX));
        assert!(circle_intersects_rect(Vec2::new(40.0, 130.0), 10.0, &BOX));
    }

    #[test]
    fn test_circle_just_outside_misses() {
        let r = 10.0;
        let eps = 0.01;
        assert!(!circle_intersects_rect(Vec2::new(-r - eps + 10.0, 70.0), r, &BOX));
        assert!(!circle_intersects_rect(Vec2::new(70.0 + r + eps, 70.0), r, &BOX));
        assert!(!circle_intersects_rect(Vec2::new(40.0, 20.0 - r - eps), r, &BOX));
        assert!(!circle_intersects_rect(Vec2::new(40.0, 120.0 + r + eps), r, &BOX));
    }

    #[test]
    fn test_circle_near_corner() {
        // Diagonal distance to the (70, 120) corner is 5 * sqrt(2) ≈ 7.07
        let center = Vec2::new(75.0, 125.0);
        assert!(circle_intersects_rect(center, 7.5, &BOX));
        assert!(!circle_intersects_rect(center, 7.0, &BOX));
    }

    #[test]
    fn test_random_between_degenerate_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(random_between(&mut rng, 50.0, 50.0), 50.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_range(v in -1e6f32..1e6, lo in -1e3f32..0.0, hi in 0.0f32..1e3) {
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
        }

        #[test]
        fn prop_random_between_in_range(seed in any::<u64>(), lo in -500f32..500.0, span in 0.5f32..500.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let v = random_between(&mut rng, lo, lo + span);
            prop_assert!(v >= lo && v <= lo + span);
        }

        #[test]
        fn prop_center_inside_always_hits(fx in 0f32..=1.0, fy in 0f32..=1.0, r in 0f32..50.0) {
            let center = Vec2::new(BOX.x + fx * BOX.w, BOX.y + fy * BOX.h);
            prop_assert!(circle_intersects_rect(center, r, &BOX));
        }

        #[test]
        fn prop_far_left_always_misses(r in 0.1f32..50.0, gap in 0.01f32..100.0, y in -200f32..200.0) {
            let center = Vec2::new(BOX.x - r - gap, y);
            prop_assert!(!circle_intersects_rect(center, r, &BOX));
        }
    }
}
