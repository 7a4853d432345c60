//! Shape generation for 2D primitives

use glam::{Affine2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4], transform: &Affine2) -> Vec<Vertex> {
    let corners = [
        Vec2::new(r.x, r.y),
        Vec2::new(r.right(), r.y),
        Vec2::new(r.right(), r.bottom()),
        Vec2::new(r.x, r.bottom()),
    ]
    .map(|p| transform.transform_point2(p));

    [0, 1, 2, 0, 2, 3]
        .iter()
        .map(|&i| Vertex::at(corners[i], color))
        .collect()
}

/// Generate vertices for a filled circle
pub fn circle(
    center: Vec2,
    radius: f32,
    color: [f32; 4],
    segments: u32,
    transform: &Affine2,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let c = transform.transform_point2(center);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = transform.transform_point2(center + radius * Vec2::new(theta1.cos(), theta1.sin()));
        let p2 = transform.transform_point2(center + radius * Vec2::new(theta2.cos(), theta2.sin()));

        // Triangle from center to edge
        vertices.push(Vertex::at(c, color));
        vertices.push(Vertex::at(p1, color));
        vertices.push(Vertex::at(p2, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(&Rect::new(1.0, 2.0, 3.0, 4.0), [1.0; 4], &Affine2::IDENTITY);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[2].position, [4.0, 6.0]);
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(10.0, 10.0);
        let v = circle(center, 5.0, [1.0; 4], 16, &Affine2::IDENTITY);
        assert_eq!(v.len(), 48);
        for tri in v.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 10.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_respects_translation() {
        let t = Affine2::from_translation(Vec2::new(100.0, 50.0));
        let v = rect(&Rect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4], &t);
        assert_eq!(v[0].position, [100.0, 50.0]);
    }
}
