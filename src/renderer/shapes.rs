//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::sim::Rect;

/// Corner segments used for obstacle outlines
pub const CORNER_SEGMENTS: u32 = 4;

/// Outline of a rounded rectangle, clockwise in screen space
///
/// The corner radius shrinks to fit thin rectangles. Degenerate rectangles
/// produce no points.
pub fn rounded_rect(rect: &Rect, radius: f32, segments: u32) -> Vec<Vec2> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return Vec::new();
    }

    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let segments = segments.max(1);

    // Corner centers with the angle each quarter arc starts at
    let corners = [
        (Vec2::new(rect.right() - r, rect.y + r), -FRAC_PI_2), // top-right
        (Vec2::new(rect.right() - r, rect.bottom() - r), 0.0), // bottom-right
        (Vec2::new(rect.x + r, rect.bottom() - r), FRAC_PI_2), // bottom-left
        (Vec2::new(rect.x + r, rect.y + r), PI),               // top-left
    ];

    let mut points = Vec::with_capacity((4 * (segments + 1)) as usize);
    for (center, start) in corners {
        for i in 0..=segments {
            let theta = start + (i as f32 / segments as f32) * FRAC_PI_2;
            points.push(center + Vec2::new(theta.cos(), theta.sin()) * r);
        }
    }

    points
}

/// Triangle for the avatar's wing, in avatar-local space
pub fn wing(radius: f32) -> [Vec2; 3] {
    [
        Vec2::new(-radius, -2.0),
        Vec2::new(-radius - 10.0, 0.0),
        Vec2::new(-radius, 6.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
        let min = points.iter().fold(Vec2::splat(f32::MAX), |a, p| a.min(*p));
        let max = points.iter().fold(Vec2::splat(f32::MIN), |a, p| a.max(*p));
        (min, max)
    }

    #[test]
    fn test_rounded_rect_stays_in_bounds() {
        let rect = Rect::new(10.0, 0.0, 60.0, 120.0);
        let points = rounded_rect(&rect, 8.0, CORNER_SEGMENTS);
        assert_eq!(points.len(), 20);

        let (min, max) = bounds(&points);
        assert!((min.x - 10.0).abs() < 1e-4 && (min.y - 0.0).abs() < 1e-4);
        assert!((max.x - 70.0).abs() < 1e-4 && (max.y - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_radius_shrinks_for_thin_rect() {
        let rect = Rect::new(0.0, 0.0, 60.0, 6.0);
        let points = rounded_rect(&rect, 8.0, CORNER_SEGMENTS);
        let (min, max) = bounds(&points);
        assert!(min.y >= -1e-4 && max.y <= 6.0 + 1e-4);
    }

    #[test]
    fn test_degenerate_rect_is_empty() {
        assert!(rounded_rect(&Rect::new(0.0, 0.0, 60.0, 0.0), 8.0, 4).is_empty());
    }
}
