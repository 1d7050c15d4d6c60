//! Collision detection between the avatar circle and obstacle rectangles

use glam::Vec2;

/// An axis-aligned rectangle in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Point of the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.right()),
            p.y.clamp(self.y, self.bottom()),
        )
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Touching (distance exactly equal to the radius) is not a hit.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(100.0, 0.0, 60.0, 120.0);
        assert!(circle_rect_collision(Vec2::new(130.0, 60.0), 16.0, &rect));
    }

    #[test]
    fn test_circle_overlapping_corner() {
        let rect = Rect::new(100.0, 0.0, 60.0, 120.0);
        // 10px diagonal from the bottom-left corner
        let c = Vec2::new(100.0 - 7.0, 120.0 + 7.0);
        assert!(circle_rect_collision(c, 16.0, &rect));
        // Far enough away diagonally
        let c = Vec2::new(100.0 - 12.0, 120.0 + 12.0);
        assert!(!circle_rect_collision(c, 16.0, &rect));
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let rect = Rect::new(100.0, 0.0, 60.0, 120.0);
        assert!(!circle_rect_collision(Vec2::new(84.0, 60.0), 16.0, &rect));
        assert!(circle_rect_collision(Vec2::new(84.5, 60.0), 16.0, &rect));
    }

    #[test]
    fn test_zero_height_rect() {
        let rect = Rect::new(0.0, 50.0, 60.0, 0.0);
        assert!(circle_rect_collision(Vec2::new(30.0, 55.0), 16.0, &rect));
        assert!(!circle_rect_collision(Vec2::new(30.0, 80.0), 16.0, &rect));
    }
}
