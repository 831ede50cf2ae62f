//! Collision detection between the ball and the paddles
//!
//! Both shapes are reduced to an axis-aligned bounding box and compared edge
//! by edge. Nothing here touches entity state.

use glam::Vec2;

/// Axis-aligned box described by its four edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box of a rectangle given its top-left origin and size
    #[inline]
    pub fn from_rect(origin: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + width,
            bottom: origin.y + height,
        }
    }

    /// Box enclosing a circle
    #[inline]
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    /// Strict per-axis overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Uses the circle's bounding box, so a ball touching a paddle corner
/// diagonally still counts as a hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, origin: Vec2, width: f32, height: f32) -> bool {
    Aabb::from_rect(origin, width, height).overlaps(&Aabb::from_circle(center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_inside_rect() {
        let hit = circle_rect_overlap(Vec2::new(25.0, 25.0), 5.0, Vec2::new(10.0, 10.0), 20.0, 20.0);
        assert!(hit);
    }

    #[test]
    fn test_disjoint_circle() {
        let hit =
            circle_rect_overlap(Vec2::new(100.0, 100.0), 5.0, Vec2::new(10.0, 10.0), 20.0, 20.0);
        assert!(!hit);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Circle's left edge sits exactly on the rectangle's right edge
        let hit = circle_rect_overlap(Vec2::new(35.0, 20.0), 5.0, Vec2::new(10.0, 10.0), 20.0, 20.0);
        assert!(!hit);

        // Nudge it in by a hair
        let hit =
            circle_rect_overlap(Vec2::new(34.9, 20.0), 5.0, Vec2::new(10.0, 10.0), 20.0, 20.0);
        assert!(hit);
    }

    #[test]
    fn test_bounding_box_corner_counts() {
        // Diagonal to the corner: true circle misses, bounding box overlaps
        let hit = circle_rect_overlap(Vec2::new(34.0, 34.0), 5.0, Vec2::new(10.0, 10.0), 20.0, 20.0);
        assert!(hit);
    }

    #[test]
    fn test_aabb_edges() {
        let b = Aabb::from_circle(Vec2::new(50.0, 60.0), 10.0);
        assert_eq!(
            b,
            Aabb {
                left: 40.0,
                top: 50.0,
                right: 60.0,
                bottom: 70.0
            }
        );
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = Aabb::from_rect(Vec2::new(ax, ay), aw, ah);
            let b = Aabb::from_rect(Vec2::new(bx, by), bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn circle_centered_in_rect_always_hits(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0, r in 0.5f32..50.0,
        ) {
            let origin = Vec2::new(x, y);
            let center = origin + Vec2::new(w / 2.0, h / 2.0);
            prop_assert!(circle_rect_overlap(center, r, origin, w, h));
        }
    }
}
