//! Axis-Aligned Bounding Boxes
//!
//! Hit boxes for every body in the world. World space is Y-up, so `top()`
//! is the larger Y coordinate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Penetration depth below which two boxes are treated as merely touching.
///
/// Absorbs the rounding left behind when a body is snapped flush against an
/// obstacle edge.
pub const CONTACT_EPSILON: f32 = 1e-3;

/// An axis-aligned box described by its centre and half extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Centre of the box
    pub center: Vec2,
    /// Half width and half height
    pub half_extents: Vec2,
}

impl Aabb {
    /// Create from a centre point and a full size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Full width and height.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Smallest X covered by the box.
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    /// Largest X covered by the box.
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Smallest Y covered by the box.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    /// Largest Y covered by the box.
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents - CONTACT_EPSILON;
        gap.x < reach.x && gap.y < reach.y
    }

    /// Copy of the box moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            half_extents: self.half_extents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = Aabb::from_center_size(Vec2::new(32.0, 32.0), Vec2::new(64.0, 64.0));
        assert_eq!(b.left(), 0.0);
        assert_eq!(b.right(), 64.0);
        assert_eq!(b.bottom(), 0.0);
        assert_eq!(b.top(), 64.0);
        assert_eq!(b.size(), Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::from_center_size(Vec2::new(9.0, 3.0), Vec2::splat(10.0));
        let far = Aabb::from_center_size(Vec2::new(0.0, 40.0), Vec2::splat(10.0));

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_flush_after_rounding_is_not_overlap() {
        let ground = Aabb::from_center_size(Vec2::new(0.0, 32.0), Vec2::splat(64.0));
        let half_h = 44.8_f32;
        // Snap a box onto the ground top the way the physics step does
        let standing = Aabb::from_center_size(Vec2::new(0.0, ground.top() + half_h), Vec2::new(67.2, 89.6));
        assert!(!standing.overlaps(&ground));
        assert!(standing.translated(Vec2::new(0.0, -1.0)).overlaps(&ground));
    }

    #[test]
    fn test_translated_keeps_size() {
        let a = Aabb::from_center_size(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        let moved = a.translated(Vec2::new(0.0, -5.0));
        assert_eq!(moved.center, Vec2::new(1.0, -3.0));
        assert_eq!(moved.size(), a.size());
    }
}
