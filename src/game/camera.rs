//! Scrolling Camera
//!
//! Keeps the player centred. The offset is the world coordinate of the
//! viewport's bottom-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space camera for the scrolling layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Visible width and height in world units
    pub viewport: Vec2,
    /// Bottom-left corner of the view in world space
    pub offset: Vec2,
}

impl Camera {
    /// Camera at the world origin.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
        }
    }

    /// Offset that centres `target`, never below zero on either axis.
    ///
    /// There is no upper bound: the view may scroll past the far end of the
    /// level.
    pub fn centered_offset(viewport: Vec2, target: Vec2) -> Vec2 {
        (target - viewport * 0.5).max(Vec2::ZERO)
    }

    /// Recentre on `target`.
    pub fn recenter(&mut self, target: Vec2) {
        self.offset = Self::centered_offset(self.viewport, target);
    }

    /// Convert a world position to viewport coordinates.
    #[inline]
    pub fn to_view(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
