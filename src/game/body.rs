//! Bodies
//!
//! Anything with a position and a hit box: the player, walls, collectibles
//! and scenery.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;
use crate::game::assets::SpriteAsset;

/// A positioned, sized sprite that can take part in physics and overlap queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre position in world space
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Full width and height after scaling
    pub size: Vec2,
    /// Sprite drawn for this body
    pub sprite: SpriteAsset,
}

impl Body {
    /// A body at rest.
    pub fn new(sprite: SpriteAsset, position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            sprite,
        }
    }

    /// Hit box of the body at its current position.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}
