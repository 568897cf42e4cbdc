//! Rendering
//!
//! The render pass only reads state. It draws the scrolling layer through
//! the camera offset, then the HUD through an unshifted overlay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::aabb::Aabb;
use crate::game::assets::SpriteAsset;
use crate::game::state::World;

/// RGBA colour, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// CSS cornflower blue.
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Font size for HUD text.
pub const HUD_FONT_SIZE: f32 = 16.0;

/// Where the render surface should draw.
pub trait RenderSurface {
    /// Fill the whole frame.
    fn clear(&mut self, color: Color);

    /// World-space offset subtracted from every following draw. `Vec2::ZERO`
    /// selects the screen overlay.
    fn set_view_offset(&mut self, offset: Vec2);

    /// Draw `sprite` stretched over `bounds`.
    fn draw_sprite(&mut self, sprite: SpriteAsset, bounds: Aabb);

    /// Draw `text` with its bottom-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, size: f32);
}

/// One line of HUD text.
#[derive(Clone, Debug, PartialEq)]
pub struct HudLine {
    /// Rendered text
    pub text: String,
    /// Screen position
    pub position: Vec2,
}

/// Score, points left and elapsed time, in draw order.
pub fn hud_lines(world: &World) -> [HudLine; 3] {
    [
        HudLine {
            text: format!("Score: {}", world.score),
            position: Vec2::new(10.0, 10.0),
        },
        HudLine {
            text: format!("Points Left: {}", world.remaining_points),
            position: Vec2::new(120.0, 10.0),
        },
        HudLine {
            text: format!("Time: {}", world.clock.format_mm_ss()),
            position: Vec2::new(280.0, 10.0),
        },
    ]
}

/// Draw one frame of `world`.
pub fn render_world(world: &World, background: Color, surface: &mut dyn RenderSurface) {
    surface.clear(background);

    // Scrolling layer
    surface.set_view_offset(world.camera.offset);
    for wall in world.walls() {
        surface.draw_sprite(wall.sprite, wall.bounds());
    }
    for item in world.coins.iter().chain(world.gems.iter()) {
        surface.draw_sprite(item.body.sprite, item.body.bounds());
    }
    for cloud in &world.clouds {
        surface.draw_sprite(cloud.sprite, cloud.bounds());
    }
    surface.draw_sprite(world.player.sprite, world.player.bounds());

    // HUD overlay
    surface.set_view_offset(Vec2::ZERO);
    for line in hud_lines(world) {
        surface.draw_text(&line.text, line.position, Color::WHITE, HUD_FONT_SIZE);
    }
}
