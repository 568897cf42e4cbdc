//! Headless Collaborators
//!
//! Render and audio back ends that need no window or sound device. The
//! binary, the integration tests and the benchmark all drive a session
//! through these.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::aabb::Aabb;
use crate::game::assets::{SoundCue, SpriteAsset};
use crate::game::audio::AudioCue;
use crate::game::render::{Color, RenderSurface};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Frame cleared
    Clear(Color),
    /// View offset changed
    ViewOffset(Vec2),
    /// Sprite drawn in world space
    Sprite {
        /// Which sprite
        sprite: SpriteAsset,
        /// Where, before the view offset is applied
        bounds: Aabb,
        /// Active view offset
        offset: Vec2,
    },
    /// Text drawn
    Text {
        /// Contents
        text: String,
        /// Position, before the view offset is applied
        position: Vec2,
        /// Fill colour
        color: Color,
        /// Font size
        size: f32,
        /// Active view offset
        offset: Vec2,
    },
}

/// Render surface that keeps every draw call of the last frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    offset: Vec2,
}

impl RecordingSurface {
    /// Empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Sprites drawn since the last clear, in draw order.
    pub fn sprites(&self) -> impl Iterator<Item = (SpriteAsset, Aabb, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { sprite, bounds, offset } => Some((*sprite, *bounds, *offset)),
            _ => None,
        })
    }

    /// Text drawn since the last clear, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Active view offset.
    pub fn view_offset(&self) -> Vec2 {
        self.offset
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.offset = Vec2::ZERO;
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_view_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.commands.push(DrawCommand::ViewOffset(offset));
    }

    fn draw_sprite(&mut self, sprite: SpriteAsset, bounds: Aabb) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            bounds,
            offset: self.offset,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
            size,
            offset: self.offset,
        });
    }
}

/// Audio back end that logs cues and remembers them.
#[derive(Clone, Debug, Default)]
pub struct LoggingAudio {
    played: Vec<SoundCue>,
}

impl LoggingAudio {
    /// No cues played yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue played so far, oldest first.
    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }

    /// How many times `cue` was played.
    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.iter().filter(|&&c| c == cue).count()
    }
}

impl AudioCue for LoggingAudio {
    fn play(&mut self, cue: SoundCue) {
        debug!(?cue, "sound");
        self.played.push(cue);
    }
}
