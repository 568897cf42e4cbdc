//! Game Configuration
//!
//! Tunables for a session. `GameConfig::default()` reproduces the classic
//! tutorial level; JSON files may override any subset of fields.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::render::Color;

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON for this type.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A value is out of range.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Dotted field name
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Window and viewport settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in world units
    pub width: f32,
    /// Viewport height in world units
    pub height: f32,
    /// Window title
    pub title: String,
    /// Clear colour
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 650.0,
            title: "Platformer Game".to_string(),
            background: Color::CORNFLOWER_BLUE,
        }
    }
}

/// Player movement settings. Speeds are in world units per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn point (sprite centre)
    pub spawn: Vec2,
    /// Sprite scale factor
    pub scaling: f32,
    /// Horizontal speed while a move key is held
    pub speed: f32,
    /// Vertical velocity applied by a jump
    pub jump_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(64.0, 109.0),
            scaling: 0.7,
            speed: 5.0,
            jump_speed: 20.0,
        }
    }
}

/// Physics settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// How far below the player to probe for ground before allowing a jump
    pub ground_probe: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            ground_probe: 5.0,
        }
    }
}

/// Sprite scale factors for level pieces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Ground tiles and crates
    pub tile: f32,
    /// Coins and gems
    pub collectible: f32,
    /// Decorative clouds
    pub cloud: f32,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            tile: 0.5,
            collectible: 0.5,
            cloud: 0.09,
        }
    }
}

/// Scoring settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Starting value of the points-left counter
    pub initial_points: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { initial_points: 24 }
    }
}

/// Asset locations. Paths starting with `:resources:` are built in; anything
/// else is resolved against `root`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Directory for local asset files
    pub root: PathBuf,
    /// Player sprite
    pub player: String,
    /// Ground tile sprite
    pub ground: String,
    /// Crate sprite
    pub crate_box: String,
    /// Coin sprite
    pub coin: String,
    /// Gem sprite
    pub gem: String,
    /// Cloud sprite
    pub cloud: String,
    /// Sound played on coin pickup
    pub coin_sound: String,
    /// Sound played on jump
    pub jump_sound: String,
    /// Sound played on gem pickup
    pub gem_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            player: ":resources:images/animated_characters/male_adventurer/maleAdventurer_idle.png"
                .to_string(),
            ground: ":resources:images/tiles/grassMid.png".to_string(),
            crate_box: ":resources:images/tiles/boxCrate_double.png".to_string(),
            coin: ":resources:images/items/coinGold.png".to_string(),
            gem: ":resources:images/items/gemBlue.png".to_string(),
            cloud: "cloud.png".to_string(),
            coin_sound: ":resources:sounds/coin1.wav".to_string(),
            jump_sound: ":resources:sounds/jump1.wav".to_string(),
            gem_sound: ":resources:sounds/coin4.wav".to_string(),
        }
    }
}

// =============================================================================
// GAME CONFIG
// =============================================================================

/// Full session configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window and viewport
    pub window: WindowConfig,
    /// Player movement
    pub player: PlayerConfig,
    /// Physics
    pub physics: PhysicsConfig,
    /// Sprite scale factors
    pub scaling: ScalingConfig,
    /// Scoring
    pub scoring: ScoringConfig,
    /// Asset locations
    pub assets: AssetPaths,
}

impl GameConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate a config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid { field, reason: "must be a positive number" })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid { field, reason: "must be zero or a positive number" })
            }
        }

        positive("window.width", self.window.width)?;
        positive("window.height", self.window.height)?;
        positive("player.scaling", self.player.scaling)?;
        non_negative("player.speed", self.player.speed)?;
        non_negative("player.jump_speed", self.player.jump_speed)?;
        non_negative("physics.gravity", self.physics.gravity)?;
        non_negative("physics.ground_probe", self.physics.ground_probe)?;
        positive("scaling.tile", self.scaling.tile)?;
        positive("scaling.collectible", self.scaling.collectible)?;
        positive("scaling.cloud", self.scaling.cloud)?;

        if self.scoring.initial_points < 0 {
            return Err(ConfigError::Invalid {
                field: "scoring.initial_points",
                reason: "must be zero or a positive number",
            });
        }

        if !self.player.spawn.is_finite() {
            return Err(ConfigError::Invalid {
                field: "player.spawn",
                reason: "must be finite",
            });
        }

        Ok(())
    }

    /// Viewport size as a vector.
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.window.width, self.window.height)
    }
}
