//! Asset Catalog
//!
//! Sprites and sounds are referenced by symbolic ids inside the simulation.
//! At setup the session resolves every id through an [`AssetSource`], which
//! is where a missing file turns into a fatal setup error.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AssetPaths;

/// Prefix for assets bundled with the engine rather than read from disk.
pub const BUILTIN_PREFIX: &str = ":resources:";

/// Asset resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No asset exists at this path.
    #[error("asset not found: {path}")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// The file exists but is not a readable image.
    #[error("unreadable image {path}: {source}")]
    Image {
        /// Requested path
        path: String,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },
}

// =============================================================================
// IDS
// =============================================================================

/// Sprite identifiers used by bodies and draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpriteAsset {
    /// The player character
    Player = 0,
    /// Ground tile
    Ground = 1,
    /// Crate
    Crate = 2,
    /// Coin collectible
    Coin = 3,
    /// Gem collectible
    Gem = 4,
    /// Decorative cloud
    Cloud = 5,
}

impl SpriteAsset {
    /// Every sprite, in load order.
    pub const ALL: [SpriteAsset; 6] = [
        SpriteAsset::Player,
        SpriteAsset::Ground,
        SpriteAsset::Crate,
        SpriteAsset::Coin,
        SpriteAsset::Gem,
        SpriteAsset::Cloud,
    ];

    /// Configured path for this sprite.
    pub fn path(self, paths: &AssetPaths) -> &str {
        match self {
            SpriteAsset::Player => &paths.player,
            SpriteAsset::Ground => &paths.ground,
            SpriteAsset::Crate => &paths.crate_box,
            SpriteAsset::Coin => &paths.coin,
            SpriteAsset::Gem => &paths.gem,
            SpriteAsset::Cloud => &paths.cloud,
        }
    }
}

/// Sound effects the game can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Coin picked up
    Coin,
    /// Gem picked up
    Gem,
    /// Player jumped
    Jump,
}

impl SoundCue {
    /// Every cue, in load order.
    pub const ALL: [SoundCue; 3] = [SoundCue::Coin, SoundCue::Jump, SoundCue::Gem];

    /// Configured path for this cue.
    pub fn path(self, paths: &AssetPaths) -> &str {
        match self {
            SoundCue::Coin => &paths.coin_sound,
            SoundCue::Gem => &paths.gem_sound,
            SoundCue::Jump => &paths.jump_sound,
        }
    }
}

// =============================================================================
// SOURCES
// =============================================================================

/// Resolves asset paths at setup time.
pub trait AssetSource {
    /// Pixel size of the texture at `path`.
    fn texture_size(&mut self, path: &str) -> Result<Vec2, AssetError>;

    /// Confirm the sound at `path` can be played.
    fn sound(&mut self, path: &str) -> Result<(), AssetError>;
}

/// Built-in resource table plus local files under a root directory.
#[derive(Clone, Debug)]
pub struct ResourceCatalog {
    root: PathBuf,
    textures: BTreeMap<String, Vec2>,
    sounds: BTreeSet<String>,
}

impl ResourceCatalog {
    /// Catalog with no registered entries.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: BTreeMap::new(),
            sounds: BTreeSet::new(),
        }
    }

    /// Catalog pre-populated with the bundled `:resources:` assets.
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        Self::empty(root)
            .with_texture(
                ":resources:images/animated_characters/male_adventurer/maleAdventurer_idle.png",
                Vec2::new(96.0, 128.0),
            )
            .with_texture(":resources:images/tiles/grassMid.png", Vec2::splat(128.0))
            .with_texture(":resources:images/tiles/boxCrate_double.png", Vec2::splat(128.0))
            .with_texture(":resources:images/items/coinGold.png", Vec2::splat(128.0))
            .with_texture(":resources:images/items/gemBlue.png", Vec2::splat(128.0))
            .with_sound(":resources:sounds/coin1.wav")
            .with_sound(":resources:sounds/coin4.wav")
            .with_sound(":resources:sounds/jump1.wav")
    }

    /// Register a texture size for `path`.
    pub fn with_texture(mut self, path: impl Into<String>, size: Vec2) -> Self {
        self.textures.insert(path.into(), size);
        self
    }

    /// Register a playable sound at `path`.
    pub fn with_sound(mut self, path: impl Into<String>) -> Self {
        self.sounds.insert(path.into());
        self
    }

    fn local_file(&self, path: &str) -> Option<PathBuf> {
        if path.starts_with(BUILTIN_PREFIX) {
            return None;
        }
        let full = self.root.join(path);
        full.is_file().then_some(full)
    }
}

impl AssetSource for ResourceCatalog {
    fn texture_size(&mut self, path: &str) -> Result<Vec2, AssetError> {
        if let Some(size) = self.textures.get(path) {
            return Ok(*size);
        }

        let full = self.local_file(path).ok_or_else(|| AssetError::NotFound {
            path: path.to_string(),
        })?;
        let (w, h) = image::image_dimensions(&full).map_err(|source| AssetError::Image {
            path: path.to_string(),
            source,
        })?;
        let size = Vec2::new(w as f32, h as f32);

        debug!(path, width = w, height = h, "loaded local texture");
        self.textures.insert(path.to_string(), size);
        Ok(size)
    }

    fn sound(&mut self, path: &str) -> Result<(), AssetError> {
        if self.sounds.contains(path) {
            return Ok(());
        }
        if self.local_file(path).is_some() {
            self.sounds.insert(path.to_string());
            return Ok(());
        }
        Err(AssetError::NotFound {
            path: path.to_string(),
        })
    }
}

// =============================================================================
// LOADED SET
// =============================================================================

/// Texture sizes for every sprite, resolved once per setup.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedAssets {
    sizes: [Vec2; SpriteAsset::ALL.len()],
}

impl LoadedAssets {
    /// Resolve every sprite and sound through `source`.
    ///
    /// Fails on the first asset that cannot be resolved.
    pub fn load(paths: &AssetPaths, source: &mut dyn AssetSource) -> Result<Self, AssetError> {
        let mut sizes = [Vec2::ZERO; SpriteAsset::ALL.len()];
        for sprite in SpriteAsset::ALL {
            sizes[sprite as usize] = source.texture_size(sprite.path(paths))?;
        }
        for cue in SoundCue::ALL {
            source.sound(cue.path(paths))?;
        }
        Ok(Self { sizes })
    }

    /// Unscaled texture size of a sprite.
    #[inline]
    pub fn size(&self, sprite: SpriteAsset) -> Vec2 {
        self.sizes[sprite as usize]
    }
}
