//! World State
//!
//! Everything that exists while a session is running. A `World` is built in
//! one go from the config, the layout and the resolved assets, and thrown
//! away whole on restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::core::aabb::Aabb;
use crate::core::clock::SessionClock;
use crate::game::assets::{LoadedAssets, SpriteAsset};
use crate::game::body::Body;
use crate::game::camera::Camera;
use crate::game::collectible::{Collectible, CollectibleKind, CollectibleSet};
use crate::game::events::GameEvent;
use crate::game::level::LevelLayout;

/// Live game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    /// The one and only player
    pub player: Body,

    /// Ground tiles followed by crates
    walls: Vec<Body>,

    /// Coins still in play
    pub coins: CollectibleSet,

    /// Gems still in play
    pub gems: CollectibleSet,

    /// Decorative clouds (no collision)
    pub clouds: Vec<Body>,

    /// Points earned so far
    pub score: u32,

    /// Points still to be earned, as counted down by pickups
    pub remaining_points: i32,

    /// Elapsed play time
    pub clock: SessionClock,

    /// Scrolling camera
    pub camera: Camera,

    /// Completed update count
    pub frame: u64,

    /// Hit boxes of `walls`, fixed after construction
    obstacles: Vec<Aabb>,

    /// Events waiting to be handed to the driver
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl World {
    /// Build the starting world.
    pub fn build(config: &GameConfig, layout: &LevelLayout, assets: &LoadedAssets) -> Self {
        let scaled = |sprite: SpriteAsset, scale: f32| assets.size(sprite) * scale;

        let player = Body::new(
            SpriteAsset::Player,
            config.player.spawn,
            scaled(SpriteAsset::Player, config.player.scaling),
        );

        let ground_size = scaled(SpriteAsset::Ground, config.scaling.tile);
        let crate_size = scaled(SpriteAsset::Crate, config.scaling.tile);
        let walls: Vec<Body> = layout
            .ground_positions()
            .into_iter()
            .map(|p| Body::new(SpriteAsset::Ground, p, ground_size))
            .chain(
                layout
                    .crates
                    .iter()
                    .map(|&p| Body::new(SpriteAsset::Crate, p, crate_size)),
            )
            .collect();
        let obstacles = walls.iter().map(Body::bounds).collect();

        let collectibles = |kind: CollectibleKind, positions: Vec<Vec2>| -> CollectibleSet {
            let size = scaled(kind.sprite(), config.scaling.collectible);
            positions
                .into_iter()
                .map(|p| Collectible::new(kind, Body::new(kind.sprite(), p, size)))
                .collect()
        };
        let coins = collectibles(CollectibleKind::Coin, layout.coin_positions());
        let gems = collectibles(CollectibleKind::Gem, layout.gem_positions());

        let cloud_size = scaled(SpriteAsset::Cloud, config.scaling.cloud);
        let clouds = layout
            .clouds
            .iter()
            .map(|&p| Body::new(SpriteAsset::Cloud, p, cloud_size))
            .collect();

        let mut camera = Camera::new(config.viewport());
        camera.recenter(player.position);

        Self {
            player,
            walls,
            coins,
            gems,
            clouds,
            score: 0,
            remaining_points: config.scoring.initial_points,
            clock: SessionClock::new(),
            camera,
            frame: 0,
            obstacles,
            events: Vec::new(),
        }
    }

    /// Ground tiles followed by crates. Fixed after construction.
    pub fn walls(&self) -> &[Body] {
        &self.walls
    }

    /// Static obstacle hit boxes, index-aligned with `walls()`.
    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    /// The player and the obstacle boxes, borrowed together for a physics step.
    pub fn player_and_obstacles(&mut self) -> (&mut Body, &[Aabb]) {
        (&mut self.player, &self.obstacles)
    }

    /// The set holding collectibles of `kind`.
    pub fn collectibles(&self, kind: CollectibleKind) -> &CollectibleSet {
        match kind {
            CollectibleKind::Coin => &self.coins,
            CollectibleKind::Gem => &self.gems,
        }
    }

    /// Mutable access to the set holding collectibles of `kind`.
    pub fn collectibles_mut(&mut self, kind: CollectibleKind) -> &mut CollectibleSet {
        match kind {
            CollectibleKind::Coin => &mut self.coins,
            CollectibleKind::Gem => &mut self.gems,
        }
    }

    /// Credit a pickup: score goes up and points-left goes down by the same value.
    pub fn award(&mut self, kind: CollectibleKind) {
        let points = kind.value();
        self.score = self.score.saturating_add(points.unsigned_abs());
        self.remaining_points = self.remaining_points.saturating_sub(points);
    }

    /// Queue an event for the driver.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
