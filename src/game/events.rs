//! Game Events
//!
//! Things that happened during a frame, handed back to the driver for
//! logging and inspection. Events never feed back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::game::collectible::CollectibleKind;

/// Event payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A fresh world was built
    SessionStarted {
        /// Coins placed
        coins: usize,
        /// Gems placed
        gems: usize,
        /// Starting value of the points-left counter
        remaining_points: i32,
    },

    /// The player picked up a coin or gem
    CollectiblePicked {
        /// Coin or gem
        kind: CollectibleKind,
        /// Where it was
        position: Vec2,
        /// Points awarded
        points: i32,
        /// Score after the pickup
        new_score: u32,
        /// Points-left counter after the pickup
        remaining_points: i32,
    },

    /// The player left the ground
    Jumped {
        /// Take-off position
        position: Vec2,
    },
}

/// An event stamped with the frame it happened in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Frame counter when the event occurred (0 before the first update)
    pub frame: u64,
    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(frame: u64, data: GameEventData) -> Self {
        Self { frame, data }
    }

    /// Create session started event.
    pub fn session_started(frame: u64, coins: usize, gems: usize, remaining_points: i32) -> Self {
        Self::new(
            frame,
            GameEventData::SessionStarted {
                coins,
                gems,
                remaining_points,
            },
        )
    }

    /// Create collectible picked event.
    pub fn collectible_picked(
        frame: u64,
        kind: CollectibleKind,
        position: Vec2,
        new_score: u32,
        remaining_points: i32,
    ) -> Self {
        Self::new(
            frame,
            GameEventData::CollectiblePicked {
                kind,
                position,
                points: kind.value(),
                new_score,
                remaining_points,
            },
        )
    }

    /// Create jumped event.
    pub fn jumped(frame: u64, position: Vec2) -> Self {
        Self::new(frame, GameEventData::Jumped { position })
    }

    /// True for coin and gem pickups.
    pub fn is_pickup(&self) -> bool {
        matches!(self.data, GameEventData::CollectiblePicked { .. })
    }
}
