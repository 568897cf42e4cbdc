//! # Coin Platformer
//!
//! Headless core of a side-scrolling platformer: one player, static ground
//! and crates, coins and gems to collect, a score and a play clock.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     COIN PLATFORMER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Shared primitives                         │
//! │  ├── aabb.rs     - Axis-aligned hit boxes                    │
//! │  └── clock.rs    - Elapsed play time                         │
//! │                                                              │
//! │  config.rs       - Tunables, JSON loading                    │
//! │                                                              │
//! │  game/           - Game logic                                │
//! │  ├── level.rs    - Level layout                              │
//! │  ├── state.rs    - The running world                         │
//! │  ├── physics.rs  - Gravity and obstacle resolution           │
//! │  ├── tick.rs     - Per-frame update and input                │
//! │  ├── render.rs   - Render pass and HUD                       │
//! │  └── session.rs  - Session lifecycle                         │
//! │                                                              │
//! │  headless.rs     - Recording surface, logging audio          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborators
//!
//! Physics, collision queries, audio, rendering and asset lookup sit behind
//! traits. The session is generic over the first three and takes the last
//! two per call, so a windowed front end can plug in without touching the
//! game logic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod headless;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use crate::core::{Aabb, SessionClock};
pub use game::{GameSession, LevelLayout, ResourceCatalog, SetupError};
pub use headless::{LoggingAudio, RecordingSurface};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame rate the game is tuned for (Hz)
pub const TICK_RATE: u32 = 60;
