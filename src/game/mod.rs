//! Game Logic Module
//!
//! Everything that runs once a session is set up.
//!
//! ## Module Structure
//!
//! - `assets`: Sprite and sound ids, asset resolution
//! - `body`: Movable and static sprite bodies
//! - `level`: Level layout and its row patterns
//! - `collectible`: Coins, gems and the sets holding them
//! - `physics`: Gravity and obstacle resolution
//! - `collision`: Overlap queries
//! - `camera`: Scrolling viewport
//! - `input`: Key codes and key transitions
//! - `audio`: Sound cue playback
//! - `events`: Game events for logging and tests
//! - `state`: The running world
//! - `tick`: Per-frame update and input handling
//! - `render`: Render pass and HUD
//! - `session`: Session lifecycle

pub mod assets;
pub mod audio;
pub mod body;
pub mod camera;
pub mod collectible;
pub mod collision;
pub mod events;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
pub mod session;
pub mod state;
pub mod tick;

// Re-export key types
pub use assets::{AssetSource, ResourceCatalog, SoundCue, SpriteAsset};
pub use events::{GameEvent, GameEventData};
pub use input::{InputEvent, Key};
pub use level::LevelLayout;
pub use render::{Color, RenderSurface};
pub use session::{GameSession, SessionPhase, SetupError};
pub use state::World;
pub use tick::TickResult;
