//! Coin Platformer
//!
//! Headless demo driver. Sets up a session, runs a scripted player for a
//! fixed number of frames and logs what happened.
//!
//! Usage: `coin-platformer [CONFIG.json] [LAYOUT.json]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coin_platformer::{
    game::{
        collision::OverlapIndex,
        events::GameEventData,
        input::Key,
        physics::PlatformerPhysics,
        render::hud_lines,
        session::GameSession,
        SoundCue,
    },
    GameConfig, LevelLayout, LoggingAudio, RecordingSurface, ResourceCatalog, TICK_RATE, VERSION,
};

/// Frames to run when `PLATFORMER_TICKS` is unset.
const DEFAULT_TICKS: u64 = 2400;

/// Press jump at least this often, in frames.
const JUMP_INTERVAL: u64 = 45;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Coin Platformer v{}", VERSION);

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::from_json_file(&path)
            .with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };
    let layout = match args.next() {
        Some(path) => LevelLayout::from_json_file(&path)
            .with_context(|| format!("loading layout {path}"))?,
        None => LevelLayout::classic(),
    };
    let ticks = match std::env::var("PLATFORMER_TICKS") {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("PLATFORMER_TICKS must be a frame count, got {value:?}"))?,
        Err(_) => DEFAULT_TICKS,
    };

    info!(
        "{} ({}x{}), {} frames at {} Hz",
        config.window.title, config.window.width, config.window.height, ticks, TICK_RATE
    );

    run(config, layout, ticks)
}

/// Asset root, falling back to the one shipped next to the manifest.
fn asset_root(configured: &Path) -> PathBuf {
    if configured.is_relative() && !configured.exists() {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(configured)
    } else {
        configured.to_path_buf()
    }
}

fn run(config: GameConfig, layout: LevelLayout, ticks: u64) -> Result<()> {
    let mut assets = ResourceCatalog::builtin(asset_root(&config.assets.root));
    let physics = PlatformerPhysics::new(config.physics.ground_probe);
    let mut session = GameSession::new(config, layout, physics, OverlapIndex, LoggingAudio::new());
    session.setup(&mut assets).context("session setup failed")?;

    let level_end = session
        .world()
        .and_then(|w| w.walls().iter().map(|b| b.bounds().right()).reduce(f32::max))
        .unwrap_or(0.0);

    let delta = 1.0 / TICK_RATE as f32;
    let mut surface = RecordingSurface::new();
    let mut heading = Key::Right;
    let mut last_x = f32::NAN;
    session.key_down(heading);

    for frame in 0..ticks {
        let result = session.update(delta);
        session.render(&mut surface);

        for event in &result.events {
            match &event.data {
                GameEventData::CollectiblePicked { kind, position, new_score, remaining_points, .. } => {
                    info!(
                        "Frame {}: picked {:?} at ({:.0}, {:.0}), score {}, {} left",
                        event.frame, kind, position.x, position.y, new_score, remaining_points
                    );
                }
                GameEventData::SessionStarted { coins, gems, remaining_points } => {
                    info!("{} coins, {} gems, {} points to collect", coins, gems, remaining_points);
                }
                GameEventData::Jumped { .. } => {}
            }
        }

        let Some(player) = session.player() else { break };
        let x = player.position.x;

        // Turn around at either end of the level
        let turn = match heading {
            Key::Right if x >= level_end => Some(Key::Left),
            Key::Left if x <= 0.0 => Some(Key::Right),
            _ => None,
        };
        if let Some(next) = turn {
            session.key_up(heading);
            heading = next;
            session.key_down(heading);
        }

        // Hop over whatever is in the way, and now and then for the gems
        if x == last_x || frame % JUMP_INTERVAL == 0 {
            session.key_down(Key::Jump);
        }
        last_x = x;

        if frame > 0 && frame % (10 * TICK_RATE as u64) == 0 {
            info!("Frame {}: x = {:.0}, {}", frame, x, surface.texts().join(" | "));
        }
    }

    info!("=== Final HUD ===");
    if let Some(world) = session.world() {
        for line in hud_lines(world) {
            info!("{}", line.text);
        }
        let audio = session.audio();
        let picked = audio.count(SoundCue::Coin) + audio.count(SoundCue::Gem);
        let left = world.coins.len() + world.gems.len();
        info!(
            "Collected {} of {} collectibles, {} jumps",
            picked,
            picked + left,
            audio.count(SoundCue::Jump)
        );
    }

    Ok(())
}
