//! Game Session
//!
//! Owns the world and the collaborators, and gates every operation on the
//! session phase. A session starts Uninitialized and only `setup` moves it
//! to Running.

use glam::Vec2;
use tracing::{debug, info, instrument, warn};

use crate::config::{ConfigError, GameConfig};
use crate::game::assets::{AssetError, AssetSource, LoadedAssets};
use crate::game::audio::{AudioCue, SilentAudio};
use crate::game::body::Body;
use crate::game::collectible::CollectibleSet;
use crate::game::collision::{CollisionIndex, OverlapIndex};
use crate::game::events::GameEvent;
use crate::game::input::{InputEvent, Key};
use crate::game::level::LevelLayout;
use crate::game::physics::{PhysicsStepper, PlatformerPhysics};
use crate::game::render::{render_world, RenderSurface};
use crate::game::state::World;
use crate::game::tick::{apply_input, tick, TickResult};

/// Session setup errors. Any of these aborts setup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Config or layout rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A texture or sound could not be resolved.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Session lifecycle.
#[derive(Clone, Debug, Default)]
pub enum SessionPhase {
    /// Not set up, or the last setup failed
    #[default]
    Uninitialized,
    /// Playing
    Running(Box<World>),
}

impl SessionPhase {
    /// The world, if running.
    pub fn world(&self) -> Option<&World> {
        match self {
            SessionPhase::Running(world) => Some(&**world),
            SessionPhase::Uninitialized => None,
        }
    }

    fn world_mut(&mut self) -> Option<&mut World> {
        match self {
            SessionPhase::Running(world) => Some(&mut **world),
            SessionPhase::Uninitialized => None,
        }
    }
}

/// One player's game.
#[derive(Debug)]
pub struct GameSession<P = PlatformerPhysics, C = OverlapIndex, A = SilentAudio> {
    config: GameConfig,
    layout: LevelLayout,
    physics: P,
    collisions: C,
    audio: A,
    phase: SessionPhase,
}

impl GameSession {
    /// Session with the stock physics, collision and silent audio.
    pub fn with_defaults(config: GameConfig, layout: LevelLayout) -> Self {
        let physics = PlatformerPhysics::new(config.physics.ground_probe);
        Self::new(config, layout, physics, OverlapIndex, SilentAudio)
    }
}

impl<P, C, A> GameSession<P, C, A>
where
    P: PhysicsStepper,
    C: CollisionIndex,
    A: AudioCue,
{
    /// Create an Uninitialized session.
    pub fn new(config: GameConfig, layout: LevelLayout, physics: P, collisions: C, audio: A) -> Self {
        Self {
            config,
            layout,
            physics,
            collisions,
            audio,
            phase: SessionPhase::Uninitialized,
        }
    }

    /// Build a fresh world and start playing.
    ///
    /// Any previous world is discarded first, so on error the session is
    /// left Uninitialized.
    #[instrument(skip_all)]
    pub fn setup(&mut self, assets: &mut dyn AssetSource) -> Result<(), SetupError> {
        self.phase = SessionPhase::Uninitialized;

        self.config.validate()?;
        self.layout.validate()?;
        self.physics.configure(&self.config.physics);
        let loaded = LoadedAssets::load(&self.config.assets, assets)?;

        let mut world = World::build(&self.config, &self.layout, &loaded);

        let layout_value = self.layout.total_value();
        if layout_value != self.config.scoring.initial_points {
            warn!(
                layout_value,
                initial_points = self.config.scoring.initial_points,
                "layout value differs from initial points"
            );
        }

        world.push_event(GameEvent::session_started(
            world.frame,
            world.coins.len(),
            world.gems.len(),
            world.remaining_points,
        ));

        info!(
            walls = world.walls().len(),
            coins = world.coins.len(),
            gems = world.gems.len(),
            clouds = world.clouds.len(),
            "session started"
        );

        self.phase = SessionPhase::Running(Box::new(world));
        Ok(())
    }

    /// Throw the world away and set up again from the same config and layout.
    pub fn restart(&mut self, assets: &mut dyn AssetSource) -> Result<(), SetupError> {
        info!("restarting session");
        self.setup(assets)
    }

    /// Run one frame. Does nothing unless running.
    pub fn update(&mut self, delta_seconds: f32) -> TickResult {
        let Some(world) = self.phase.world_mut() else {
            debug!("update ignored, session not running");
            return TickResult::default();
        };
        tick(
            world,
            delta_seconds,
            &self.config,
            &mut self.physics,
            &self.collisions,
            &mut self.audio,
        )
    }

    /// Apply a key transition. Returns true if it changed the player.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let Some(world) = self.phase.world_mut() else {
            debug!(?event, "input ignored, session not running");
            return false;
        };
        apply_input(world, event, &self.config, &self.physics, &mut self.audio)
    }

    /// Key pressed.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.handle(InputEvent::KeyDown(key))
    }

    /// Key released.
    pub fn key_up(&mut self, key: Key) -> bool {
        self.handle(InputEvent::KeyUp(key))
    }

    /// Key pressed, by raw key code.
    pub fn key_down_code(&mut self, code: u32) -> bool {
        self.key_down(Key::from_code(code))
    }

    /// Key released, by raw key code.
    pub fn key_up_code(&mut self, code: u32) -> bool {
        self.key_up(Key::from_code(code))
    }

    /// Draw the current frame. Only clears while Uninitialized.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self.phase.world() {
            Some(world) => render_world(world, self.config.window.background, surface),
            None => surface.clear(self.config.window.background),
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// True once setup has succeeded.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, SessionPhase::Running(_))
    }

    /// The running world.
    pub fn world(&self) -> Option<&World> {
        self.phase.world()
    }

    /// Points earned.
    pub fn score(&self) -> Option<u32> {
        self.world().map(|w| w.score)
    }

    /// Points-left counter.
    pub fn remaining_points(&self) -> Option<i32> {
        self.world().map(|w| w.remaining_points)
    }

    /// Seconds played.
    pub fn elapsed(&self) -> Option<f64> {
        self.world().map(|w| w.clock.elapsed())
    }

    /// The player body.
    pub fn player(&self) -> Option<&Body> {
        self.world().map(|w| &w.player)
    }

    /// Camera offset.
    pub fn camera_offset(&self) -> Option<Vec2> {
        self.world().map(|w| w.camera.offset)
    }

    /// Coins still in play.
    pub fn coins(&self) -> Option<&CollectibleSet> {
        self.world().map(|w| &w.coins)
    }

    /// Gems still in play.
    pub fn gems(&self) -> Option<&CollectibleSet> {
        self.world().map(|w| &w.gems)
    }

    /// Completed updates since setup.
    pub fn frame(&self) -> Option<u64> {
        self.world().map(|w| w.frame)
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Physics collaborator.
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Audio collaborator.
    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::assets::{ResourceCatalog, SoundCue};
    use crate::game::events::GameEventData;
    use crate::game::render::Color;
    use crate::headless::{DrawCommand, LoggingAudio, RecordingSurface};

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::builtin("unused").with_texture("cloud.png", Vec2::new(1000.0, 600.0))
    }

    fn session(layout: LevelLayout) -> GameSession<PlatformerPhysics, OverlapIndex, LoggingAudio> {
        GameSession::new(
            GameConfig::default(),
            layout,
            PlatformerPhysics::default(),
            OverlapIndex,
            LoggingAudio::new(),
        )
    }

    #[test]
    fn test_uninitialized_is_inert() {
        let mut session = session(LevelLayout::classic());

        assert!(!session.is_running());
        assert!(session.update(1.0 / 60.0).events.is_empty());
        assert!(!session.key_down(Key::Right));
        assert_eq!(session.score(), None);

        let mut surface = RecordingSurface::new();
        session.render(&mut surface);
        assert_eq!(surface.commands(), &[DrawCommand::Clear(Color::CORNFLOWER_BLUE)]);
    }

    #[test]
    fn test_setup_starts_running() {
        let mut session = session(LevelLayout::classic());
        session.setup(&mut catalog()).unwrap();

        assert!(session.is_running());
        assert_eq!(session.score(), Some(0));
        assert_eq!(session.remaining_points(), Some(24));
        assert_eq!(session.elapsed(), Some(0.0));
        assert_eq!(session.player().unwrap().position, Vec2::new(64.0, 109.0));
        assert_eq!(session.coins().unwrap().len(), 12);
        assert_eq!(session.gems().unwrap().len(), 4);

        let events = session.update(1.0 / 60.0).events;
        assert!(matches!(
            events[0].data,
            GameEventData::SessionStarted { coins: 12, gems: 4, remaining_points: 24 }
        ));
    }

    #[test]
    fn test_failed_setup_discards_world() {
        let mut session = session(LevelLayout::classic());
        session.setup(&mut catalog()).unwrap();

        // No cloud texture registered and no such asset root
        let err = session.setup(&mut ResourceCatalog::builtin("/no/such/root")).unwrap_err();
        assert!(matches!(err, SetupError::Asset(AssetError::NotFound { .. })));
        assert!(!session.is_running());
    }

    #[test]
    fn test_invalid_config_fails_setup() {
        let mut config = GameConfig::default();
        config.scaling.tile = -1.0;
        let mut session = GameSession::with_defaults(config, LevelLayout::classic());

        assert!(matches!(session.setup(&mut catalog()), Err(SetupError::Config(_))));
        assert!(!session.is_running());
    }

    #[test]
    fn test_setup_applies_ground_probe() {
        let mut config = GameConfig::default();
        config.physics.ground_probe = 12.0;
        let mut session = GameSession::new(
            config,
            LevelLayout::classic(),
            PlatformerPhysics::default(),
            OverlapIndex,
            LoggingAudio::new(),
        );

        session.setup(&mut catalog()).unwrap();
        assert_eq!(session.physics().ground_probe, 12.0);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut session = session(LevelLayout::classic());
        let mut assets = catalog();
        session.setup(&mut assets).unwrap();

        session.key_down(Key::Right);
        for _ in 0..300 {
            session.update(1.0 / 60.0);
        }
        assert!(session.score().unwrap() > 0);
        assert!(session.elapsed().unwrap() > 4.9);

        session.restart(&mut assets).unwrap();
        assert_eq!(session.score(), Some(0));
        assert_eq!(session.remaining_points(), Some(24));
        assert_eq!(session.elapsed(), Some(0.0));
        assert_eq!(session.frame(), Some(0));
        assert_eq!(session.coins().unwrap().len(), 12);
    }

    #[test]
    fn test_key_codes() {
        let mut session = session(LevelLayout::classic());
        session.setup(&mut catalog()).unwrap();
        session.update(1.0 / 60.0);

        assert!(session.key_down_code(Key::CODE_RIGHT));
        assert_eq!(session.player().unwrap().velocity.x, 5.0);
        assert!(session.key_up_code(Key::CODE_RIGHT));
        assert_eq!(session.player().unwrap().velocity.x, 0.0);

        assert!(session.key_down_code(Key::CODE_UP));
        assert_eq!(session.audio().count(SoundCue::Jump), 1);

        assert!(!session.key_down_code(32));
    }

    #[test]
    fn test_negative_delta_keeps_clock() {
        let mut session = session(LevelLayout::classic());
        session.setup(&mut catalog()).unwrap();

        session.update(0.5);
        session.update(-3.0);
        session.update(f32::NAN);

        assert_eq!(session.elapsed(), Some(0.5));
        assert_eq!(session.frame(), Some(3));
    }
}
