//! Session-level properties, driven through the public API.

use glam::Vec2;
use proptest::prelude::*;

use coin_platformer::game::{
    camera::Camera,
    collision::OverlapIndex,
    input::Key,
    physics::{PhysicsStepper, PlatformerPhysics},
    session::GameSession,
    SoundCue,
};
use coin_platformer::{GameConfig, LevelLayout, LoggingAudio, ResourceCatalog};

type Session = GameSession<PlatformerPhysics, OverlapIndex, LoggingAudio>;

const DELTA: f32 = 1.0 / 60.0;

fn catalog() -> ResourceCatalog {
    ResourceCatalog::builtin("unused").with_texture("cloud.png", Vec2::new(1000.0, 600.0))
}

fn running(layout: LevelLayout) -> Session {
    let mut session = GameSession::new(
        GameConfig::default(),
        layout,
        PlatformerPhysics::default(),
        OverlapIndex,
        LoggingAudio::new(),
    );
    session.setup(&mut catalog()).unwrap();
    session
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Press(Key),
    Release(Key),
    Idle,
}

fn action() -> impl Strategy<Value = Action> {
    let key = prop_oneof![Just(Key::Left), Just(Key::Right), Just(Key::Jump)];
    prop_oneof![
        key.clone().prop_map(Action::Press),
        key.prop_map(Action::Release),
        Just(Action::Idle),
    ]
}

fn apply(session: &mut Session, action: Action) {
    match action {
        Action::Press(key) => {
            session.key_down(key);
        }
        Action::Release(key) => {
            session.key_up(key);
        }
        Action::Idle => {}
    }
}

/// Layout with collectibles scattered around the spawn area.
fn crowded_layout() -> impl Strategy<Value = LevelLayout> {
    let spot = (0.0f32..600.0, 60.0f32..260.0).prop_map(|(x, y)| Vec2::new(x, y));
    (
        prop::collection::vec(spot.clone(), 0..20),
        prop::collection::vec(spot, 0..8),
    )
        .prop_map(|(coins, gems)| {
            let mut layout = LevelLayout::classic();
            layout.coin_rows.clear();
            layout.gem_rows.clear();
            layout.coins = coins;
            layout.gems = gems;
            layout
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pickups_move_score_and_points_together(
        layout in crowded_layout(),
        script in prop::collection::vec(action(), 1..240),
    ) {
        let placed = layout.coin_positions().len() + layout.gem_positions().len();
        let mut session = running(layout);
        let mut picked = 0;

        for step in script {
            let score = session.score().unwrap();
            let remaining = session.remaining_points().unwrap();

            apply(&mut session, step);
            let result = session.update(DELTA);

            let coins = result.coins_picked as u32;
            let gems = result.gems_picked as u32;
            prop_assert_eq!(session.score().unwrap(), score + coins + 3 * gems);
            prop_assert_eq!(
                session.remaining_points().unwrap(),
                remaining - coins as i32 - 3 * gems as i32
            );
            picked += result.coins_picked + result.gems_picked;
        }

        // No collectible is ever counted twice
        let left = session.coins().unwrap().len() + session.gems().unwrap().len();
        prop_assert_eq!(picked + left, placed);
        let audio = session.audio();
        prop_assert_eq!(audio.count(SoundCue::Coin) + audio.count(SoundCue::Gem), picked);
    }

    #[test]
    fn prop_camera_offset_never_negative(
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        w in 1.0f32..4000.0,
        h in 1.0f32..4000.0,
    ) {
        let offset = Camera::centered_offset(Vec2::new(w, h), Vec2::new(x, y));
        prop_assert!(offset.x >= 0.0);
        prop_assert!(offset.y >= 0.0);
    }

    #[test]
    fn prop_session_camera_never_negative(script in prop::collection::vec(action(), 1..300)) {
        let mut session = running(LevelLayout::classic());
        for step in script {
            apply(&mut session, step);
            session.update(DELTA);
            let offset = session.camera_offset().unwrap();
            prop_assert!(offset.x >= 0.0 && offset.y >= 0.0);
        }
    }

    #[test]
    fn prop_jump_only_from_ground(script in prop::collection::vec(action(), 1..300)) {
        let mut session = running(LevelLayout::classic());
        let physics = PlatformerPhysics::default();

        for step in script {
            if let Action::Press(Key::Jump) = step {
                let before = session.player().unwrap().velocity;
                let grounded = {
                    let world = session.world().unwrap();
                    physics.is_grounded(&world.player, world.obstacles())
                };

                session.key_down(Key::Jump);
                let after = session.player().unwrap().velocity;

                if grounded {
                    prop_assert_eq!(after.y, 20.0);
                    prop_assert_eq!(after.x, before.x);
                } else {
                    prop_assert_eq!(after, before);
                }
            } else {
                apply(&mut session, step);
            }
            session.update(DELTA);
        }
    }

    #[test]
    fn prop_elapsed_never_decreases(deltas in prop::collection::vec(-1.0f32..1.0, 1..200)) {
        let mut session = running(LevelLayout::classic());
        let mut last = session.elapsed().unwrap();

        for delta in deltas {
            session.update(delta);
            let now = session.elapsed().unwrap();
            prop_assert!(now >= last);
            last = now;
        }

        session.restart(&mut catalog()).unwrap();
        prop_assert_eq!(session.elapsed(), Some(0.0));
    }
}

#[test]
fn test_classic_value_matches_initial_points() {
    let layout = LevelLayout::classic();
    assert_eq!(layout.total_value(), 24);

    let session = running(layout);
    let world = session.world().unwrap();
    assert_eq!(
        world.coins.total_value() + world.gems.total_value(),
        world.remaining_points
    );
    assert_eq!(world.remaining_points, 24);
}

#[test]
fn test_walk_right_without_obstacles() {
    let mut session = running(LevelLayout::empty());
    session.key_down(Key::Right);

    let mut last_x = session.player().unwrap().position.x;
    for _ in 0..50 {
        session.update(DELTA);
        let x = session.player().unwrap().position.x;
        assert!(x > last_x);
        last_x = x;
    }

    session.key_up(Key::Right);
    assert_eq!(session.player().unwrap().velocity.x, 0.0);
    session.update(DELTA);
    assert_eq!(session.player().unwrap().position.x, last_x);
}

#[test]
fn test_coin_at_spawn() {
    let mut layout = LevelLayout::empty();
    layout.coins.push(Vec2::new(64.0, 109.0));
    let mut session = running(layout);

    session.update(DELTA);

    assert!(session.coins().unwrap().is_empty());
    assert_eq!(session.score(), Some(1));
    assert_eq!(session.remaining_points(), Some(23));
    assert_eq!(session.audio().played(), &[SoundCue::Coin]);
}
