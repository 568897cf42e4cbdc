//! Frame Update
//!
//! The per-frame step and the input handlers that feed it. Step order is
//! fixed: physics, camera, coins, gems, clock. Each step reads what the
//! previous one wrote.

use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::game::assets::SoundCue;
use crate::game::audio::AudioCue;
use crate::game::collectible::CollectibleKind;
use crate::game::collision::CollisionIndex;
use crate::game::events::GameEvent;
use crate::game::input::{InputEvent, Key};
use crate::game::physics::PhysicsStepper;
use crate::game::state::World;

/// Result of one update.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated since the previous update (input events included)
    pub events: Vec<GameEvent>,
    /// Coins picked up this frame
    pub coins_picked: usize,
    /// Gems picked up this frame
    pub gems_picked: usize,
}

impl TickResult {
    /// Points awarded this frame.
    pub fn points(&self) -> i32 {
        self.coins_picked as i32 * CollectibleKind::Coin.value()
            + self.gems_picked as i32 * CollectibleKind::Gem.value()
    }
}

/// Run one frame.
///
/// # Arguments
///
/// * `world` - The running world (mutated)
/// * `delta_seconds` - Frame time, only used by the clock
/// * `config` - Session configuration
pub fn tick<P, C, A>(
    world: &mut World,
    delta_seconds: f32,
    config: &GameConfig,
    physics: &mut P,
    collisions: &C,
    audio: &mut A,
) -> TickResult
where
    P: PhysicsStepper + ?Sized,
    C: CollisionIndex + ?Sized,
    A: AudioCue + ?Sized,
{
    let mut result = TickResult::default();

    // 0. Advance frame counter
    world.frame += 1;

    // 1. Player physics
    let (player, obstacles) = world.player_and_obstacles();
    physics.step(player, config.physics.gravity, obstacles);

    // 2. Camera
    world.camera.recenter(world.player.position);

    // 3. Coins
    result.coins_picked = collect(world, CollectibleKind::Coin, collisions, audio);

    // 4. Gems
    result.gems_picked = collect(world, CollectibleKind::Gem, collisions, audio);

    // 5. Clock
    world.clock.advance(delta_seconds);

    trace!(
        frame = world.frame,
        x = world.player.position.x,
        y = world.player.position.y,
        score = world.score,
        "tick"
    );

    result.events = world.take_events();
    result
}

/// Pick up every collectible of `kind` the player overlaps. Returns how many.
fn collect<C, A>(world: &mut World, kind: CollectibleKind, collisions: &C, audio: &mut A) -> usize
where
    C: CollisionIndex + ?Sized,
    A: AudioCue + ?Sized,
{
    let subject = world.player.bounds();
    let hits = collisions.overlapping(&subject, &world.collectibles(kind).bounds());
    if hits.is_empty() {
        return 0;
    }

    let mut picked = 0;
    for index in hits {
        let set = world.collectibles_mut(kind);
        let Some(position) = set.get(index).map(|c| c.body.position) else {
            continue;
        };
        if set.mark_removed(index).is_none() {
            continue;
        }

        audio.play(kind.sound());
        world.award(kind);
        picked += 1;

        debug!(
            ?kind,
            x = position.x,
            y = position.y,
            score = world.score,
            remaining = world.remaining_points,
            "collectible picked"
        );
        let event = GameEvent::collectible_picked(
            world.frame,
            kind,
            position,
            world.score,
            world.remaining_points,
        );
        world.push_event(event);
    }

    world.collectibles_mut(kind).compact();
    picked
}

/// Apply one key transition to the player.
///
/// Returns true if the event changed anything. Unknown keys, key-up of the
/// jump key and jumps while airborne are ignored.
pub fn apply_input<P, A>(
    world: &mut World,
    event: InputEvent,
    config: &GameConfig,
    physics: &P,
    audio: &mut A,
) -> bool
where
    P: PhysicsStepper + ?Sized,
    A: AudioCue + ?Sized,
{
    let speed = config.player.speed;

    match event {
        InputEvent::KeyDown(Key::Left) => {
            world.player.velocity.x = -speed;
            true
        }
        InputEvent::KeyDown(Key::Right) => {
            world.player.velocity.x = speed;
            true
        }
        InputEvent::KeyUp(Key::Left) if world.player.velocity.x == -speed => {
            world.player.velocity.x = 0.0;
            true
        }
        InputEvent::KeyUp(Key::Right) if world.player.velocity.x == speed => {
            world.player.velocity.x = 0.0;
            true
        }
        InputEvent::KeyDown(Key::Jump) => {
            if !physics.is_grounded(&world.player, world.obstacles()) {
                return false;
            }
            world.player.velocity.y = config.player.jump_speed;
            audio.play(SoundCue::Jump);

            debug!(frame = world.frame, "jump");
            let event = GameEvent::jumped(world.frame, world.player.position);
            world.push_event(event);
            true
        }
        _ => false,
    }
}
