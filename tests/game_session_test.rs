//! Integration test: whole-game scenarios
//!
//! Drives a `GameSession` through start, play, collision flash and restart
//! using only the public API, the way the binary's main loop does.

use flappy::core::physics::{step, Collision};
use flappy::core::{GameConfig, GameInput, GameSession, ObstaclePair, ScreenMode, TickEvent, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_session(seed: u64) -> GameSession<ChaCha8Rng> {
    GameSession::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(seed))
}

/// Advance exactly one tick.
fn tick(session: &mut GameSession<ChaCha8Rng>) -> Vec<TickEvent> {
    let tick_ms = session.config().tick_ms;
    session.advance(tick_ms)
}

fn start(session: &mut GameSession<ChaCha8Rng>) {
    session.queue_input(GameInput::Confirm);
    let events = tick(session);
    assert_eq!(events, vec![TickEvent::GameStarted]);
    assert_eq!(session.mode(), ScreenMode::Playing);
}

/// Run whole ticks covering `ms` of wall time.
fn run_for(session: &mut GameSession<ChaCha8Rng>, ms: u64) -> Vec<TickEvent> {
    let tick_ms = session.config().tick_ms;
    (0..ms / tick_ms).flat_map(|_| tick(session)).collect()
}

/// Tick until the session leaves Playing; returns the tick count and events.
fn play_until_collision(session: &mut GameSession<ChaCha8Rng>) -> (u32, Vec<TickEvent>) {
    let mut all = Vec::new();
    for n in 1..=10_000 {
        all.extend(tick(session));
        if session.mode() != ScreenMode::Playing {
            return (n, all);
        }
    }
    panic!("never collided");
}

// =============================================================================
// Free fall
// =============================================================================

#[test]
fn test_free_fall_hits_floor_then_ends_after_flash() {
    let mut session = new_session(1);
    start(&mut session);

    let config = session.config().clone();
    let (ticks, events) = play_until_collision(&mut session);

    // y_n = start + n(n+1)/2; first n where y_n + size > bottom
    let fall_room = config.bottom() - config.avatar_size - config.avatar_start_y();
    let expected = (1..).find(|n: &i32| n * (n + 1) / 2 > fall_room).unwrap();
    assert_eq!(ticks as i32, expected);

    let collided = events
        .iter()
        .find_map(|e| match e {
            TickEvent::Collided { kinds, .. } => Some(kinds.clone()),
            _ => None,
        })
        .expect("collision event");
    assert!(collided.contains(&Collision::Floor));
    assert!(!session.world().running);
    assert_eq!(session.mode(), ScreenMode::CollisionFlash);

    // Flash lasts flash_ms of wall time
    run_for(&mut session, config.flash_ms - config.tick_ms);
    assert_eq!(session.mode(), ScreenMode::CollisionFlash);
    let events = tick(&mut session);
    assert_eq!(events, vec![TickEvent::FlashEnded { score: 0 }]);
    assert_eq!(session.mode(), ScreenMode::Ended);
}

#[test]
fn test_gravity_recurrence_while_playing() {
    let mut session = new_session(2);
    start(&mut session);

    let x0 = session.world().avatar.x;
    let (mut y, mut v) = (session.world().avatar.y, session.world().avatar.velocity);
    for _ in 0..15 {
        tick(&mut session);
        v += 1;
        y += v;
        assert_eq!(session.world().avatar.velocity, v);
        assert_eq!(session.world().avatar.y, y);
        assert_eq!(session.world().avatar.x, x0);
    }
}

// =============================================================================
// Jumping
// =============================================================================

#[test]
fn test_jump_sets_exact_velocity_regardless_of_prior() {
    let config = GameConfig::default();
    let mut world = World::new(&config);
    world.reset(&config, &mut ChaCha8Rng::seed_from_u64(3));

    for prior in [-20, -10, -1, 0, 7, 19] {
        world.avatar.velocity = prior;
        world.apply_impulse(&config);
        assert_eq!(world.avatar.velocity, config.impulse_velocity);
    }
}

#[test]
fn test_holding_jump_gives_one_impulse() {
    let mut session = new_session(4);
    start(&mut session);

    session.queue_input(GameInput::JumpPressed);
    assert!(tick(&mut session).contains(&TickEvent::Jumped));

    // Repeated presses with no release in between
    for _ in 0..5 {
        session.queue_input(GameInput::JumpPressed);
        assert!(!tick(&mut session).contains(&TickEvent::Jumped));
    }

    session.queue_input(GameInput::JumpReleased);
    session.queue_input(GameInput::JumpPressed);
    assert!(tick(&mut session).contains(&TickEvent::Jumped));
}

#[test]
fn test_periodic_flapping_stays_airborne_longer() {
    let mut falling = new_session(5);
    start(&mut falling);
    let (fall_ticks, _) = play_until_collision(&mut falling);

    let mut flapping = new_session(5);
    start(&mut flapping);
    let mut survived = 0;
    for n in 0..fall_ticks * 2 {
        if n % 12 == 0 {
            flapping.queue_input(GameInput::JumpPressed);
        } else if n % 12 == 1 {
            flapping.queue_input(GameInput::JumpReleased);
        }
        tick(&mut flapping);
        if flapping.mode() != ScreenMode::Playing {
            break;
        }
        survived += 1;
    }
    assert!(survived > fall_ticks);
}

// =============================================================================
// Obstacles and scoring
// =============================================================================

#[test]
fn test_pair_past_left_edge_replaced_and_scored() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut world = World::new(&config);
    world.reset(&config, &mut rng);
    world.obstacles.clear();
    // After this tick's scroll the pair's right edge is at -1
    world
        .obstacles
        .push_back(ObstaclePair::at(&config, -1 - config.obstacle_width + config.scroll_speed, 100));

    let outcome = step(&mut world, &config, &mut rng);

    assert!(outcome.scored);
    assert_eq!(world.score, 1);
    assert_eq!(world.obstacles.len(), 1);
    let fresh = world.obstacles[0];
    assert_eq!(fresh.upper.x, config.playfield_width);
    assert_eq!(fresh.lower.x, config.playfield_width);
}

#[test]
fn test_score_climbs_one_pair_at_a_time() {
    let mut session = new_session(7);
    start(&mut session);

    let config = session.config().clone();
    let mut last_score = 0;
    let mut scored_ticks = 0;
    for _ in 0..420 {
        // Steer toward the middle of the front pair's gap
        let gap_centre = session
            .world()
            .obstacles
            .front()
            .map(|pair| pair.upper.bottom() + config.obstacle_gap / 2)
            .unwrap();
        if session.world().avatar.y > gap_centre - config.avatar_size / 2 {
            session.queue_input(GameInput::JumpPressed);
            session.queue_input(GameInput::JumpReleased);
        }
        let events = tick(&mut session);
        let scored = events
            .iter()
            .filter(|e| matches!(e, TickEvent::Scored { .. }))
            .count();
        assert!(scored <= 1);
        scored_ticks += scored;

        let score = session.world().score;
        assert!(score == last_score || score == last_score + 1);
        last_score = score;
        if session.mode() != ScreenMode::Playing {
            break;
        }
    }
    assert_eq!(scored_ticks as u32, last_score);
    assert_eq!(session.mode(), ScreenMode::Playing);
    // A pair needs (playfield_width + width) / speed ticks to leave the screen
    assert!(last_score >= 2);
}

#[test]
fn test_obstacle_collision_freezes_world() {
    let mut session = new_session(8);
    start(&mut session);

    // Without flapping the first pair arrives long after the floor; check the
    // obstacle path with the physics step directly.
    let config = session.config().clone();
    let mut world = session.world().clone();
    world.obstacles.clear();
    world
        .obstacles
        .push_back(ObstaclePair::at(&config, config.avatar_x + config.scroll_speed, 400));
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let outcome = step(&mut world, &config, &mut rng);
    assert_eq!(outcome.collisions, vec![Collision::Obstacle]);
    assert!(!world.running);

    let frozen = world.clone();
    let again = step(&mut world, &config, &mut rng);
    assert!(again.collisions.is_empty());
    assert_eq!(world.avatar, frozen.avatar);
    assert_eq!(world.obstacles, frozen.obstacles);
}

// =============================================================================
// Restart and quit
// =============================================================================

#[test]
fn test_restart_always_resets() {
    let mut session = new_session(9);
    start(&mut session);
    play_until_collision(&mut session);
    let flash_ms = session.config().flash_ms;
    run_for(&mut session, flash_ms);
    assert_eq!(session.mode(), ScreenMode::Ended);

    session.queue_input(GameInput::Confirm);
    assert_eq!(tick(&mut session), vec![TickEvent::GameStarted]);

    let config = session.config().clone();
    let world = session.world();
    assert_eq!(world.score, 0);
    assert_eq!(world.avatar.x, config.avatar_x);
    assert_eq!(world.avatar.y, config.avatar_start_y());
    assert_eq!(world.avatar.velocity, 0);
    assert!(world.running);
    assert_eq!(world.obstacles.len(), 1);
}

#[test]
fn test_confirm_during_flash_is_ignored() {
    let mut session = new_session(10);
    start(&mut session);
    play_until_collision(&mut session);

    session.queue_input(GameInput::Confirm);
    session.queue_input(GameInput::Quit);
    tick(&mut session);
    assert_eq!(session.mode(), ScreenMode::CollisionFlash);
    assert!(!session.is_quit_requested());
}

#[test]
fn test_quit_from_ended_screen() {
    let mut session = new_session(11);
    start(&mut session);
    play_until_collision(&mut session);
    let flash_ms = session.config().flash_ms;
    run_for(&mut session, flash_ms);

    session.queue_input(GameInput::Quit);
    assert_eq!(tick(&mut session), vec![TickEvent::QuitRequested]);
    assert!(session.is_quit_requested());
}
