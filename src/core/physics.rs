//! One tick of simulation: gravity, scrolling, obstacle retirement and
//! collision detection.

use super::config::GameConfig;
use super::obstacles::spawn_pair;
use super::world::World;
use rand::Rng;

/// What the avatar hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ceiling,
    Floor,
    Obstacle,
}

/// Result of a single [`step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A pair was retired and the score went up by one.
    pub scored: bool,
    /// Every collision found this tick; empty means the avatar survived.
    pub collisions: Vec<Collision>,
}

impl StepOutcome {
    pub fn collided(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Advance the world by one tick. Does nothing unless the world is running.
pub fn step<R: Rng>(world: &mut World, config: &GameConfig, rng: &mut R) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !world.running {
        return outcome;
    }

    // Gravity
    world.avatar.velocity += config.gravity;
    world.avatar.y += world.avatar.velocity;

    // Scroll
    for pair in world.obstacles.iter_mut() {
        pair.scroll(config.scroll_speed);
    }

    // At most one retirement per tick
    if world
        .obstacles
        .front()
        .is_some_and(|pair| pair.is_off_screen())
    {
        world.obstacles.pop_front();
        world.obstacles.push_back(spawn_pair(config, rng));
        world.score += 1;
        outcome.scored = true;
    }

    outcome.collisions = detect_collisions(world, config);
    if outcome.collided() {
        world.running = false;
    }

    outcome
}

/// Check walls and every obstacle rectangle against the avatar.
pub fn detect_collisions(world: &World, config: &GameConfig) -> Vec<Collision> {
    let mut hits = Vec::new();
    let avatar = world.avatar.rect();

    if avatar.top() < config.top() {
        hits.push(Collision::Ceiling);
    }
    if avatar.bottom() > config.bottom() {
        hits.push(Collision::Floor);
    }
    if world.obstacle_rects().any(|rect| avatar.intersects(&rect)) {
        hits.push(Collision::Obstacle);
    }

    hits
}
