//! World state: the avatar, the obstacle queue and the score.

use super::config::GameConfig;
use super::geometry::Rect;
use super::obstacles::{spawn_pair, ObstaclePair};
use rand::Rng;
use std::collections::VecDeque;

/// The player's square. Only `y` and `velocity` change during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub x: i32,
    pub y: i32,
    /// Pixels per tick, positive = downward.
    pub velocity: i32,
    pub size: i32,
}

impl Avatar {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// Mutable game world.
#[derive(Debug, Clone)]
pub struct World {
    pub avatar: Avatar,
    /// Ordered by x; the pair nearest the left edge is at the front.
    pub obstacles: VecDeque<ObstaclePair>,
    pub score: u32,
    pub running: bool,
}

impl World {
    /// An idle world before the first game. Call [`World::reset`] to play.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            avatar: Avatar {
                x: config.avatar_x,
                y: config.avatar_start_y(),
                velocity: 0,
                size: config.avatar_size,
            },
            obstacles: VecDeque::new(),
            score: 0,
            running: false,
        }
    }

    /// Start (or restart) a game: avatar back to its spawn, score zeroed, one
    /// fresh obstacle pair.
    pub fn reset<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        self.avatar = Avatar {
            x: config.avatar_x,
            y: config.avatar_start_y(),
            velocity: 0,
            size: config.avatar_size,
        };
        self.score = 0;
        self.obstacles.clear();
        self.obstacles.push_back(spawn_pair(config, rng));
        self.running = true;
    }

    /// Jump: override the vertical velocity with the upward impulse.
    pub fn apply_impulse(&mut self, config: &GameConfig) {
        self.avatar.velocity = config.impulse_velocity;
    }

    /// All obstacle rectangles, upper then lower for each pair, front to back.
    pub fn obstacle_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().flat_map(|pair| pair.rects())
    }

    /// Read-only copy of everything the renderer needs.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            avatar: self.avatar.rect(),
            obstacles: self.obstacle_rects().collect(),
            score: self.score,
            running: self.running,
        }
    }
}

/// What the presentation layer reads each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSnapshot {
    pub avatar: Rect,
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub running: bool,
}
