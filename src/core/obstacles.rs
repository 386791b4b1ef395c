//! Obstacle pairs and their generator.

use super::config::GameConfig;
use super::geometry::Rect;
use rand::Rng;

/// Upper and lower half of one scrolling obstacle. Both halves always share
/// `x` and `width` and move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstaclePair {
    pub upper: Rect,
    pub lower: Rect,
}

impl ObstaclePair {
    /// Build a pair at `x` whose upper half is `upper_height` tall.
    pub fn at(config: &GameConfig, x: i32, upper_height: i32) -> Self {
        let upper = Rect::new(x, config.top(), config.obstacle_width, upper_height);
        let lower_y = config.top() + upper_height + config.obstacle_gap;
        let lower = Rect::new(
            x,
            lower_y,
            config.obstacle_width,
            config.playfield_height - upper_height - config.obstacle_gap,
        );
        Self { upper, lower }
    }

    pub fn x(&self) -> i32 {
        self.upper.x
    }

    /// Right edge shared by both halves.
    pub fn right(&self) -> i32 {
        self.upper.right()
    }

    /// Move both halves left by `dx` pixels.
    pub fn scroll(&mut self, dx: i32) {
        self.upper.x -= dx;
        self.lower.x -= dx;
    }

    /// True once the pair is entirely past the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0
    }

    pub fn rects(&self) -> [Rect; 2] {
        [self.upper, self.lower]
    }
}

/// Spawn a new pair at the playfield's right edge with a uniformly random
/// upper height in `[min_upper_height, max_upper_height)`.
pub fn spawn_pair<R: Rng>(config: &GameConfig, rng: &mut R) -> ObstaclePair {
    let upper_height = rng.gen_range(config.min_upper_height..config.max_upper_height);
    ObstaclePair::at(config, config.playfield_width, upper_height)
}
