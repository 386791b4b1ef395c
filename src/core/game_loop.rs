//! Fixed-step game session.
//!
//! All state mutation happens inside [`GameSession::advance`], called from a
//! single loop. Input is queued between calls and drained at the start of each
//! tick, so a tick is atomic with respect to rendering and input.

use super::config::GameConfig;
use super::constants::MAX_FRAME_MS;
use super::physics;
use super::screen::{Command, GameInput, ScreenController, ScreenMode};
use super::tick::TickEvent;
use super::world::{World, WorldSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub struct GameSession<R: Rng = StdRng> {
    config: GameConfig,
    world: World,
    controller: ScreenController,
    rng: R,
    pending: VecDeque<GameInput>,
    /// Time not yet consumed by a whole tick.
    accumulated_ms: u64,
    tick_count: u64,
    quit_requested: bool,
}

impl GameSession<StdRng> {
    /// Session with a seeded RNG when `seed` is given, otherwise OS entropy.
    pub fn with_seed(config: GameConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// A session on the start screen. `config` must already be validated.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let world = World::new(&config);
        Self {
            config,
            world,
            controller: ScreenController::new(),
            rng,
            pending: VecDeque::new(),
            accumulated_ms: 0,
            tick_count: 0,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mode(&self) -> ScreenMode {
        self.controller.mode()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Queue an input for the next tick.
    pub fn queue_input(&mut self, input: GameInput) {
        self.pending.push_back(input);
    }

    /// Milliseconds until the next tick is due.
    pub fn time_until_next_tick_ms(&self) -> u64 {
        self.config.tick_ms.saturating_sub(self.accumulated_ms)
    }

    /// Feed wall-clock time into the session and run every tick that is due.
    ///
    /// `elapsed_ms` is clamped to [`MAX_FRAME_MS`] so a stalled terminal
    /// cannot cause a burst of catch-up ticks.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TickEvent> {
        let mut events = Vec::new();
        self.accumulated_ms += elapsed_ms.min(MAX_FRAME_MS);

        while !self.quit_requested && self.accumulated_ms >= self.config.tick_ms {
            self.accumulated_ms -= self.config.tick_ms;
            self.run_tick(&mut events);
        }

        events
    }

    /// One tick: drain input, then simulate or count down the flash.
    fn run_tick(&mut self, events: &mut Vec<TickEvent>) {
        self.tick_count += 1;

        if self.drain_input(events) {
            // A fresh game gets its first physics tick one period later.
            return;
        }

        match self.controller.mode() {
            ScreenMode::Playing => {
                let outcome = physics::step(&mut self.world, &self.config, &mut self.rng);
                if outcome.scored {
                    events.push(TickEvent::Scored {
                        score: self.world.score,
                    });
                }
                if outcome.collided() {
                    self.controller.on_collision();
                    events.push(TickEvent::Collided {
                        kinds: outcome.collisions,
                        score: self.world.score,
                    });
                }
            }
            ScreenMode::CollisionFlash => {
                if self
                    .controller
                    .advance_flash(self.config.tick_ms, self.config.flash_ms)
                {
                    events.push(TickEvent::FlashEnded {
                        score: self.world.score,
                    });
                }
            }
            ScreenMode::NotStarted | ScreenMode::Ended => {}
        }
    }

    /// Apply queued input in arrival order. Returns true if a game was started.
    fn drain_input(&mut self, events: &mut Vec<TickEvent>) -> bool {
        let mut started = false;

        while let Some(input) = self.pending.pop_front() {
            match self.controller.handle_input(input) {
                Command::None => {}
                Command::StartGame => {
                    self.world.reset(&self.config, &mut self.rng);
                    // Drop any backlog from the previous game's timeline.
                    self.accumulated_ms = 0;
                    started = true;
                    events.push(TickEvent::GameStarted);
                }
                Command::Jump => {
                    self.world.apply_impulse(&self.config);
                    events.push(TickEvent::Jumped);
                }
                Command::Quit => {
                    self.quit_requested = true;
                    self.pending.clear();
                    events.push(TickEvent::QuitRequested);
                    break;
                }
            }
        }

        started
    }
}
