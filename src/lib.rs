//! Flappy - terminal Flappy Bird.
//!
//! The library holds the game core and input translation so they can be
//! tested without a terminal. Rendering lives in the binary.

pub mod build_info;
pub mod core;
pub mod input;
pub mod logging;

pub use crate::core::{
    GameConfig, GameInput, GameSession, ScreenMode, TickEvent, WorldSnapshot, TICK_INTERVAL_MS,
};
