//! Game core: world state, physics, and the screen-mode machine.
//!
//! Nothing in here touches the terminal; the binary drives a
//! [`GameSession`] and renders its snapshot.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod geometry;
pub mod obstacles;
pub mod physics;
pub mod screen;
pub mod tick;
pub mod world;

pub use config::*;
pub use constants::*;
pub use game_loop::*;
pub use geometry::*;
pub use obstacles::*;
pub use physics::*;
pub use screen::*;
pub use tick::*;
pub use world::*;
