//! Events emitted by [`GameSession::advance`](super::game_loop::GameSession::advance).
//!
//! The session never touches the terminal. The binary turns these into log
//! lines and the renderer reads the session snapshot directly.

use super::physics::Collision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// A new game began (first start or restart).
    GameStarted,
    /// A jump impulse was applied.
    Jumped,
    /// An obstacle pair was cleared.
    Scored { score: u32 },
    /// The avatar crashed; the world is frozen and the flash begins.
    Collided { kinds: Vec<Collision>, score: u32 },
    /// The post-collision flash ended and the restart menu is showing.
    FlashEnded { score: u32 },
    /// The player asked to leave from a menu screen.
    QuitRequested,
}

impl TickEvent {
    /// Log the event through the `log` facade.
    pub fn log(&self) {
        match self {
            TickEvent::GameStarted => log::info!("Game started"),
            TickEvent::Jumped => log::trace!("Jump"),
            TickEvent::Scored { score } => log::debug!("Obstacle cleared, score {}", score),
            TickEvent::Collided { kinds, score } => {
                log::info!("Collision {:?} with score {}", kinds, score)
            }
            TickEvent::FlashEnded { score } => log::debug!("Flash ended, final score {}", score),
            TickEvent::QuitRequested => log::info!("Quit requested"),
        }
    }
}
