//! Screen-mode state machine.
//!
//! ```text
//! NotStarted --Confirm--> Playing --collision--> CollisionFlash --flash expiry--> Ended
//!                            ^                                                     |
//!                            +----------------------Confirm------------------------+
//! ```
//!
//! Quit is honoured in NotStarted and Ended only. CollisionFlash ignores input.

/// UI-agnostic input events, produced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    JumpPressed,
    JumpReleased,
    /// Enter
    Confirm,
    /// Esc
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    NotStarted,
    Playing,
    CollisionFlash,
    Ended,
}

/// What the controller wants the session to do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    StartGame,
    Jump,
    Quit,
}

/// Tracks the active mode, the jump-held latch and the flash countdown.
#[derive(Debug, Clone, Default)]
pub struct ScreenController {
    mode: ScreenMode,
    jump_held: bool,
    /// Milliseconds spent in CollisionFlash so far; `None` when disarmed.
    flash_elapsed_ms: Option<u64>,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn jump_held(&self) -> bool {
        self.jump_held
    }

    pub fn flash_elapsed_ms(&self) -> Option<u64> {
        self.flash_elapsed_ms
    }

    /// Route one input event. The caller carries out the returned command.
    pub fn handle_input(&mut self, input: GameInput) -> Command {
        // Releases always clear the latch so a jump held across a restart
        // does not stay stuck.
        if input == GameInput::JumpReleased {
            self.jump_held = false;
            return Command::None;
        }

        match self.mode {
            ScreenMode::NotStarted | ScreenMode::Ended => match input {
                GameInput::Confirm => {
                    self.begin_game();
                    Command::StartGame
                }
                GameInput::Quit => Command::Quit,
                _ => Command::None,
            },
            ScreenMode::Playing => match input {
                GameInput::JumpPressed if !self.jump_held => {
                    self.jump_held = true;
                    Command::Jump
                }
                _ => Command::None,
            },
            ScreenMode::CollisionFlash => Command::None,
        }
    }

    /// The physics step reported a collision.
    pub fn on_collision(&mut self) {
        if self.mode == ScreenMode::Playing {
            self.mode = ScreenMode::CollisionFlash;
            self.flash_elapsed_ms = Some(0);
        }
    }

    /// Advance the flash countdown. Returns true when it expires and the
    /// mode moves to Ended.
    pub fn advance_flash(&mut self, elapsed_ms: u64, flash_ms: u64) -> bool {
        let Some(elapsed) = self.flash_elapsed_ms.as_mut() else {
            return false;
        };
        *elapsed += elapsed_ms;
        if *elapsed >= flash_ms {
            self.flash_elapsed_ms = None;
            self.mode = ScreenMode::Ended;
            return true;
        }
        false
    }

    fn begin_game(&mut self) {
        self.mode = ScreenMode::Playing;
        self.flash_elapsed_ms = None;
    }
}
