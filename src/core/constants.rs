// Playfield geometry (pixels)
pub const HEADER_HEIGHT: i32 = 50;
pub const PLAYFIELD_WIDTH: i32 = 625;
pub const PLAYFIELD_HEIGHT: i32 = 625;

// Avatar
pub const AVATAR_X: i32 = 100;
pub const AVATAR_SIZE: i32 = 20;
pub const GRAVITY: i32 = 1;
pub const IMPULSE_VELOCITY: i32 = -10;

// Obstacles
pub const SCROLL_SPEED: i32 = 5;
pub const OBSTACLE_WIDTH: i32 = 50;
pub const OBSTACLE_GAP: i32 = 150;
pub const MIN_UPPER_HEIGHT: i32 = 50; // inclusive
pub const MAX_UPPER_HEIGHT: i32 = 250; // exclusive

// Timing
pub const TICK_INTERVAL_MS: u64 = 20;
pub const COLLISION_FLASH_MS: u64 = 2000;
/// Longest frame the session will simulate in one `advance` call.
pub const MAX_FRAME_MS: u64 = 250;

// Config bounds; keep every geometry sum well inside i32
pub const MAX_CONFIG_PIXELS: i32 = 100_000;
pub const MAX_CONFIG_MS: u64 = 3_600_000;

// Terminal input
/// Quiet time after a press before a held key counts as released. Longer
/// than the usual OS delay before auto-repeat starts.
pub const JUMP_HOLD_TIMEOUT_MS: u64 = 700;
/// Quiet time once auto-repeat is running.
pub const JUMP_RELEASE_TIMEOUT_MS: u64 = 120;

// Config / log locations
pub const APP_NAME: &str = "flappy";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";
