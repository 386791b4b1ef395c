//! Terminal rendering. Picks one of four full-screen layouts from the
//! current screen mode.

pub mod game_common;
pub mod menu_scene;
pub mod playfield;
pub mod score_flash;

use flappy::core::{GameConfig, ScreenMode, WorldSnapshot};
use menu_scene::{render_menu, MenuKind};
use playfield::render_playing;
use ratatui::Frame;
use score_flash::render_score_flash;

/// Draw the whole screen for `mode`.
pub fn draw_ui(frame: &mut Frame, mode: ScreenMode, snapshot: &WorldSnapshot, config: &GameConfig) {
    let area = frame.size();
    match mode {
        ScreenMode::NotStarted => render_menu(frame, area, MenuKind::Start),
        ScreenMode::Playing => render_playing(frame, area, snapshot, config),
        ScreenMode::CollisionFlash => render_score_flash(frame, area, snapshot.score),
        ScreenMode::Ended => render_menu(frame, area, MenuKind::Restart),
    }
}
