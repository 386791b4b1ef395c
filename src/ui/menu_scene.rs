//! Start and restart prompts.

use super::game_common::{render_centered_lines, render_frame_border};
use ratatui::{layout::Rect, style::Color, Frame};

/// Which menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Start,
    Restart,
}

impl MenuKind {
    fn confirm_message(self) -> &'static str {
        match self {
            MenuKind::Start => "Press ENTER To Start The Game",
            MenuKind::Restart => "Press ENTER To Restart The Game",
        }
    }
}

/// Prompt lines, top to bottom.
pub fn menu_lines(kind: MenuKind) -> Vec<Option<(String, Color)>> {
    vec![
        Some((kind.confirm_message().to_string(), Color::Green)),
        None,
        Some(("OR".to_string(), Color::White)),
        None,
        Some(("Press ESC To Quit The Game".to_string(), Color::Red)),
    ]
}

pub fn render_menu(frame: &mut Frame, area: Rect, kind: MenuKind) {
    let inner = render_frame_border(frame, area, Color::DarkGray);
    render_centered_lines(frame, inner, &menu_lines(kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_restart_differ_only_in_prompt() {
        let start = menu_lines(MenuKind::Start);
        let restart = menu_lines(MenuKind::Restart);
        assert_eq!(start.len(), restart.len());
        assert_ne!(start[0], restart[0]);
        assert_eq!(start[2..], restart[2..]);
    }

    #[test]
    fn test_restart_prompt_text() {
        let lines = menu_lines(MenuKind::Restart);
        let (text, color) = lines[0].clone().unwrap();
        assert_eq!(text, "Press ENTER To Restart The Game");
        assert_eq!(color, Color::Green);
    }
}
