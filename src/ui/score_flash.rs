//! Post-collision score flash.

use super::game_common::{render_centered_lines, render_frame_border};
use ratatui::{layout::Rect, style::Color, Frame};

pub fn render_score_flash(frame: &mut Frame, area: Rect, score: u32) {
    let inner = render_frame_border(frame, area, Color::Blue);
    render_centered_lines(
        frame,
        inner,
        &[Some((format!("Score : {}", score), Color::Blue))],
    );
}
