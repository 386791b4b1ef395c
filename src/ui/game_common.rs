//! Shared UI components for the game screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const TITLE: &str = " Flappy Bird ";

/// Clear `area`, draw the outer border and return the inner area.
pub fn render_frame_border(frame: &mut Frame, area: Rect, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a one-line controls hint, e.g. `[("[Space]", "Flap")]`.
pub fn render_controls_bar(frame: &mut Frame, area: Rect, controls: &[(&str, &str)]) {
    if area.height < 1 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(controls_line, Rect { height: 1, ..area });
}

/// Render bold, centred lines in the vertical middle of `area`.
///
/// `None` entries become blank spacer rows.
pub fn render_centered_lines(frame: &mut Frame, area: Rect, lines: &[Option<(String, Color)>]) {
    let content_height = lines.len() as u16;
    let y_offset = area.y + area.height.saturating_sub(content_height) / 2;

    let text: Vec<Line> = lines
        .iter()
        .map(|entry| match entry {
            Some((message, color)) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(""),
        })
        .collect();

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect {
            y: y_offset,
            height: content_height.min(area.height),
            ..area
        },
    );
}

/// Largest sub-area of `area` that keeps a square surface looking square,
/// assuming terminal cells are about twice as tall as they are wide.
pub fn square_viewport(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = area.height.min(area.width / 2).max(1).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_viewport_wide_terminal() {
        let vp = square_viewport(Rect::new(0, 0, 200, 40));
        assert_eq!(vp.width, 80);
        assert_eq!(vp.height, 40);
        assert_eq!(vp.x, 60);
    }

    #[test]
    fn test_square_viewport_tall_terminal() {
        let vp = square_viewport(Rect::new(0, 0, 40, 60));
        assert_eq!(vp.width, 40);
        assert_eq!(vp.height, 20);
        assert_eq!(vp.y, 20);
    }
}
