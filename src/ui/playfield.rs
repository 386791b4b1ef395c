//! Playing screen: score header, scaled playfield and controls hint.

use super::game_common::{render_controls_bar, render_frame_border, square_viewport};
use flappy::core::{GameConfig, Rect as PixelRect, WorldSnapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BEAK_COLOR: Color = Color::Rgb(255, 165, 0);
const BEAK_LENGTH: i32 = 8;
const BEAK_INSET: i32 = 6;

/// What a terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Obstacle,
    Beak,
    Avatar,
}

impl Cell {
    fn span(self) -> Span<'static> {
        match self {
            Cell::Empty => Span::raw(" "),
            Cell::Obstacle => Span::styled("█", Style::default().fg(Color::Green)),
            Cell::Beak => Span::styled("▶", Style::default().fg(BEAK_COLOR)),
            Cell::Avatar => Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }
}

/// Orange beak on the avatar's right side.
fn beak_rect(avatar: &PixelRect) -> Option<PixelRect> {
    let height = avatar.height - 2 * BEAK_INSET;
    (height > 0).then(|| PixelRect::new(avatar.right(), avatar.y + BEAK_INSET, BEAK_LENGTH, height))
}

/// Map the playfield onto a `cols` x `rows` grid. A cell shows the
/// highest-priority object overlapping its pixel footprint, so small objects
/// never vanish between samples.
pub fn rasterize(
    snapshot: &WorldSnapshot,
    config: &GameConfig,
    cols: u16,
    rows: u16,
) -> Vec<Vec<Cell>> {
    let (surface_width, _) = config.surface_size();
    let cols_i = cols as i32;
    let rows_i = rows as i32;
    let beak = beak_rect(&snapshot.avatar);

    (0..rows_i)
        .map(|row| {
            let y0 = config.top() + row * config.playfield_height / rows_i;
            let y1 = config.top() + (row + 1) * config.playfield_height / rows_i;
            (0..cols_i)
                .map(|col| {
                    let x0 = col * surface_width / cols_i;
                    let x1 = (col + 1) * surface_width / cols_i;
                    let cell =
                        PixelRect::new(x0, y0, (x1 - x0).max(1), (y1 - y0).max(1));

                    if cell.intersects(&snapshot.avatar) {
                        Cell::Avatar
                    } else if beak.is_some_and(|b| cell.intersects(&b)) {
                        Cell::Beak
                    } else if snapshot.obstacles.iter().any(|o| cell.intersects(o)) {
                        Cell::Obstacle
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the playing screen.
pub fn render_playing(frame: &mut Frame, area: Rect, snapshot: &WorldSnapshot, config: &GameConfig) {
    let inner = render_frame_border(frame, area, Color::Cyan);
    let viewport = square_viewport(Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    });
    if viewport.width == 0 || viewport.height < 2 {
        return;
    }

    // Header rows in proportion to the header's share of the surface
    let (_, surface_height) = config.surface_size();
    let header_rows = ((viewport.height as i32 * config.top()) / surface_height).max(1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_rows), Constraint::Min(1)])
        .split(viewport);

    render_score_header(frame, chunks[0], snapshot.score);
    render_world(frame, chunks[1], snapshot, config);

    render_controls_bar(
        frame,
        Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: 1,
            ..inner
        },
        &[("[Space/Up]", "Flap")],
    );
}

fn render_score_header(frame: &mut Frame, area: Rect, score: u32) {
    let style = Style::default()
        .bg(Color::Gray)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(""); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(format!("Score : {}", score)));

    let header = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_world(frame: &mut Frame, area: Rect, snapshot: &WorldSnapshot, config: &GameConfig) {
    let grid = rasterize(snapshot, config, area.width, area.height);
    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(Cell::span).collect::<Vec<_>>()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
