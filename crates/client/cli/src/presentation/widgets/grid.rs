//! Grid widget rendering the projected tiles.

use grid_core::{Position, Session};
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{layout::GridArea, theme::Theme};

/// Render the grid panel, one line per row.
pub fn render(
    frame: &mut Frame,
    area: GridArea,
    session: &Session,
    hovered: Option<Position>,
    theme: &Theme,
) {
    let size = i32::try_from(session.size()).unwrap_or(i32::MAX);

    let rows: Vec<Line> = (0..size)
        .map(|y| {
            let spans: Vec<Span> = (0..size)
                .filter_map(|x| session.tile_at(Position::new(x, y)))
                .map(|tile| {
                    let (glyph, style) = theme.tile(tile, Some(tile.position()) == hovered);
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!("Grid {0}x{0}", session.size());
    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area.outer);
}
