//! Toolbar widget showing the algorithm choice and search settings.

use grid_core::Session;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the toolbar: registered algorithms with the active one highlighted,
/// then diagonal movement and the selection phase.
pub fn render(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let mut spans = vec![Span::raw("Algorithm: ")];
    for name in session.algorithms() {
        if name == session.algorithm() {
            spans.push(Span::styled(format!(" {name} "), theme.selected()));
        } else {
            spans.push(Span::styled(format!(" {name} "), theme.muted()));
        }
    }

    let diagonal = if session.allow_diagonal() { "on" } else { "off" };
    spans.push(Span::raw(format!(" | Diagonal: {diagonal}")));
    spans.push(Span::raw(format!(" | {}", session.phase())));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("pathgrid"));

    frame.render_widget(paragraph, area);
}
