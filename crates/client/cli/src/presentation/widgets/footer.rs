//! Footer widget displaying key bindings and the last status message.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{Status, theme::Theme};

/// Render the footer panel with controls help and status.
pub fn render(frame: &mut Frame, area: Rect, status: Option<&Status>, theme: &Theme) {
    let mut text = vec![Line::from(vec![
        Span::raw("[click] Start/Commit | "),
        Span::raw("[hover] Preview end | "),
        Span::raw("[a/A] Algorithm | "),
        Span::raw("[d] Diagonal | "),
        Span::raw("[q] Quit"),
    ])];

    if let Some(status) = status {
        text.push(Line::from(Span::styled(
            status.message.as_str(),
            theme.status(status.is_error),
        )));
    }

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
