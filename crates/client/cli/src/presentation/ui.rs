//! Frame composition for the CLI client.
use anyhow::Result;
use grid_core::{Position, Session};
use ratatui::Frame;

use super::{
    Status,
    layout::Panels,
    terminal::Tui,
    theme::Theme,
    widgets::{footer, grid, toolbar},
};

/// Everything a frame needs besides the session.
pub struct ViewState<'a> {
    pub hovered: Option<Position>,
    pub status: Option<&'a Status>,
    pub theme: &'a Theme,
}

/// Draws one frame and returns the layout used, for hit-testing pointer
/// events against what is on screen.
pub fn render(terminal: &mut Tui, session: &Session, view: &ViewState<'_>) -> Result<Panels> {
    let mut panels = None;
    terminal.draw(|frame| {
        let split = Panels::split(frame.area(), session.size());
        render_frame(frame, split, session, view);
        panels = Some(split);
    })?;
    panels.ok_or_else(|| anyhow::anyhow!("terminal draw skipped the frame"))
}

fn render_frame(frame: &mut Frame, panels: Panels, session: &Session, view: &ViewState<'_>) {
    toolbar::render(frame, panels.toolbar, session, view.theme);
    grid::render(frame, panels.grid, session, view.hovered, view.theme);
    footer::render(frame, panels.footer, view.status, view.theme);
}
