//! Glyphs and colors for grid tiles.
use grid_core::Tile;
use ratatui::style::{Color, Modifier, Style};

/// Two-column glyphs so grid cells render roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Terminal theme for the grid and its chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn new() -> Self {
        Self
    }

    /// Glyph and style for `tile`. Endpoints win over the path marker.
    pub fn tile(&self, tile: &Tile, hovered: bool) -> (&'static str, Style) {
        let (glyph, mut style) = if !tile.is_walkable() {
            ("██", Style::default().fg(Color::DarkGray))
        } else if tile.is_start() {
            (
                "S ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else if tile.is_end() {
            (
                "E ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )
        } else if tile.in_path() {
            ("• ", Style::default().fg(Color::Black).bg(Color::Yellow))
        } else {
            ("· ", Style::default().fg(Color::Gray))
        };

        if hovered && tile.is_walkable() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        (glyph, style)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status(&self, is_error: bool) -> Style {
        if is_error {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::White)
        }
    }
}
