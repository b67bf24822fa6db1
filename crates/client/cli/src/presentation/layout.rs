//! Panel layout and pointer hit-testing.
use grid_core::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::CELL_WIDTH;

pub const TOOLBAR_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 4;

/// Screen areas for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels {
    pub toolbar: Rect,
    pub grid: GridArea,
    pub footer: Rect,
}

impl Panels {
    /// Splits `area` into toolbar, grid, and footer for an `size × size` grid.
    pub fn split(area: Rect, size: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOOLBAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            toolbar: chunks[0],
            grid: GridArea::new(chunks[1], size),
            footer: chunks[2],
        }
    }
}

/// Bordered grid panel anchored at the top-left of its chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridArea {
    /// Panel including borders, clipped to the available chunk.
    pub outer: Rect,
    size: usize,
}

impl GridArea {
    pub fn new(chunk: Rect, size: usize) -> Self {
        let side = u16::try_from(size).unwrap_or(u16::MAX);
        let width = side.saturating_mul(CELL_WIDTH).saturating_add(2);
        let height = side.saturating_add(2);
        let outer = Rect {
            x: chunk.x,
            y: chunk.y,
            width: width.min(chunk.width),
            height: height.min(chunk.height),
        };
        Self { outer, size }
    }

    /// Area inside the borders.
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.outer.x.saturating_add(1),
            y: self.outer.y.saturating_add(1),
            width: self.outer.width.saturating_sub(2),
            height: self.outer.height.saturating_sub(2),
        }
    }

    /// Grid position under terminal cell `(column, row)`, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let inner = self.inner();
        if column < inner.x || row < inner.y {
            return None;
        }
        if column >= inner.x + inner.width || row >= inner.y + inner.height {
            return None;
        }

        let x = usize::from((column - inner.x) / CELL_WIDTH);
        let y = usize::from(row - inner.y);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(Position::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Panels {
        Panels::split(Rect::new(0, 0, 80, 24), 8)
    }

    #[test]
    fn grid_sits_below_toolbar() {
        let panels = panels();
        assert_eq!(panels.grid.outer, Rect::new(0, TOOLBAR_HEIGHT, 18, 10));
        assert_eq!(panels.grid.inner(), Rect::new(1, TOOLBAR_HEIGHT + 1, 16, 8));
        assert_eq!(panels.footer.height, FOOTER_HEIGHT);
    }

    #[test]
    fn hit_test_maps_cells_to_positions() {
        let grid = panels().grid;
        let top = TOOLBAR_HEIGHT + 1;

        assert_eq!(grid.hit_test(1, top), Some(Position::new(0, 0)));
        assert_eq!(grid.hit_test(2, top), Some(Position::new(0, 0)));
        assert_eq!(grid.hit_test(3, top), Some(Position::new(1, 0)));
        assert_eq!(grid.hit_test(16, top + 7), Some(Position::new(7, 7)));
    }

    #[test]
    fn hit_test_rejects_borders_and_outside() {
        let grid = panels().grid;
        let top = TOOLBAR_HEIGHT + 1;

        assert_eq!(grid.hit_test(0, top), None);
        assert_eq!(grid.hit_test(1, top - 1), None);
        assert_eq!(grid.hit_test(17, top), None);
        assert_eq!(grid.hit_test(1, top + 8), None);
        assert_eq!(grid.hit_test(40, 0), None);
    }

    #[test]
    fn clipped_grid_only_hits_visible_cells() {
        let panels = Panels::split(Rect::new(0, 0, 10, 12), 8);
        let grid = panels.grid;
        assert_eq!(grid.outer.width, 10);
        assert_eq!(grid.hit_test(8, TOOLBAR_HEIGHT + 1), Some(Position::new(3, 0)));
        assert_eq!(grid.hit_test(9, TOOLBAR_HEIGHT + 1), None);
    }
}
