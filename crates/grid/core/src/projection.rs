//! Full recompute of the tile collection from matrix and selection.
use crate::error::Result;
use crate::grid::{ObstacleMatrix, Position, Tile, TileFlags, build_tiles, tile_index};
use crate::interaction::SelectionState;
use crate::search::{Path, Pathfinder};

/// Tiles annotated with the current selection and path.
///
/// Read-only to presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Projection {
    size: usize,
    tiles: Vec<Tile>,
    path: Path,
}

impl Projection {
    /// Tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Most recently computed path; empty if no search ran or the end was
    /// unreachable.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        tile_index(position, self.size).and_then(|index| self.tiles.get(index))
    }

    pub fn start_tile(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.is_start())
    }

    pub fn end_tile(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.is_end())
    }

    fn mark(&mut self, position: Position, flag: TileFlags) {
        if let Some(tile) = tile_index(position, self.size).and_then(|i| self.tiles.get_mut(i)) {
            tile.mark(flag);
        }
    }
}

/// Builds fresh tiles, marks the endpoints, and when both are set runs the
/// selected finder and marks every path cell.
///
/// Fails only when the finder cannot be constructed or rejects an endpoint.
pub fn project(
    matrix: &ObstacleMatrix,
    selection: &SelectionState,
    pathfinder: &Pathfinder,
) -> Result<Projection> {
    let mut projection = Projection {
        size: matrix.size(),
        tiles: build_tiles(matrix),
        path: Path::new(),
    };

    if let Some(start) = selection.start() {
        projection.mark(start, TileFlags::START);
    }
    if let Some(end) = selection.end() {
        projection.mark(end, TileFlags::END);
    }

    if let Some((start, end)) = selection.endpoints() {
        let path = pathfinder.find_path(matrix, start, end, &selection.finder_options())?;
        for &position in &path {
            projection.mark(position, TileFlags::IN_PATH);
        }
        projection.path = path;
    }

    Ok(projection)
}
