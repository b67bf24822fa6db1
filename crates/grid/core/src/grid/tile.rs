//! Derived tile descriptors.
use bitflags::bitflags;

use super::{ObstacleMatrix, Position, index};

bitflags! {
    /// Selection markers carried by a [`Tile`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const START   = 1 << 0;
        const END     = 1 << 1;
        const IN_PATH = 1 << 2;
    }
}

/// One cell of the grid with its derived display and selection flags.
///
/// Tiles can only be produced by [`build_tiles`] and the projection, so a
/// `Tile` handed back through an interaction event always carries the true
/// walkability of its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tile {
    position: Position,
    index: usize,
    walkable: bool,
    flags: TileFlags,
}

impl Tile {
    pub fn position(&self) -> Position {
        self.position
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Stable lookup key, `x * N + y`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    pub fn flags(&self) -> TileFlags {
        self.flags
    }

    pub fn is_start(&self) -> bool {
        self.flags.contains(TileFlags::START)
    }

    pub fn is_end(&self) -> bool {
        self.flags.contains(TileFlags::END)
    }

    pub fn in_path(&self) -> bool {
        self.flags.contains(TileFlags::IN_PATH)
    }

    pub(crate) fn mark(&mut self, flag: TileFlags) {
        debug_assert!(self.walkable, "marked blocked tile {} as {flag:?}", self.position);
        self.flags.insert(flag);
    }
}

/// Flattens `matrix` into tiles ordered column-major (y within x).
///
/// The tile at vector offset `i` has `index == i`, so the result can be
/// addressed directly with [`index::tile_index`].
pub fn build_tiles(matrix: &ObstacleMatrix) -> Vec<Tile> {
    let size = matrix.size();
    (0..size * size)
        .filter_map(|i| index::position_from_index(i, size).map(|position| (i, position)))
        .map(|(index, position)| Tile {
            position,
            index,
            walkable: matrix.is_walkable(position),
            flags: TileFlags::empty(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builds_n_squared_tiles_with_unique_indices() {
        let matrix = ObstacleMatrix::default();
        let tiles = build_tiles(&matrix);

        assert_eq!(tiles.len(), 64);
        let indices: HashSet<_> = tiles.iter().map(Tile::index).collect();
        assert_eq!(indices.len(), 64);
        assert!(indices.iter().all(|&i| i < 64));
        for (offset, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.index(), offset);
        }
    }

    #[test]
    fn traversal_is_column_major() {
        let matrix = ObstacleMatrix::default();
        let tiles = build_tiles(&matrix);

        assert_eq!(tiles[0].position(), Position::new(0, 0));
        assert_eq!(tiles[1].position(), Position::new(0, 1));
        assert_eq!(tiles[8].position(), Position::new(1, 0));
    }

    #[test]
    fn walkability_reads_transposed_matrix() {
        let matrix = ObstacleMatrix::default();
        let tiles = build_tiles(&matrix);

        for tile in &tiles {
            let (x, y) = (tile.x() as usize, tile.y() as usize);
            let blocked = crate::SessionConfig::DEFAULT_MATRIX[y][x] == 1;
            assert_eq!(tile.is_walkable(), !blocked, "tile at {}", tile.position());
        }

        // (2, 0) is open and (0, 2) is blocked; swapped axes would invert both.
        assert!(tiles[index::tile_index(Position::new(2, 0), 8).unwrap()].is_walkable());
        assert!(!tiles[index::tile_index(Position::new(0, 2), 8).unwrap()].is_walkable());
    }

    #[test]
    fn fresh_tiles_carry_no_flags() {
        let tiles = build_tiles(&ObstacleMatrix::default());
        assert!(tiles.iter().all(|tile| tile.flags().is_empty()));
    }
}
