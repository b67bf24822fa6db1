//! Owned walkability snapshot handed to search strategies.
use arrayvec::ArrayVec;

use super::{Position, index};

/// Adjacency rule used when expanding neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// 4-connected: orthogonal steps only.
    Orthogonal,
    /// 8-connected: orthogonal and diagonal steps.
    ///
    /// A diagonal step is refused only when both orthogonal cells it cuts
    /// between are blocked.
    Octile,
}

impl Adjacency {
    pub const fn from_allow_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::Octile
        } else {
            Self::Orthogonal
        }
    }

    pub const fn allows_diagonal(self) -> bool {
        matches!(self, Self::Octile)
    }

    /// Returns true if `from` and `to` are neighbours under this rule,
    /// ignoring walkability.
    pub fn are_adjacent(self, from: Position, to: Position) -> bool {
        match self {
            Self::Orthogonal => from.manhattan_distance(to) == 1,
            Self::Octile => from.chebyshev_distance(to) == 1,
        }
    }
}

/// Orthogonal offsets: up, right, down, left.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal offsets paired with the two orthogonal slots they cut between:
/// up-left, up-right, down-right, down-left.
const DIAGONAL: [((i32, i32), usize, usize); 4] = [
    ((-1, -1), 3, 0),
    ((1, -1), 0, 1),
    ((1, 1), 1, 2),
    ((-1, 1), 2, 3),
];

/// Walkability of every cell in a `size × size` grid.
///
/// A `WalkGrid` is built fresh from the obstacle matrix for each search and is
/// owned by the strategy for the duration of that call, so strategies are free
/// to mark cells as they go. Node indices follow [`index::tile_index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkGrid {
    size: usize,
    walkable: Vec<bool>,
}

impl WalkGrid {
    /// `walkable[i]` describes the cell at `position_from_index(i, size)`.
    pub fn from_column_major(size: usize, walkable: Vec<bool>) -> Self {
        debug_assert_eq!(walkable.len(), size * size);
        Self { size, walkable }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        index::in_bounds(position, self.size)
    }

    pub fn node(&self, position: Position) -> Option<usize> {
        index::tile_index(position, self.size)
    }

    pub fn position(&self, node: usize) -> Option<Position> {
        index::position_from_index(node, self.size)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.node(position).is_some_and(|node| self.walkable[node])
    }

    /// Overwrites one cell of this snapshot; the source matrix is untouched.
    pub fn set_walkable(&mut self, position: Position, walkable: bool) {
        if let Some(node) = self.node(position) {
            self.walkable[node] = walkable;
        }
    }

    /// Walkable neighbours of `position`, orthogonal first then diagonal.
    pub fn neighbors(&self, position: Position, adjacency: Adjacency) -> ArrayVec<Position, 8> {
        let mut out = ArrayVec::new();
        let mut open = [false; 4];

        for (slot, (dx, dy)) in ORTHOGONAL.iter().enumerate() {
            let next = position.offset(*dx, *dy);
            if self.is_walkable(next) {
                open[slot] = true;
                out.push(next);
            }
        }

        if adjacency.allows_diagonal() {
            for ((dx, dy), a, b) in DIAGONAL {
                let next = position.offset(dx, dy);
                if (open[a] || open[b]) && self.is_walkable(next) {
                    out.push(next);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleMatrix;

    fn open_grid(size: usize) -> WalkGrid {
        WalkGrid::from_column_major(size, vec![true; size * size])
    }

    #[test]
    fn orthogonal_neighbors_in_open_field() {
        let grid = open_grid(3);
        let neighbors = grid.neighbors(Position::new(1, 1), Adjacency::Orthogonal);
        assert_eq!(
            neighbors.as_slice(),
            &[
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1)
            ]
        );
    }

    #[test]
    fn octile_neighbors_include_diagonals() {
        let grid = open_grid(3);
        let neighbors = grid.neighbors(Position::new(1, 1), Adjacency::Octile);
        assert_eq!(neighbors.len(), 8);

        let corner = grid.neighbors(Position::ORIGIN, Adjacency::Octile);
        assert_eq!(corner.len(), 3);
        assert!(corner.contains(&Position::new(1, 1)));
    }

    #[test]
    fn diagonal_blocked_when_both_sides_blocked() {
        // . #
        // # .
        let matrix = ObstacleMatrix::new(&[[0u8, 1], [1, 0]]).unwrap();
        let grid = matrix.walk_grid();
        assert!(grid.neighbors(Position::ORIGIN, Adjacency::Octile).is_empty());
    }

    #[test]
    fn diagonal_allowed_past_single_obstacle() {
        // . #
        // . .
        let matrix = ObstacleMatrix::new(&[[0u8, 1], [0, 0]]).unwrap();
        let grid = matrix.walk_grid();
        let neighbors = grid.neighbors(Position::ORIGIN, Adjacency::Octile);
        assert!(neighbors.contains(&Position::new(1, 1)));
        assert!(!neighbors.contains(&Position::new(1, 0)));
    }

    #[test]
    fn set_walkable_only_touches_snapshot() {
        let matrix = ObstacleMatrix::default();
        let mut grid = matrix.walk_grid();
        let cell = Position::new(3, 3);
        assert!(grid.is_walkable(cell));

        grid.set_walkable(cell, false);
        assert!(!grid.is_walkable(cell));
        assert!(matrix.is_walkable(cell));
        assert!(matrix.walk_grid().is_walkable(cell));
    }

    #[test]
    fn adjacency_rules() {
        let a = Position::new(2, 2);
        assert!(Adjacency::Orthogonal.are_adjacent(a, Position::new(2, 3)));
        assert!(!Adjacency::Orthogonal.are_adjacent(a, Position::new(3, 3)));
        assert!(Adjacency::Octile.are_adjacent(a, Position::new(3, 3)));
        assert!(!Adjacency::Octile.are_adjacent(a, a));
    }
}
