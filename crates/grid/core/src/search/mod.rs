//! Pathfinder adapter: search strategies behind a common interface.
//!
//! Strategies implement [`PathFinder`] and are constructed through a
//! [`FinderRegistry`] keyed by algorithm name. Constructed instances are
//! memoized per [`FinderOptions`] in a [`FinderCache`]; the grid itself is never
//! cached, every search receives a freshly built [`WalkGrid`].
//!
//! # Path convention
//!
//! Returned paths include both endpoints: the first element is `start`, the
//! last is `end`. A search from a cell to itself yields a one-element path, and
//! an unreachable goal yields an empty path.
pub mod adapter;
pub mod astar;
pub mod bfs;
pub mod cache;
pub mod heuristic;
pub mod registry;

pub use adapter::Pathfinder;
pub use astar::AStarFinder;
pub use bfs::BreadthFirstFinder;
pub use cache::FinderCache;
pub use heuristic::Heuristic;
pub use registry::{Algorithm, FinderFactory, FinderRegistry};

use core::fmt;

use crate::error::{ErrorSeverity, GridError};
use crate::grid::{Adjacency, Position, WalkGrid};

/// Ordered coordinates from start to end, both inclusive.
pub type Path = Vec<Position>;

/// Search strategy contract.
///
/// Implementations must be deterministic and thread-safe. The grid is taken
/// by value: each call owns its snapshot and may mutate it freely.
pub trait PathFinder: Send + Sync + fmt::Debug {
    /// Finds a path from `start` to `end`.
    ///
    /// Returns an empty path when `end` is unreachable. Fails only when an
    /// endpoint lies outside the grid or on a blocked cell.
    fn find_path(&self, grid: WalkGrid, start: Position, end: Position) -> Result<Path, PathError>;

    /// Registry name of the strategy, for logging.
    fn name(&self) -> &str;

    /// Adjacency rule this instance was built with.
    fn adjacency(&self) -> Adjacency;
}

/// Construction parameters for a search strategy; also the cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FinderOptions {
    pub algorithm: String,
    pub allow_diagonal: bool,
}

impl FinderOptions {
    pub fn new(algorithm: impl Into<String>, allow_diagonal: bool) -> Self {
        Self {
            algorithm: algorithm.into(),
            allow_diagonal,
        }
    }

    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_allow_diagonal(self.allow_diagonal)
    }
}

impl fmt::Display for FinderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adjacency = if self.allow_diagonal { 8 } else { 4 };
        write!(f, "{}/{}", self.algorithm, adjacency)
    }
}

/// Which end of a search an endpoint error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Endpoint violations reaching the search layer.
///
/// The interaction state machine only ever selects walkable tiles, so these
/// indicate a defect upstream and are never silently skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("{endpoint} {position} is outside the {size}x{size} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Position,
        size: usize,
    },

    #[error("{endpoint} {position} is not walkable")]
    InvalidEndpoint {
        endpoint: Endpoint,
        position: Position,
    },

    #[error("{finder} returned a path whose {endpoint} is {position}")]
    MisplacedEndpoint {
        finder: String,
        endpoint: Endpoint,
        position: Position,
    },

    #[error("{finder} returned a path through blocked cell {position}")]
    BlockedStep { finder: String, position: Position },

    #[error("{finder} returned a path stepping from {from} to {to}")]
    DisjointStep {
        finder: String,
        from: Position,
        to: Position,
    },
}

impl GridError for PathError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "PATH_OUT_OF_BOUNDS",
            Self::InvalidEndpoint { .. } => "PATH_INVALID_ENDPOINT",
            Self::MisplacedEndpoint { .. } => "PATH_MISPLACED_ENDPOINT",
            Self::BlockedStep { .. } => "PATH_BLOCKED_STEP",
            Self::DisjointStep { .. } => "PATH_DISJOINT_STEP",
        }
    }
}

/// Checks that both endpoints are inside `grid` and walkable.
pub fn validate_endpoints(grid: &WalkGrid, start: Position, end: Position) -> Result<(), PathError> {
    for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.contains(position) {
            return Err(PathError::OutOfBounds {
                endpoint,
                position,
                size: grid.size(),
            });
        }
        if !grid.is_walkable(position) {
            return Err(PathError::InvalidEndpoint { endpoint, position });
        }
    }
    Ok(())
}

/// Checks a finder's result: empty, or running from `start` to `end` over
/// walkable cells that are pairwise adjacent under the finder's rule.
pub fn validate_path(
    grid: &WalkGrid,
    finder: &dyn PathFinder,
    path: &[Position],
    start: Position,
    end: Position,
) -> Result<(), PathError> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Ok(());
    };
    let ends = [(Endpoint::Start, start, first), (Endpoint::End, end, last)];
    for (endpoint, expected, actual) in ends {
        if expected != actual {
            return Err(PathError::MisplacedEndpoint {
                finder: finder.name().to_owned(),
                endpoint,
                position: actual,
            });
        }
    }

    if let Some(&position) = path.iter().find(|p| !grid.is_walkable(**p)) {
        return Err(PathError::BlockedStep {
            finder: finder.name().to_owned(),
            position,
        });
    }

    let adjacency = finder.adjacency();
    if let Some(step) = path.windows(2).find(|s| !adjacency.are_adjacent(s[0], s[1])) {
        return Err(PathError::DisjointStep {
            finder: finder.name().to_owned(),
            from: step[0],
            to: step[1],
        });
    }
    Ok(())
}

/// Walks `parents` back from `end` and returns the path in start→end order.
pub(crate) fn backtrace(grid: &WalkGrid, parents: &[Option<usize>], end: usize) -> Path {
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(node) = cursor {
        if let Some(position) = grid.position(node) {
            path.push(position);
        }
        cursor = parents[node];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleMatrix;

    #[test]
    fn validate_rejects_blocked_and_out_of_bounds() {
        let grid = ObstacleMatrix::default().walk_grid();

        assert_eq!(
            validate_endpoints(&grid, Position::ORIGIN, Position::new(1, 1)),
            Err(PathError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                position: Position::ORIGIN
            })
        );
        assert_eq!(
            validate_endpoints(&grid, Position::new(1, 1), Position::new(8, 1)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::End,
                position: Position::new(8, 1),
                size: 8
            })
        );
        assert!(validate_endpoints(&grid, Position::new(1, 1), Position::new(6, 6)).is_ok());
    }

    #[test]
    fn options_display_names_adjacency() {
        assert_eq!(FinderOptions::new("astar", true).to_string(), "astar/8");
        assert_eq!(FinderOptions::new("dijkstra", false).to_string(), "dijkstra/4");
    }
}
