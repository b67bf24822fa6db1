//! Grid state model and path-recomputation engine.
//!
//! `grid-core` owns the canonical rules of the visualizer: how an obstacle
//! matrix becomes a flat tile collection, how user interaction drives the
//! start/end selection, and how a pluggable search strategy turns the grid and
//! two endpoints into an ordered path. All selection mutation flows through
//! [`Session::dispatch`], and every dispatch produces a fresh [`Projection`]
//! that presentation layers render without mutating.
pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod projection;
pub mod search;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use error::{CoreError, ErrorSeverity, GridError, Result};
pub use grid::{
    Adjacency, ObstacleMatrix, Position, Tile, TileFlags, WalkGrid, build_tiles,
    position_from_index, tile_index,
};
pub use interaction::{InteractionEvent, Phase, SelectionReducer, SelectionState, Transition};
pub use projection::{Projection, project};
pub use search::{
    Algorithm, FinderCache, FinderFactory, FinderOptions, FinderRegistry, Path, PathError,
    PathFinder, Pathfinder,
};
pub use session::Session;
