//! Grid model: obstacle matrix, coordinates, and the flat tile collection.
//!
//! Obstacle data is authored row-major (`rows[y][x]`) while tiles are laid out
//! column-major (y within x). [`tile_index`] is the single place where that
//! transposition is encoded; everything else goes through it.
pub mod index;
pub mod matrix;
pub mod position;
pub mod tile;
pub mod walk;

pub use index::{in_bounds, position_from_index, tile_index};
pub use matrix::ObstacleMatrix;
pub use position::Position;
pub use tile::{Tile, TileFlags, build_tiles};
pub use walk::{Adjacency, WalkGrid};
