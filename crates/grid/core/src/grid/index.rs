//! Coordinate ↔ flat index mapping.
//!
//! Tiles are stored column-major: `index = x * size + y`. Callers must never
//! compute indices inline; use these functions so the transposition stays in
//! one tested place.
use super::Position;

/// Returns true if `position` lies inside a `size × size` grid.
#[inline]
pub fn in_bounds(position: Position, size: usize) -> bool {
    position.x >= 0
        && position.y >= 0
        && (position.x as usize) < size
        && (position.y as usize) < size
}

/// Flat tile index of `position`, or `None` when it lies outside the grid.
#[inline]
pub fn tile_index(position: Position, size: usize) -> Option<usize> {
    in_bounds(position, size).then(|| position.x as usize * size + position.y as usize)
}

/// Inverse of [`tile_index`].
#[inline]
pub fn position_from_index(index: usize, size: usize) -> Option<Position> {
    if size == 0 || index >= size * size {
        return None;
    }
    Some(Position::new((index / size) as i32, (index % size) as i32))
}
