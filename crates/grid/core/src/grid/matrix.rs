//! Validated obstacle matrix.
use super::{Position, WalkGrid, index};
use crate::config::{ConfigError, SessionConfig};

/// Square matrix of binary obstacle markers (0 = walkable, 1 = blocked).
///
/// Cells are kept exactly as authored, row-major, so `cell(x, y)` reads
/// `rows[y][x]`. Construction rejects empty, jagged, non-square, and
/// non-binary input; an `ObstacleMatrix` value is always well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct ObstacleMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl ObstacleMatrix {
    pub const WALKABLE: u8 = 0;
    pub const BLOCKED: u8 = 1;

    /// Validates `rows` and builds the matrix.
    pub fn new<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let size = rows.len();
        let columns = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if size == 0 || columns == 0 {
            return Err(ConfigError::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(size * columns);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(ConfigError::JaggedMatrix {
                    row: y,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > Self::BLOCKED {
                    return Err(ConfigError::InvalidCell { x, y, value });
                }
                cells.push(value);
            }
        }

        if columns != size {
            return Err(ConfigError::NonSquareMatrix {
                rows: size,
                columns,
            });
        }

        Ok(Self { size, cells })
    }

    /// Side length `N` of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw marker at `position`, `None` outside the grid.
    pub fn cell(&self, position: Position) -> Option<u8> {
        index::in_bounds(position, self.size)
            .then(|| self.cells[position.y as usize * self.size + position.x as usize])
    }

    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.cell(position) == Some(Self::WALKABLE)
    }

    pub fn contains(&self, position: Position) -> bool {
        index::in_bounds(position, self.size)
    }

    /// Iterates the matrix rows as authored.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == Self::BLOCKED).count()
    }

    /// Builds a fresh, private walkability snapshot for one search.
    pub fn walk_grid(&self) -> WalkGrid {
        let walkable = (0..self.size * self.size)
            .map(|i| {
                index::position_from_index(i, self.size)
                    .is_some_and(|position| self.is_walkable(position))
            })
            .collect();
        WalkGrid::from_column_major(self.size, walkable)
    }
}

impl Default for ObstacleMatrix {
    fn default() -> Self {
        let size = SessionConfig::DEFAULT_SIZE;
        let cells = SessionConfig::DEFAULT_MATRIX.iter().flatten().copied().collect();
        Self { size, cells }
    }
}

impl TryFrom<Vec<Vec<u8>>> for ObstacleMatrix {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::new(&rows)
    }
}

impl From<ObstacleMatrix> for Vec<Vec<u8>> {
    fn from(matrix: ObstacleMatrix) -> Self {
        matrix.rows().map(<[u8]>::to_vec).collect()
    }
}
