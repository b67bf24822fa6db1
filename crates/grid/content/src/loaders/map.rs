//! Obstacle matrix loader.
//!
//! Map files hold a single square matrix of 0/1 cells, authored row-major.

use std::path::Path;

use grid_core::ObstacleMatrix;
use serde::Deserialize;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct MatrixRon {
    rows: ObstacleMatrix,
}

/// Loader for obstacle matrices from RON files.
pub struct MatrixLoader;

impl MatrixLoader {
    /// Load an obstacle matrix from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid RON, or describes an
    /// empty, jagged, non-square, or non-binary matrix.
    pub fn load(path: &Path) -> LoadResult<ObstacleMatrix> {
        let content = read_file(path)?;
        let matrix = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid map {}: {}", path.display(), e))?;
        debug!(
            path = %path.display(),
            size = matrix.size(),
            blocked = matrix.blocked_count(),
            "loaded obstacle matrix"
        );
        Ok(matrix)
    }

    /// Parse an obstacle matrix from RON text.
    pub fn parse(content: &str) -> LoadResult<ObstacleMatrix> {
        let data: MatrixRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;
        Ok(data.rows)
    }

    /// The bundled default map.
    pub fn bundled() -> LoadResult<ObstacleMatrix> {
        Self::parse(crate::DEFAULT_MAP_RON)
    }
}
