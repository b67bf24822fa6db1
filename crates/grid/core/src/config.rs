//! Session configuration and configuration errors.
use crate::error::{ErrorSeverity, GridError};
use crate::grid::ObstacleMatrix;
use crate::search::Algorithm;

/// Inputs supplied once at session start.
///
/// The grid size is not stored separately; it is the side length of
/// [`SessionConfig::matrix`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub matrix: ObstacleMatrix,
    /// Name of the search strategy, validated against the finder registry.
    pub algorithm: String,
    pub allow_diagonal: bool,
    /// Suppresses hover-driven end selection when set.
    pub edit_mode: bool,
}

impl SessionConfig {
    // ===== compile-time constants =====
    /// Side length of the default obstacle matrix.
    pub const DEFAULT_SIZE: usize = 8;

    /// Default obstacle layout, authored row-major (`DEFAULT_MATRIX[y][x]`).
    pub const DEFAULT_MATRIX: [[u8; Self::DEFAULT_SIZE]; Self::DEFAULT_SIZE] = [
        [1, 1, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0, 0, 0, 1],
        [0, 0, 0, 0, 0, 0, 0, 1],
        [0, 0, 0, 0, 0, 0, 1, 1],
    ];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ALLOW_DIAGONAL: bool = true;
    pub const DEFAULT_EDIT_MODE: bool = false;

    pub fn new(matrix: ObstacleMatrix) -> Self {
        Self {
            matrix,
            algorithm: Algorithm::default().to_string(),
            allow_diagonal: Self::DEFAULT_ALLOW_DIAGONAL,
            edit_mode: Self::DEFAULT_EDIT_MODE,
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    #[must_use]
    pub fn with_allow_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    #[must_use]
    pub fn with_edit_mode(mut self, edit_mode: bool) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    /// Side length of the configured grid.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(ObstacleMatrix::default())
    }
}

/// Configuration problems detected at session start.
///
/// All variants are fatal for session construction. An unknown algorithm name
/// arriving later through an interaction event is reported with the same
/// variant but only rejects that event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("obstacle matrix is empty")]
    EmptyMatrix,

    #[error("obstacle matrix row {row} has {found} cells, expected {expected}")]
    JaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("obstacle matrix must be square, got {rows} rows of {columns} cells")]
    NonSquareMatrix { rows: usize, columns: usize },

    #[error("obstacle matrix cell ({x}, {y}) holds {value}, expected 0 or 1")]
    InvalidCell { x: usize, y: usize, value: u8 },

    #[error("unknown algorithm `{name}`")]
    UnknownAlgorithm { name: String },
}

impl GridError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAlgorithm { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMatrix => "CONFIG_EMPTY_MATRIX",
            Self::JaggedMatrix { .. } => "CONFIG_JAGGED_MATRIX",
            Self::NonSquareMatrix { .. } => "CONFIG_NON_SQUARE_MATRIX",
            Self::InvalidCell { .. } => "CONFIG_INVALID_CELL",
            Self::UnknownAlgorithm { .. } => "CONFIG_UNKNOWN_ALGORITHM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_matrix_and_astar() {
        let config = SessionConfig::default();

        assert_eq!(config.size(), SessionConfig::DEFAULT_SIZE);
        assert_eq!(config.algorithm, "astar");
        assert!(config.allow_diagonal);
        assert!(!config.edit_mode);
    }

    #[test]
    fn unknown_algorithm_is_validation_severity() {
        let err = ConfigError::UnknownAlgorithm {
            name: "teleport".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(ConfigError::EmptyMatrix.severity(), ErrorSeverity::Fatal);
    }
}
