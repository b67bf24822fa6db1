//! Data-driven grid content and loaders.
//!
//! This crate reads obstacle matrices and session settings from disk:
//! - Obstacle maps (RON, `(rows: [[0, 1, ...], ...])`)
//! - Session settings (TOML: algorithm, diagonal movement, edit mode, map)
//!
//! Everything loaded here is validated by grid-core types; a file that parses
//! but describes a malformed matrix is rejected with the underlying
//! [`grid_core::ConfigError`] in the error chain.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MatrixLoader, SessionFile};

/// Bundled map matching [`grid_core::SessionConfig::DEFAULT_MATRIX`].
pub const DEFAULT_MAP_RON: &str = include_str!("../data/maps/default.ron");
