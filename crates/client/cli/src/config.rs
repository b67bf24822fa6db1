//! CLI configuration read from the environment.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use grid_content::{ConfigLoader, MatrixLoader};
use grid_core::SessionConfig;

/// Terminal client configuration.
///
/// Holds where to find session settings and logs; the session itself is
/// assembled by [`CliConfig::session_config`].
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Session settings TOML.
    pub config_path: Option<PathBuf>,
    /// Map RON, overrides the map named in the settings file.
    pub map_path: Option<PathBuf>,
    pub algorithm: Option<String>,
    pub allow_diagonal: Option<bool>,
    /// Root directory for session logs.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PATHGRID_CONFIG` - Session settings TOML
    /// - `PATHGRID_MAP` - Obstacle map RON
    /// - `PATHGRID_ALGORITHM` - Search algorithm name (default: astar)
    /// - `PATHGRID_ALLOW_DIAGONAL` - `true`/`false` (default: true)
    /// - `PATHGRID_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            config_path: read_env("PATHGRID_CONFIG"),
            map_path: read_env("PATHGRID_MAP"),
            algorithm: read_env("PATHGRID_ALGORITHM"),
            allow_diagonal: read_env("PATHGRID_ALLOW_DIAGONAL"),
            log_dir: read_env("PATHGRID_LOG_DIR"),
        }
    }

    /// Assembles the session configuration.
    ///
    /// Precedence, lowest first: built-in defaults, settings file, map file,
    /// individual environment overrides.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(path) = &self.map_path {
            config.matrix = MatrixLoader::load(path)?;
        }
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.clone();
        }
        if let Some(allow_diagonal) = self.allow_diagonal {
            config.allow_diagonal = allow_diagonal;
        }

        Ok(config)
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let config = CliConfig {
            algorithm: Some("dijkstra".into()),
            allow_diagonal: Some(false),
            ..CliConfig::default()
        };

        let session = config.session_config().unwrap();
        assert_eq!(session.algorithm, "dijkstra");
        assert!(!session.allow_diagonal);
        assert_eq!(session.matrix, grid_core::ObstacleMatrix::default());
    }

    #[test]
    fn missing_map_file_is_an_error() {
        let config = CliConfig {
            map_path: Some(PathBuf::from("/nonexistent/pathgrid/map.ron")),
            ..CliConfig::default()
        };
        assert!(config.session_config().is_err());
    }
}
