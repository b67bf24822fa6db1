//! Session settings loader.

use std::path::{Path, PathBuf};

use grid_core::SessionConfig;
use serde::Deserialize;
use tracing::debug;

use crate::loaders::{LoadResult, MatrixLoader, read_file};

/// Session settings as written in a TOML file.
///
/// Every field is optional; absent fields keep the value of the
/// [`SessionConfig`] they are applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionFile {
    pub algorithm: Option<String>,
    pub allow_diagonal: Option<bool>,
    pub edit_mode: Option<bool>,
    /// Map RON path. Relative paths are resolved against the TOML file's
    /// directory when loaded through [`ConfigLoader::load_file`].
    pub map: Option<PathBuf>,
}

impl SessionFile {
    /// Overlays these settings on `config`, loading the map if one is named.
    pub fn apply(self, mut config: SessionConfig) -> LoadResult<SessionConfig> {
        if let Some(map) = &self.map {
            config.matrix = MatrixLoader::load(map)?;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(allow_diagonal) = self.allow_diagonal {
            config.allow_diagonal = allow_diagonal;
        }
        if let Some(edit_mode) = self.edit_mode {
            config.edit_mode = edit_mode;
        }
        Ok(config)
    }
}

/// Loader for session settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a full session configuration from a TOML file.
    ///
    /// Settings missing from the file take their [`SessionConfig::default`]
    /// values. The algorithm name is not checked here; session construction
    /// validates it against the finder registry.
    pub fn load(path: &Path) -> LoadResult<SessionConfig> {
        Self::load_file(path)?.apply(SessionConfig::default())
    }

    /// Load the raw settings without applying them.
    pub fn load_file(path: &Path) -> LoadResult<SessionFile> {
        let content = read_file(path)?;
        let mut file: SessionFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if let Some(map) = file.map.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            file.map = Some(if map.is_relative() { base.join(map) } else { map });
        }
        debug!(path = %path.display(), ?file, "loaded session settings");

        Ok(file)
    }
}
