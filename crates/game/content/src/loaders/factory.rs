//! Content factory for loading battle data from a data directory.

use std::path::{Path, PathBuf};

use duel_core::{BattleConfig, Roster};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml     (optional)
/// └── roster.ron      (or roster.json)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const ROSTER_RON: &'static str = "roster.ron";
    pub const ROSTER_JSON: &'static str = "roster.json";
    pub const CONFIG_TOML: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the creature roster, preferring `roster.ron` over `roster.json`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let ron_path = self.data_dir.join(Self::ROSTER_RON);
        if ron_path.exists() {
            return RosterLoader::load(&ron_path);
        }

        let json_path = self.data_dir.join(Self::ROSTER_JSON);
        if json_path.exists() {
            return RosterLoader::load(&json_path);
        }

        anyhow::bail!(
            "No roster found in {} (expected {} or {})",
            self.data_dir.display(),
            Self::ROSTER_RON,
            Self::ROSTER_JSON
        )
    }

    /// Load battle rules from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_TOML);
        if !path.exists() {
            tracing::debug!(
                "No {} in {}, using defaults",
                Self::CONFIG_TOML,
                self.data_dir.display()
            );
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }

    #[test]
    fn missing_roster_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_roster().unwrap_err();
        assert!(err.to_string().contains("No roster found"));
    }
}
