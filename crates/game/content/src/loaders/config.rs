//! Battle configuration loader.

use std::path::Path;

use duel_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_divisor_and_defaults_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exhausted_damage_divisor = 3").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.exhausted_damage_divisor, 3);

        let empty = tempfile::NamedTempFile::new().unwrap();
        let config = ConfigLoader::load(empty.path()).unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exhausted_damage_divisor = \"two\"").unwrap();
        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
