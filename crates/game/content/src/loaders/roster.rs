//! Creature roster loader.
//!
//! Loads creature templates from RON (or JSON) files and validates every
//! record through [`CreatureTemplate::new`].

use std::path::Path;

use anyhow::Context;
use duel_core::{Attack, CreatureTemplate, Roster};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One creature as written in a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    pub hp: u32,
    pub stamina: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub attacks: Vec<Attack>,
}

impl CreatureRecord {
    pub fn into_template(self) -> LoadResult<CreatureTemplate> {
        let name = self.name.clone();
        CreatureTemplate::new(self.name, self.hp, self.stamina, self.kind, self.attacks)
            .with_context(|| format!("Invalid creature '{}'", name))
    }
}

/// Roster file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(alias = "pokemons")]
    pub creatures: Vec<CreatureRecord>,
}

/// Loader for the creature roster.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a `.ron` or `.json` file.
    ///
    /// RON format:
    /// ```ron
    /// (
    ///     creatures: [
    ///         (
    ///             name: "Evolie",
    ///             hp: 500,
    ///             stamina: 500,
    ///             type: "normal",
    ///             attacks: [
    ///                 (name: "Charge", damage: 20, type: "normal", energy: 10),
    ///                 // ... exactly four attacks
    ///             ],
    ///         ),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let file = match extension.as_deref() {
            Some("ron") => Self::parse_ron(&content)?,
            Some("json") => Self::parse_json(&content)?,
            _ => anyhow::bail!(
                "Unsupported roster format for {} (expected .ron or .json)",
                path.display()
            ),
        };

        let roster = Self::build(file)?;
        tracing::info!("Loaded {} creatures from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn parse_ron(content: &str) -> LoadResult<RosterFile> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    pub fn parse_json(content: &str) -> LoadResult<RosterFile> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster JSON: {}", e))
    }

    /// Validates every record and assembles the roster.
    pub fn build(file: RosterFile) -> LoadResult<Roster> {
        let templates = file
            .creatures
            .into_iter()
            .map(CreatureRecord::into_template)
            .collect::<LoadResult<Vec<_>>>()?;

        Roster::new(templates).context("Invalid roster")
    }
}
