//! Data-driven content definitions and loaders.
//!
//! This crate reads the static battle data from disk:
//! - Creature roster (RON, or JSON for data exported from older tools)
//! - Battle rules (TOML)
//!
//! Content is loaded once at startup and handed to the game as plain
//! `duel-core` values. Nothing here is consulted while a match is running.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, CreatureRecord, RosterFile, RosterLoader};
