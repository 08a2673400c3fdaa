//! Terminal frontend for two-player creature duels.
//!
//! The crate splits into a terminal-free session model ([`app::DuelApp`] with
//! its [`state`], [`input`] and [`message`] helpers) and the ratatui
//! [`presentation`] layer that draws it.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod state;

pub use app::{DuelApp, Flow};
pub use config::CliConfig;
