//! Client configuration for the terminal UI.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use duel_core::Side;

/// Terminal client configuration.
///
/// Battle rules are not part of this struct; they come from `config.toml` in
/// the data directory.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `roster.ron` (or `roster.json`) and `config.toml`.
    pub data_dir: PathBuf,
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    pub players: PlayerNames,
    pub messages: MessageConfig,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            session_id: None,
            log_dir: None,
            players: PlayerNames::default(),
            messages: MessageConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Content directory (default: `data`)
    /// - `DUEL_SESSION_ID` - Session name for the log directory
    /// - `DUEL_LOG_DIR` - Log root (default: platform cache dir)
    /// - `DUEL_PLAYER1_NAME` / `DUEL_PLAYER2_NAME` - Seat names
    /// - `CLI_MESSAGE_CAPACITY` - Messages kept in the log (default: 64)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `DUEL_DISPLAY_DELAY_MS` - Delay before a faint notice (default: 310)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = read_var(&lookup, "DUEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.session_id = read_var(&lookup, "DUEL_SESSION_ID");
        config.log_dir = read_var(&lookup, "DUEL_LOG_DIR").map(PathBuf::from);

        if let Some(name) = read_var(&lookup, "DUEL_PLAYER1_NAME") {
            config.players.first = name;
        }
        if let Some(name) = read_var(&lookup, "DUEL_PLAYER2_NAME") {
            config.players.second = name;
        }

        if let Some(capacity) = read_parsed::<usize, _>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(height) = read_parsed::<u16, _>(&lookup, "CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(delay) = read_parsed::<u64, _>(&lookup, "DUEL_DISPLAY_DELAY_MS") {
            config.ui.display_delay = Duration::from_millis(delay);
        }

        config
    }
}

/// Display names of the two seats.
#[derive(Clone, Debug)]
pub struct PlayerNames {
    pub first: String,
    pub second: String,
}

impl PlayerNames {
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            first: "Player 1".to_string(),
            second: "Player 2".to_string(),
        }
    }
}

/// Message log configuration.
#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,

    /// How long a faint notice waits before it is shown.
    pub display_delay: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            display_delay: Duration::from_millis(310),
        }
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn read_parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    read_var(lookup, key)?.trim().parse().ok()
}
