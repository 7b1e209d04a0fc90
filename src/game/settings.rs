use crate::model::GameKind;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    /// Game shown when the window opens.
    #[serde(default)]
    pub game: GameKind,

    #[serde(default = "default_true")]
    pub show_hint_button: bool,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: CURRENT_VERSION,
            game: GameKind::default(),
            show_hint_button: true,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to the defaults when the file
    /// is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                info!(target: "settings", "No settings at {}: {}", path.display(), err);
                return Settings::default();
            }
        };
        match serde_json::from_str::<Settings>(&contents) {
            Ok(mut settings) => {
                settings.migrate();
                settings
            }
            Err(err) => {
                warn!(target: "settings", "Ignoring malformed settings at {}: {}", path.display(), err);
                Settings::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    #[cfg(feature = "gui")]
    pub fn settings_path() -> std::path::PathBuf {
        glib::user_data_dir()
            .join("gridgames")
            .join("settings.json")
    }

    #[cfg(feature = "gui")]
    pub fn load() -> Self {
        let path = Self::settings_path();
        let settings = Self::load_from(&path);
        if !path.exists() {
            if let Err(err) = settings.save_to(&path) {
                warn!(target: "settings", "Could not write {}: {}", path.display(), err);
            }
        }
        settings
    }

    #[cfg(feature = "gui")]
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&Self::settings_path())
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn migrate(&mut self) {
        if self.version == 0 {
            self.version = CURRENT_VERSION;
        }
    }

    /// Replaces the opening game with `GAME` from the environment, if set.
    pub fn apply_env_overrides(&mut self) {
        if let Some(game) = Self::game_from_env() {
            self.game = game;
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("SEED").ok()?;
        match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!(target: "settings", "Ignoring SEED={:?}: {}", value, err);
                None
            }
        }
    }

    pub fn game_from_env() -> Option<GameKind> {
        let value = std::env::var("GAME").ok()?;
        match value.parse::<GameKind>() {
            Ok(game) => Some(game),
            Err(err) => {
                warn!(target: "settings", "Ignoring GAME={:?}: {}", value, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gridgames-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&scratch_path("missing"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game, GameKind::LightsOut);
        assert!(settings.show_hint_button);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let settings = Settings {
            game: GameKind::TicTacToe,
            show_hint_button: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_and_old_files() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"version": 0, "game": "TicTacToe"}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.version(), 1);
        assert_eq!(settings.game, GameKind::TicTacToe);
        assert!(settings.show_hint_button);

        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    #[serial]
    fn test_seed_from_env() {
        std::env::set_var("SEED", "1234");
        assert_eq!(Settings::seed_from_env(), Some(1234));
        std::env::set_var("SEED", "abc");
        assert_eq!(Settings::seed_from_env(), None);
        std::env::remove_var("SEED");
        assert_eq!(Settings::seed_from_env(), None);
    }

    #[test]
    #[serial]
    fn test_game_from_env_overrides() {
        std::env::set_var("GAME", "tic-tac-toe");
        let mut settings = Settings::default();
        settings.apply_env_overrides();
        assert_eq!(settings.game, GameKind::TicTacToe);

        std::env::set_var("GAME", "chess");
        let mut settings = Settings::default();
        settings.apply_env_overrides();
        assert_eq!(settings.game, GameKind::LightsOut);
        std::env::remove_var("GAME");
    }

    #[test]
    #[serial]
    fn test_debug_mode() {
        std::env::set_var("DEBUG", "1");
        assert!(Settings::is_debug_mode());
        std::env::set_var("DEBUG", "0");
        assert!(!Settings::is_debug_mode());
        std::env::remove_var("DEBUG");
    }
}
