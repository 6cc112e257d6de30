//! # Theme Preference
//!
//! The one piece of state that survives a restart. Stored as
//! `theme = "dark"` or `theme = "light"` in `~/.terra/settings.toml`.
//!
//! Startup precedence: saved preference → terminal preference → configured
//! default. Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle: names the mode you would switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct SettingsFile {
    theme: Option<Theme>,
}

/// Reads and writes the persisted theme preference.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.terra/settings.toml`, or `None` without a home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".terra").join("settings.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved theme. Missing or unreadable files count as "no preference".
    pub fn load_theme(&self) -> Option<Theme> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read settings {}: {}", self.path.display(), e);
                return None;
            }
        };
        match toml::from_str::<SettingsFile>(&contents) {
            Ok(settings) => settings.theme,
            Err(e) => {
                warn!("Ignoring malformed settings {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = SettingsFile { theme: Some(theme) };
        let contents =
            toml::to_string(&settings).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved theme {:?} to {}", theme, self.path.display());
        Ok(())
    }
}

/// Terminal background preference from `COLORFGBG` (`"fg;bg"`, as set by
/// rxvt, Konsole and friends).
pub fn terminal_preference() -> Option<Theme> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
}

/// ANSI background 0-6 and 8 are dark; 7 and 9-15 are light.
pub fn parse_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

pub fn startup_theme(saved: Option<Theme>, terminal: Option<Theme>, fallback: Theme) -> Theme {
    saved.or(terminal).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> SettingsStore {
        let dir = std::env::temp_dir().join(format!("terra-settings-{}", uuid::Uuid::new_v4()));
        SettingsStore::new(dir.join("settings.toml"))
    }

    #[test]
    fn test_missing_file_has_no_preference() {
        assert_eq!(temp_store().load_theme(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store();
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Dark));

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("theme = \"dark\""));

        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Light));
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "theme = \"purple\"").unwrap();
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(parse_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(parse_colorfgbg("12;default;8"), Some(Theme::Dark));
        assert_eq!(parse_colorfgbg("default"), None);
        assert_eq!(parse_colorfgbg(""), None);
    }

    #[test]
    fn test_saved_preference_wins_over_terminal() {
        assert_eq!(
            startup_theme(Some(Theme::Light), Some(Theme::Dark), Theme::Light),
            Theme::Light
        );
        assert_eq!(startup_theme(None, Some(Theme::Dark), Theme::Light), Theme::Dark);
        assert_eq!(startup_theme(None, None, Theme::Dark), Theme::Dark);
    }
}
