//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.terra/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::query::Region;
use crate::core::settings::Theme;
use crate::directory::providers::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Used when neither a saved preference nor a terminal preference exists.
    pub default_theme: Option<Theme>,
    /// Region applied at startup ("All" loads the full directory).
    pub default_region: Option<String>,
    /// Where the theme preference is persisted.
    pub settings_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: Option<String>,
    pub resolve_borders: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub no_borders: bool,
    pub region: Option<Region>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub resolve_borders: bool,
    pub request_timeout: Option<Duration>,
    pub default_theme: Theme,
    pub initial_region: Region,
    pub settings_path: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.terra/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".terra").join("config.toml"))
}

/// Load config from `~/.terra/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TerraConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TerraConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TerraConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TerraConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TerraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Terra Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_theme = "light"            # "light" or "dark"; used when nothing is saved
# default_region = "All"             # All, Africa, Americas, Asia, Europe, Oceania, Antarctic
# settings_file = "/home/me/.terra/settings.toml"

# [directory]
# base_url = "https://restcountries.com/v3.1"   # Or set TERRA_BASE_URL
# resolve_borders = true             # Or set TERRA_RESOLVE_BORDERS
# request_timeout_secs = 30          # Unset = no timeout
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Parses "true"/"false"/"1"/"0"/"yes"/"no" (case-insensitive).
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TerraConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("TERRA_BASE_URL").ok())
        .or_else(|| config.directory.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Border resolution: CLI (off only) → env → config → on
    let resolve_borders = if cli.no_borders {
        false
    } else {
        std::env::var("TERRA_RESOLVE_BORDERS")
            .ok()
            .and_then(|v| parse_flag(&v))
            .or(config.directory.resolve_borders)
            .unwrap_or(true)
    };

    // Region: CLI → config → All
    let initial_region = cli.region.unwrap_or_else(|| {
        config
            .general
            .default_region
            .as_deref()
            .and_then(|name| match name.parse::<Region>() {
                Ok(region) => Some(region),
                Err(e) => {
                    warn!("Ignoring default_region: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    });

    let settings_path = config
        .general
        .settings_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(crate::core::settings::SettingsStore::default_path);

    ResolvedConfig {
        base_url,
        resolve_borders,
        request_timeout: config
            .directory
            .request_timeout_secs
            .map(Duration::from_secs),
        default_theme: config.general.default_theme.unwrap_or_default(),
        initial_region,
        settings_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TerraConfig::default();
        assert!(config.directory.base_url.is_none());
        assert!(config.general.default_theme.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = TerraConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.default_theme, Theme::Light);
        assert_eq!(resolved.initial_region, Region::All);
        assert_eq!(resolved.request_timeout, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TerraConfig {
            general: GeneralConfig {
                default_theme: Some(Theme::Dark),
                default_region: Some("europe".to_string()),
                settings_file: Some("/tmp/terra-settings.toml".to_string()),
            },
            directory: DirectoryConfig {
                base_url: None,
                resolve_borders: None,
                request_timeout_secs: Some(10),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.default_theme, Theme::Dark);
        assert_eq!(resolved.initial_region, Region::Europe);
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(10)));
        assert_eq!(
            resolved.settings_path,
            Some(PathBuf::from("/tmp/terra-settings.toml"))
        );
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = TerraConfig {
            general: GeneralConfig {
                default_region: Some("Asia".to_string()),
                ..Default::default()
            },
            directory: DirectoryConfig {
                base_url: Some("http://from-config".to_string()),
                resolve_borders: Some(true),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            no_borders: true,
            region: Some(Region::Oceania),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert!(!resolved.resolve_borders);
        assert_eq!(resolved.initial_region, Region::Oceania);
    }

    #[test]
    fn test_unknown_region_falls_back_to_all() {
        let config = TerraConfig {
            general: GeneralConfig {
                default_region: Some("Atlantis".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.initial_region, Region::All);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_theme = "dark"
default_region = "Americas"

[directory]
base_url = "http://localhost:8080/v3.1"
resolve_borders = false
request_timeout_secs = 5
"#;
        let config: TerraConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_theme, Some(Theme::Dark));
        assert_eq!(config.general.default_region.as_deref(), Some("Americas"));
        assert_eq!(
            config.directory.base_url.as_deref(),
            Some("http://localhost:8080/v3.1")
        );
        assert_eq!(config.directory.resolve_borders, Some(false));
        assert_eq!(config.directory.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[directory]
resolve_borders = false
"#;
        let config: TerraConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.directory.resolve_borders, Some(false));
        assert!(config.directory.base_url.is_none());
        assert!(config.general.default_theme.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
