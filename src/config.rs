use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::locale::{LocaleDescriptor, LocaleTable};
use crate::locale::table::builtin_locales;
use crate::version::{VersionError, VersionToken};

// =============================================================================
// Defaults
// =============================================================================

/// Newest release line across all locales (what `master` means on laravel.com)
pub const DEFAULT_LATEST_VERSION: &str = "5.9";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "DOCS_LANG_SWITCH_LOG";

const APP_DIR_NAME: &str = "docs-lang-switch";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate locale code: {0}")]
    DuplicateLocale(String),

    #[error("Invalid version for locale {code}: {source}")]
    InvalidVersion {
        code: String,
        #[source]
        source: VersionError,
    },
}

/// Switcher configuration file structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitcherConfig {
    /// Global latest release line
    pub latest_version: String,
    /// Locale table in display order; `None` keeps the built-in locales
    pub locales: Option<Vec<LocaleDescriptor>>,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            latest_version: DEFAULT_LATEST_VERSION.to_string(),
            locales: None,
        }
    }
}

impl SwitcherConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate and freeze into a locale table
    pub fn into_table(self) -> Result<LocaleTable, ConfigError> {
        let latest_version = match self.latest_version.parse::<VersionToken>() {
            Ok(VersionToken::Literal(version)) => version,
            Ok(VersionToken::Latest) => {
                return Err(ConfigError::InvalidVersion {
                    code: "*".to_string(),
                    source: VersionError::LatestAliasNotAllowed,
                });
            }
            Err(source) => {
                return Err(ConfigError::InvalidVersion {
                    code: "*".to_string(),
                    source,
                });
            }
        };

        let locales = self.locales.unwrap_or_else(builtin_locales);
        for locale in &locales {
            if locale.min_version.trim().is_empty() {
                return Err(ConfigError::InvalidVersion {
                    code: locale.code.clone(),
                    source: VersionError::Empty,
                });
            }
        }

        LocaleTable::new(latest_version, locales)
    }
}

/// Load the locale table from `path`, or the built-in table when no path is given.
pub fn load_table(path: Option<&Path>) -> Result<LocaleTable, ConfigError> {
    match path {
        Some(path) => SwitcherConfig::load(path)?.into_table(),
        None => Ok(LocaleTable::builtin()),
    }
}

/// Returns the path to the data directory for docs-lang-switch.
/// Uses $XDG_DATA_HOME/docs-lang-switch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/docs-lang-switch,
/// or ./docs-lang-switch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the directory log files are written to.
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR_NAME)
}
