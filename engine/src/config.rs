use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use nncalc_types::UiOptions;

const CONFIG_ENV: &str = "NNCALC_CONFIG";
const ASCII_ENV: &str = "NNCALC_ASCII";

#[derive(Debug, Default, Deserialize)]
pub struct CalcConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl CalcConfig {
    /// Loads the config file if one exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolves UI options from the config file and the environment.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let ascii_env = env::var(ASCII_ENV).ok();
        resolve_ui_options(config, ascii_env.as_deref())
    }
}

fn resolve_ui_options(config: Option<&CalcConfig>, ascii_env: Option<&str>) -> UiOptions {
    let app = config.and_then(|cfg| cfg.app.as_ref());
    UiOptions {
        ascii_only: app.is_some_and(|a| a.ascii_only) || ascii_env.is_some_and(is_truthy),
        high_contrast: app.is_some_and(|a| a.high_contrast),
        reduced_motion: app.is_some_and(|a| a.reduced_motion),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// `$NNCALC_CONFIG` if set, otherwise `~/.nncalc/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".nncalc").join("config.toml"))
}
