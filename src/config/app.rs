use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use crate::enums::{CipherKind, TraceFormat};
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub trace: TraceSettings,
    pub cli: CliSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    pub show_visualization: bool,
    pub format: TraceFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub default_cipher: CipherKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for TraceSettings {
    fn default() -> Self {
        default_trace()
    }
}

impl Default for CliSettings {
    fn default() -> Self {
        default_cli()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        default_logging()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Reads and parses one TOML file. Missing keys take their defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, CoreError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// First existing config file: `$CIPHER_TRACE_CONFIG`, then the working
/// directory, then the user config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("cipher-trace").join("config.toml"))
        .filter(|p| p.exists())
}

/// Process-wide config, loaded once. Falls back to built-in defaults when no
/// file exists or the file cannot be used.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match config_path() {
        Some(path) => load_from(&path).unwrap_or_else(|err| {
            warn!("Ignoring config {}: {err} — using built-in defaults", path.display());
            Config::default()
        }),
        None => Config::default(),
    })
}
