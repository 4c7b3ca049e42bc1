//! Configuration file discovery and loading.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::ChatConfig;

/// Environment variable naming a config file, checked before the search path.
pub const CONFIG_ENV: &str = "LITECHAT_CONFIG";

/// Per-directory config file name.
pub const LOCAL_CONFIG_FILE: &str = ".litechat.toml";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Defaults,
}

/// Resolves the config file for a run and parses it.
///
/// Candidates are, in order: `$LITECHAT_CONFIG` if set (and then nothing
/// else), `./.litechat.toml`, `<config dir>/litechat/config.toml`. When no
/// candidate exists the built-in defaults apply.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    candidates: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Loader using the environment override or the standard locations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: discover(std::env::var_os(CONFIG_ENV)),
        }
    }

    /// Loader for a single explicit file, as given by `--config`.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            candidates: vec![path],
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists on disk.
    #[must_use]
    pub fn find_config_file(&self) -> Option<PathBuf> {
        self.candidates.iter().find(|p| p.is_file()).cloned()
    }

    /// Load the configuration, discarding its origin.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<ChatConfig, ConfigError> {
        self.load_with_origin().map(|(config, _)| config)
    }

    /// Load the configuration and report which file supplied it.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load_with_origin(&self) -> Result<(ChatConfig, ConfigOrigin), ConfigError> {
        match self.find_config_file() {
            Some(path) => {
                let config = parse_file(&path)?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                Ok((config, ConfigOrigin::File(path)))
            }
            None => {
                tracing::debug!(candidates = ?self.candidates, "No config file found, using defaults");
                Ok((ChatConfig::default(), ConfigOrigin::Defaults))
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate list for a given value of `LITECHAT_CONFIG`.
fn discover(env_override: Option<OsString>) -> Vec<PathBuf> {
    if let Some(path) = env_override.filter(|v| !v.is_empty()) {
        return vec![PathBuf::from(path)];
    }

    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    candidates.extend(dirs::config_dir().map(|dir| dir.join("litechat").join("config.toml")));
    candidates
}

fn parse_file(path: &Path) -> Result<ChatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
