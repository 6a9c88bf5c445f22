use crate::error::{Result, VtagError};
use crate::git::TagStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "vtag.toml";

/// Represents the complete configuration for git-vtag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

/// Where the repository lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repository_path(),
        }
    }
}

/// How new tags are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default)]
    pub annotated: bool,

    #[serde(default = "default_tag_message")]
    pub message: String,
}

fn default_tag_message() -> String {
    "Release {tag}".to_string()
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            annotated: false,
            message: default_tag_message(),
        }
    }
}

impl TagConfig {
    /// Tag style described by this section
    pub fn style(&self) -> TagStyle {
        if self.annotated {
            TagStyle::Annotated {
                message: self.message.clone(),
            }
        } else {
            TagStyle::Lightweight
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `vtag.toml` in current directory
/// 3. `vtag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or if an explicit
///   path does not exist
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VtagError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    parse_config(&config_str)
        .map_err(|e| VtagError::config(format!("invalid '{}': {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
