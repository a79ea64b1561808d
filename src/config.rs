use crate::domain::{VersionSegment, VersionString};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "versioner.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".versioner.toml";

/// Represents the complete configuration for versioner.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,
}

/// Defaults applied when bumping through [`crate::version::bump_with_config`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BumpConfig {
    /// Segment bumped when the caller does not name one
    #[serde(default)]
    pub segment: VersionSegment,

    /// Keep the pre-release suffix across bumps
    #[serde(default)]
    pub preserve_suffix: bool,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Switch on the behaviour flags this configuration asks for
    pub fn apply<'a>(&self, version: &'a mut VersionString) -> &'a mut VersionString {
        if self.bump.preserve_suffix {
            version.preserve_suffix();
        }
        version
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioner.toml` in current directory
/// 3. `.versioner.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("Loaded versioner configuration ({} bytes)", config_str.len());
    Config::from_toml_str(&config_str)
}
