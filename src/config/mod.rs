//! User configuration for the external tools the scaffolder drives.
//!
//! Configuration is optional. It is read from the file named by `TS_CLI_CONFIG`, or
//! from `~/.ts-cli.toml` when that variable is unset:
//!
//! ```toml
//! [tools]
//! npm = "pnpm"
//! # npx keeps its default
//! ```
//!
//! Any key left out keeps its default, and a file that fails to parse is reported and
//! ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "TS_CLI_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".ts-cli.toml";

/// Main configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct ScaffoldConfig {
    /// Executables used for package management
    #[serde(default)]
    pub tools: Tools,
}

/// Executable names; `None` means "use the default".
#[derive(Debug, Default, Deserialize)]
pub struct Tools {
    #[serde(default)]
    pub npm: Option<String>,

    #[serde(default)]
    pub npx: Option<String>,
}

impl ScaffoldConfig {
    const DEFAULT_NPM: &'static str = "npm";
    const DEFAULT_NPX: &'static str = "npx";

    /// Package manager executable
    #[must_use]
    pub fn npm(&self) -> &str {
        self.tools.npm.as_deref().unwrap_or(Self::DEFAULT_NPM)
    }

    /// Package runner executable
    #[must_use]
    pub fn npx(&self) -> &str {
        self.tools.npx.as_deref().unwrap_or(Self::DEFAULT_NPX)
    }

    /// Resolves where the configuration file lives, honoring `TS_CLI_CONFIG`
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(custom));
        }
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default location.
    ///
    /// # Errors
    ///
    /// Only fails if an existing file cannot be read.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing or blank file yields defaults. Invalid TOML is logged as a warning and
    /// also yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read (e.g., permission denied).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match toml::from_str::<ScaffoldConfig>(&content) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!(
                    "Invalid TOML in {}: {}. Using default configuration.",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.npm(), "npm");
        assert_eq!(config.npx(), "npx");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[tools]\nnpm = \"pnpm\"\n")?;

        let config = ScaffoldConfig::load_from_path(&path)?;
        assert_eq!(config.npm(), "pnpm");
        assert_eq!(config.npx(), "npx");
        Ok(())
    }

    #[test]
    fn test_missing_and_blank_files_use_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = ScaffoldConfig::load_from_path(&dir.path().join("nope.toml"))?;
        assert_eq!(missing.npm(), "npm");

        let blank_path = dir.path().join("blank.toml");
        fs::write(&blank_path, "   \n")?;
        let blank = ScaffoldConfig::load_from_path(&blank_path)?;
        assert_eq!(blank.npx(), "npx");
        Ok(())
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[tools\nnpm = ")?;

        let config = ScaffoldConfig::load_from_path(&path)?;
        assert_eq!(config.npm(), "npm");
        Ok(())
    }

    #[test]
    fn test_env_var_selects_config_path() {
        temp_env::with_var(CONFIG_ENV_VAR, Some("/tmp/custom-ts-cli.toml"), || {
            assert_eq!(
                ScaffoldConfig::config_path(),
                Some(PathBuf::from("/tmp/custom-ts-cli.toml"))
            );
        });
    }
}
