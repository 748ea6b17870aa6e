use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{Config, Profile};

impl FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cascade" => Ok(Self::Cascade),
            "single" => Ok(Self::Single),
            _ => bail!("Invalid profile: {s} (expected cascade or single)"),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cascade => "cascade",
            Self::Single => "single",
        })
    }
}

impl Config {
    /// Directory holding the config file and the log.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("termhere"))
    }

    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load from the default path; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "terminal.profile" => Ok(self.terminal.profile.to_string()),
            "terminal.preferred" => Ok(self.terminal.preferred.clone().unwrap_or_default()),
            "terminal.command" => Ok(self.terminal.command.clone()),
            "fallback.integrated" => Ok(self.fallback.integrated.to_string()),
            "log.level" => Ok(self.log.level.clone()),
            _ => bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "terminal.profile" => self.terminal.profile = value.parse()?,
            "terminal.preferred" => {
                self.terminal.preferred = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "terminal.command" => {
                if value.trim().is_empty() {
                    bail!("terminal.command cannot be empty");
                }
                self.terminal.command = value.to_string();
            }
            "fallback.integrated" => {
                self.fallback.integrated = value
                    .parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
            }
            "log.level" => {
                tracing_subscriber::EnvFilter::try_new(value)
                    .with_context(|| format!("Invalid log level: {value}"))?;
                self.log.level = value.to_string();
            }
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
