use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE: &str = "confdash.db";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CONFDASH_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.confdash (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CONFDASH_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("confdash"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".confdash"));
    }

    anyhow::bail!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    )
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Database file, relative to the data directory unless absolute
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Organization names reported by `affiliation tracked`
    #[serde(default)]
    pub tracked_organizations: Vec<String>,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            tracked_organizations: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Absolute database path for a given data directory.
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        let expanded = expand_tilde(&self.database.to_string_lossy());
        if expanded.is_absolute() {
            expanded
        } else {
            data_dir.join(expanded)
        }
    }
}
