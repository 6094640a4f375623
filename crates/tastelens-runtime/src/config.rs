use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TASTELENS_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.tastelens (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: TASTELENS_CONFIG environment variable
    if let Ok(env_path) = std::env::var("TASTELENS_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG config directory (recommended default)
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tastelens").join("config.toml"));
    }

    // Priority 4: Fallback to ~/.tastelens (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tastelens").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// The profile the recommendation view fetches for. Injected configuration
/// rather than data baked into the view; a login-backed profile service can
/// replace this without touching the controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    /// Must name a dish known to the service; the recommendation endpoint
    /// keys on it.
    pub favorite_dish: String,
    pub diet_type: String,
    pub preferred_cuisine: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Vedika Sharma".to_string(),
            location: "Pune, India".to_string(),
            favorite_dish: "Paneer Tikka".to_string(),
            diet_type: "Vegetarian".to_string(),
            preferred_cuisine: "North Indian".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub profile: UserProfile,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
