use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CITIES, DEFAULT_DIRECTORY_URL, DEFAULT_TOKEN_ENV, DIRECTORY_TIMEOUT_MS, ENV_PREFIX,
    LOCAL_CONFIG_PATH, ROUTE_KEYWORDS, SCHEDULE_KEYWORDS, STOP_KEYWORDS,
};
use crate::resolver::Gazetteer;
use crate::utils::RutabotError;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Route/stop directory connection
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Recognized cities
    #[serde(default)]
    pub gazetteer: GazetteerConfig,

    /// Intent trigger words
    #[serde(default)]
    pub keywords: KeywordConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            gazetteer: GazetteerConfig::default(),
            keywords: KeywordConfig::default(),
        }
    }
}

/// Directory service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Base URL of the directory API
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Environment variable containing the bearer token
    pub token_env: String,
    /// Inline bearer token (takes priority over `token_env`)
    pub token: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DIRECTORY_URL.to_string(),
            timeout_ms: DIRECTORY_TIMEOUT_MS,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            token: None,
        }
    }
}

impl DirectoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Resolve the bearer credential: inline token first, then the env var
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(&self.token_env).ok())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Gazetteer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazetteerConfig {
    /// City names in matching priority order
    pub cities: Vec<String>,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Intent keyword configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub route: Vec<String>,
    pub schedule: Vec<String>,
    pub stop: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self {
            route: owned(ROUTE_KEYWORDS),
            schedule: owned(SCHEDULE_KEYWORDS),
            stop: owned(STOP_KEYWORDS),
        }
    }
}

impl Config {
    /// Check the invariants the resolver relies on
    pub fn validate(&self) -> Result<(), RutabotError> {
        let url = reqwest::Url::parse(&self.directory.base_url).map_err(|e| {
            RutabotError::ConfigError(format!(
                "invalid directory.base_url '{}': {}",
                self.directory.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RutabotError::ConfigError(format!(
                "directory.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.directory.timeout_ms == 0 {
            return Err(RutabotError::ConfigError(
                "directory.timeout_ms must be greater than zero".to_string(),
            ));
        }
        // Judge the cities the way the gazetteer will see them
        if Gazetteer::from_config(&self.gazetteer).is_empty() {
            return Err(RutabotError::ConfigError(
                "gazetteer.cities must name at least one city".to_string(),
            ));
        }
        for (name, words) in [
            ("route", &self.keywords.route),
            ("schedule", &self.keywords.schedule),
            ("stop", &self.keywords.stop),
        ] {
            if words.iter().all(|w| w.trim().is_empty()) {
                return Err(RutabotError::ConfigError(format!(
                    "keywords.{} must name at least one word",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let global_config = get_config_dir()?.join("config.toml");
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);

    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // RUTABOT_DIRECTORY__BASE_URL -> directory.base_url
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment.extract().context("Failed to load configuration")
}

/// Load configuration from an explicit file, still honoring env overrides
pub fn load_config_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    // Parse eagerly so syntax errors point at the file, not the figment chain
    let file_config: Config = toml::from_str(&toml_str)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    Figment::from(Serialized::defaults(file_config))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Failed to load configuration")
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "rutabot") {
        Ok(proj_dirs.config_dir().to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("rutabot"))
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<PathBuf> {
    let config_file = get_config_dir()?.join("config.toml");

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.clone()))?;
        println!("Configuración creada en: {}", config_file.display());
    } else {
        println!("La configuración ya existe en: {}", config_file.display());
    }

    Ok(config_file)
}
