//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use notice2do_extractor::ExtractorConfig;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted first for the backend credential.
pub const CREDENTIAL_ENV: &str = "OPENAI_API_KEY";

/// CLI configuration.
#[derive(Clone, Default, Deserialize)]
pub struct Config {
    /// Backend credential (the environment variable takes precedence)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Generation backend settings
    #[serde(default)]
    pub backend: BackendSettings,

    /// Extractor settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Generation backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Time zone identifier for calendar events
    #[serde(default = "default_zone_id")]
    pub zone_id: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".notice2do").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Resolve the credential at call time.
    pub fn resolve_credential(&self) -> Option<String> {
        self.credential_with_env(std::env::var(CREDENTIAL_ENV).ok())
    }

    /// Pick the environment value when set and non-blank, else the file value.
    fn credential_with_env(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("backend", &self.backend)
            .field("extractor", &self.extractor)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            zone_id: default_zone_id(),
        }
    }
}

fn default_model() -> String {
    notice2do_llm::openai::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    notice2do_llm::openai::DEFAULT_ENDPOINT.to_string()
}

fn default_zone_id() -> String {
    notice2do_calendar::DEFAULT_ZONE_ID.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}
