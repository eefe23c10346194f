use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub files: FilesConfig,
    pub uniq: Option<UniqConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// JSON array of units to deduplicate
    pub input: String,
    /// Where the kept units are written
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqConfig {
    /// Fields to compare; empty or missing compares every field
    pub fields: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from `config.toml`.
    ///
    /// # Errors
    /// Returns `ConfigError` if file not found, IO fails, or parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_toml(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the TOML file at `path`.
    ///
    /// # Errors
    /// Returns `ConfigError` if file not found, IO fails, parsing fails, or
    /// no input path is configured.
    pub fn load_from_toml(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing fails or no input path is configured.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.files.input = config.files.input.trim().to_string();
        if config.files.input.is_empty() {
            return Err(ConfigError::MissingInput(
                "files.input must name a JSON file".to_string(),
            ));
        }

        Ok(config)
    }

    #[must_use]
    pub fn input_path(&self) -> &str {
        &self.files.input
    }

    #[must_use]
    pub fn output_path(&self) -> &str {
        self.files
            .output
            .as_deref()
            .unwrap_or("./unique-units.json")
    }

    #[must_use]
    pub fn field_names(&self) -> &[String] {
        self.uniq
            .as_ref()
            .and_then(|u| u.fields.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Missing input: {0}")]
    MissingInput(String),
}
