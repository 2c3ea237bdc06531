use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Symbol of the registered predicate to evaluate, e.g. `ismonochrome`.
    #[serde(default = "default_predicate")]
    pub predicate: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Newline-delimited JSON file of image plane descriptors.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            predicate: default_predicate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFile(path.display().to_string(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadFile(String, std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
}

// Default value functions
fn default_predicate() -> String {
    "ismonochrome".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in() {
        let config = Config::parse("[input]\npath = \"planes.jsonl\"\n").unwrap();
        assert_eq!(config.filter.predicate, "ismonochrome");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.input.path, PathBuf::from("planes.jsonl"));
    }

    #[test]
    fn explicit_values() {
        let config = Config::parse(
            r#"
[filter]
predicate = "iscolor"

[input]
path = "/data/planes.jsonl"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.filter.predicate, "iscolor");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = Config::parse("[filter]\npredicate = \"isstack\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file() {
        let result = Config::load(Path::new("/nonexistent/plane-filter.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile(..))));
    }
}
