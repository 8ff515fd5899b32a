//! Configuration management for the library system

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UsersConfig {
    /// Serve users through the read-only service
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Whether log lines should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}

/// Environment overrides, e.g. `LIBRARY_USERS__READ_ONLY=true`
fn environment() -> Environment {
    Environment::with_prefix("LIBRARY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(source: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.users.read_only);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_read_only_and_json() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "JSON"

            [users]
            read_only = true
            "#,
        );
        assert_eq!(config.logging.level, "debug");
        assert!(config.json_logs());
        assert!(config.users.read_only);
    }

    #[test]
    fn test_partial_logging_table() {
        let config = from_toml("[logging]\nlevel = \"debug\"\n");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_environment_overrides() {
        let vars = config::Map::from([
            ("LIBRARY_USERS__READ_ONLY".to_string(), "true".to_string()),
            ("LIBRARY_LOGGING__LEVEL".to_string(), "warn".to_string()),
            ("OTHER_USERS__READ_ONLY".to_string(), "false".to_string()),
        ]);
        let config: AppConfig = Config::builder()
            .add_source(File::from_str("[logging]\nlevel = \"info\"\n", FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert!(config.users.read_only);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }
}
