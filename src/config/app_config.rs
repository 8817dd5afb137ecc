use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub langfuse: LangfuseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the prompt store
#[derive(Debug, Clone, Deserialize)]
pub struct LangfuseConfig {
    pub host: String,
    pub public_key: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LangfuseConfig {
    // Defaults target the local development instance; NODUS_LANGFUSE__*
    // environment variables override them.
    fn default() -> Self {
        Self {
            host: "http://localhost:3000".to_string(),
            public_key: "pk-lf-a401fb0c-6ee3-4636-afd4-803b9dfe4aaf".to_string(),
            secret_key: "sk-lf-ccb62e83-9148-49f8-8858-ff3c963bb7a8".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("NODUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_instance() {
        let config = AppConfig::default();
        assert_eq!(config.langfuse.host, "http://localhost:3000");
        assert!(config.langfuse.public_key.starts_with("pk-lf-"));
        assert!(config.langfuse.secret_key.starts_with("sk-lf-"));
    }

    #[test]
    fn test_default_logging() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }
}
