use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Locations of the two read-only startup artifacts.
#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactsConfig {
    pub model_path: String,
    pub route_table_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Layer in the environment-specific file if present
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables win, e.g. FARELENS_SERVER__PORT=9000
            .add_source(config::Environment::with_prefix("FARELENS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
