//! Application settings, layered from a TOML file and the environment.
//!
//! Environment variables use the `PLANORA` prefix with `__` as separator,
//! e.g. `PLANORA_SERVER__PORT=8080`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct AppSettings {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub bind: String,
    pub port: u16,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000_i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("PLANORA").separator("__"))
            .build()?
            .try_deserialize()
    }
}
