use anyhow::Result;
use serde::Deserialize;

/// Environment variable prefix, e.g. `CRM_MEETINGS__SERVICE__HTTP__PORT=8080`
pub const ENV_PREFIX: &str = "CRM_MEETINGS";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    /// JSON file loaded into the store at startup
    pub seed_path: Option<String>,
}

impl HttpConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Config {
    /// Load from `path` (any format the `config` crate recognizes by
    /// extension), then apply environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
