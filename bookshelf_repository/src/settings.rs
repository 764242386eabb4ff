use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
/// Server settings, overridable with `BOOKSHELF_`-prefixed environment variables
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Export spans to a local Jaeger agent
    pub jaeger_enabled: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix("BOOKSHELF"))
    }

    fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "localhost")?
            .set_default("port", 9000)?
            .set_default("jaeger_enabled", false)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
