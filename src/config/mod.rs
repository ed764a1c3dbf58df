//! Runtime configuration.
//!
//! Read once at startup from `ENIGMA_REPORT__*` environment variables (a
//! `.env` file is honored in development). Sections nest with `__`, so
//! `ENIGMA_REPORT__GENERATION__DELAY_MS=0` sets `generation.delay_ms`.
//! Nothing is required: an empty environment yields a working server.

mod error;
mod features;
mod generation;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use generation::GenerationConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root configuration: one field per section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Loads `.env` if present, then the prefixed environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not parse into its field
    /// type (for example a non-numeric port).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::default()
            .prefix("ENIGMA_REPORT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Cross-section checks run after [`AppConfig::load`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.generation.validate(self.server.request_timeout_secs)?;
        self.features.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
