//! Report generation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Analyzer latency and session housekeeping.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Simulated analysis latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Form sessions untouched for this long are discarded
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Validate against the request timeout, which must leave room for the
    /// analyzer to finish.
    pub fn validate(&self, request_timeout_secs: u64) -> Result<(), ValidationError> {
        if self.delay() >= Duration::from_secs(request_timeout_secs) {
            return Err(ValidationError::DelayExceedsTimeout);
        }
        if self.session_idle_secs < 60 {
            return Err(ValidationError::IdleWindowTooShort);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_session_idle_secs() -> u64 {
    3600
}
