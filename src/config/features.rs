//! Feature flags configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Mount the single-field quick report API
    #[serde(default = "default_true")]
    pub enable_quick_flow: bool,

    /// Mount the multi-step wizard API
    #[serde(default = "default_true")]
    pub enable_wizard_flow: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl FeatureFlags {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enable_quick_flow && !self.enable_wizard_flow {
            return Err(ValidationError::NoFlowEnabled);
        }
        Ok(())
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_quick_flow: true,
            enable_wizard_flow: true,
            json_logs: false,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_quick_flow);
        assert!(flags.enable_wizard_flow);
        assert!(!flags.json_logs);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_quick_flow": false,
            "json_logs": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_quick_flow);
        assert!(flags.enable_wizard_flow);
        assert!(flags.json_logs);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn test_both_flows_disabled_is_invalid() {
        let flags = FeatureFlags {
            enable_quick_flow: false,
            enable_wizard_flow: false,
            ..Default::default()
        };
        assert_eq!(flags.validate(), Err(ValidationError::NoFlowEnabled));
    }
}
