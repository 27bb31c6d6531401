//! Form configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::IntakeResult;

/// Delay of the simulated submission, in milliseconds
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;

/// Character count shown as the description counter's ceiling
pub const DEFAULT_DESCRIPTION_SOFT_LIMIT: usize = 1_000;

/// How long a toast stays on screen, in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Tunables for the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Artificial latency of the simulated backend call
    pub submit_delay_ms: u64,
    /// Display ceiling of the description counter (never enforced)
    pub description_soft_limit: usize,
    /// Auto-dismiss delay for notifications
    pub toast_duration_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            description_soft_limit: DEFAULT_DESCRIPTION_SOFT_LIMIT,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl FormConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json(json: &str) -> IntakeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;

    #[test]
    fn defaults_match_constants() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.description_soft_limit, 1_000);
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FormConfig::from_json(r#"{ "submit_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 500);
        assert_eq!(config.description_soft_limit, DEFAULT_DESCRIPTION_SOFT_LIMIT);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = FormConfig::from_json("{ submit_delay_ms: }").unwrap_err();
        assert!(matches!(err, IntakeError::Config(_)));
    }
}
