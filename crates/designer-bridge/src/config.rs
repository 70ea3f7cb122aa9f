use serde::{Deserialize, Serialize};
use tee_preview::PreviewConfig;

use crate::session::BridgeError;

/// Session tuning. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Delay the host waits before reporting a synthesis as settled (ms).
    pub synth_delay_ms: u64,
    /// Presets kept in the history.
    pub history_limit: usize,
    pub preview: PreviewConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            synth_delay_ms: 250,
            history_limit: preset_engine::DEFAULT_HISTORY_LIMIT,
            preview: PreviewConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(|e| BridgeError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
