use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs for the deferred parts of the bridge.
///
/// The host passes this as JSON at init; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Delay before the release half of a synthetic click (about two frames)
    pub click_release_delay_ms: u64,
    /// Delay before grab/cursor-shape notifications reach the host (one frame)
    pub notify_delay_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            click_release_delay_ms: 33,
            notify_delay_ms: 16,
        }
    }
}

impl BridgeConfig {
    pub fn try_from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid bridge config")
    }

    /// Parse the host's config, falling back to defaults on empty or bad input.
    pub fn from_json(json: &str) -> Self {
        if json.trim().is_empty() {
            return Self::default();
        }
        match Self::try_from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default bridge config: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn click_release_delay(&self) -> Duration {
        Duration::from_millis(self.click_release_delay_ms)
    }

    pub fn notify_delay(&self) -> Duration {
        Duration::from_millis(self.notify_delay_ms)
    }
}
