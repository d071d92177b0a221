use serde::Deserialize;
use std::time::Duration;

/// HTTP settings for talking to the Meteomatics API.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API origin, without the trailing path (default: <https://api.meteomatics.com>).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.meteomatics.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
