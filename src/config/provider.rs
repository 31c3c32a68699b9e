//! Upstream provider configuration.

use serde::Deserialize;

use crate::adapter::provider::DEFAULT_BOOKMAKERS;

/// Provider endpoint and bookmaker preference.
/// The API key is loaded from `MATCHDAY_API_KEY` at runtime (never from the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bookmakers in order of preference.
    #[serde(default = "default_bookmakers")]
    pub bookmakers: Vec<String>,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.football-data.example/v1".into()
}

fn default_bookmakers() -> Vec<String> {
    DEFAULT_BOOKMAKERS.iter().map(ToString::to_string).collect()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bookmakers: default_bookmakers(),
            api_key: None,
        }
    }
}
