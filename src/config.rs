//! Application Configuration
//!
//! Defaults can be overridden by a JSON blob embedded in the host page:
//! `<script id="app-config" type="application/json">{...}</script>`.

use serde::Deserialize;

use crate::autocomplete::DEFAULT_DEBOUNCE_MS;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
const DEMO_OMDB_API_KEY: &str = "5d74adf5";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub omdb_base_url: String,
    pub omdb_api_key: String,
    pub debounce_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            omdb_base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            omdb_api_key: option_env!("OMDB_API_KEY")
                .unwrap_or(DEMO_OMDB_API_KEY)
                .to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the page's config element, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(target: "config", "ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
