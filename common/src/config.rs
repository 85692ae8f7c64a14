use serde::{Deserialize, Serialize};

/// Model used when neither the CLI nor the environment names one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Listen address for the image relay when none is configured.
pub const DEFAULT_RELAY_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub relay_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            relay_addr: DEFAULT_RELAY_ADDR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("CAROUSEL_MODEL") {
            config.model = model;
        }

        if let Ok(addr) = std::env::var("CAROUSEL_RELAY_ADDR") {
            config.relay_addr = addr;
        }

        config
    }
}
