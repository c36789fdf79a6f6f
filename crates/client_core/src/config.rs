use std::{collections::HashMap, fs};

use anyhow::Context;
use url::Url;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".into(),
            request_timeout_seconds: 30,
        }
    }
}

/// Defaults, then `client.toml` next to the binary, then env overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("request_timeout_seconds") {
                if let Ok(parsed) = v.parse::<u64>() {
                    settings.request_timeout_seconds = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__REQUEST_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_seconds = parsed;
        }
    }

    settings
}

impl Settings {
    pub fn api_base(&self) -> anyhow::Result<Url> {
        Url::parse(self.api_base_url.trim())
            .with_context(|| format!("invalid api base url '{}'", self.api_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_parses() {
        Settings::default().api_base().expect("default url");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let settings = Settings {
            api_base_url: "not a url".into(),
            ..Settings::default()
        };
        assert!(settings.api_base().is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let raw = "api_base_url = \"https://tube.example\"\nrequest_timeout_seconds = \"5\"\n";
        let file_cfg: HashMap<String, String> = toml::from_str(raw).expect("toml");
        assert_eq!(
            file_cfg.get("api_base_url").map(String::as_str),
            Some("https://tube.example")
        );
        assert_eq!(
            file_cfg
                .get("request_timeout_seconds")
                .and_then(|v| v.parse::<u64>().ok()),
            Some(5)
        );
    }
}
