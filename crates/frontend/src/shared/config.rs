use crate::shared::api_utils::{api_base, ApiClient};
use anyhow::Context;
use contracts::shared::paging::DEFAULT_PAGE_SIZE;
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Deserialize;

/// Served next to index.html by Trunk
const CONFIG_URL: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means `<protocol>//<hostname>:3000` of the current page
    pub base_url: String,
    pub categories_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            categories_path: "/admin/categories".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    pub sentiment_url: String,
    pub description_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            sentiment_url: "http://127.0.0.1:8000/sentiment".to_string(),
            description_url: "http://127.0.0.1:8000/description".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub page_size: usize,
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            toast_timeout_ms: 3000,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
categories_path = "/admin/categories"

[services]
sentiment_url = "http://127.0.0.1:8000/sentiment"
description_url = "http://127.0.0.1:8000/description"

[ui]
page_size = 10
toast_timeout_ms = 3000
"#;

impl AppConfig {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents).context("invalid config.toml")?;
        if config.ui.page_size == 0 {
            anyhow::bail!("ui.page_size must be positive");
        }
        Ok(config)
    }

    pub fn api_base_url(&self) -> String {
        let configured = self.api.base_url.trim();
        if configured.is_empty() {
            api_base()
        } else {
            configured.to_string()
        }
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.api_base_url())
    }

    pub fn sentiment_client(&self) -> ApiClient {
        ApiClient::without_credentials(self.services.sentiment_url.clone())
    }

    pub fn description_client(&self) -> ApiClient {
        ApiClient::without_credentials(self.services.description_url.clone())
    }
}

/// Configuration provided at the application root
pub fn use_app_config() -> StoredValue<AppConfig> {
    use_context::<StoredValue<AppConfig>>().expect("AppConfig not found in context")
}

/// Load configuration
///
/// Search order:
/// 1. `config.toml` served next to index.html
/// 2. Falls back to embedded default config
pub async fn load_config() -> anyhow::Result<AppConfig> {
    match fetch_config().await {
        Ok(config) => {
            log::info!("Loaded {}", CONFIG_URL);
            return Ok(config);
        }
        Err(e) => log::warn!("{} not used: {:#}", CONFIG_URL, e),
    }

    log::info!("Using default embedded configuration");
    AppConfig::parse(DEFAULT_CONFIG)
}

async fn fetch_config() -> anyhow::Result<AppConfig> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("request failed: {}", e))?;
    if !response.ok() {
        anyhow::bail!("HTTP {}", response.status());
    }
    let contents = response
        .text()
        .await
        .map_err(|e| anyhow::anyhow!("unreadable body: {}", e))?;
    AppConfig::parse(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.categories_path, "/admin/categories");
        assert_eq!(config.ui.page_size, 10);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::parse(
            r#"
[api]
base_url = "https://shop.example.com/api"
"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url(), "https://shop.example.com/api");
        assert_eq!(config.api.categories_path, "/admin/categories");
        assert_eq!(config.ui.toast_timeout_ms, 3000);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(AppConfig::parse("[ui]\npage_size = 0\n").is_err());
        assert!(AppConfig::parse("[api\n").is_err());
    }
}
