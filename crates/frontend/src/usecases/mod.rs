pub mod u501_sentiment_analysis;
pub mod u502_generate_description;

use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

/// Clients for the companion services (no admin session)
#[derive(Clone, Copy)]
pub struct ServiceClients {
    pub sentiment: StoredValue<ApiClient>,
    pub description: StoredValue<ApiClient>,
}

impl ServiceClients {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sentiment: StoredValue::new(config.sentiment_client()),
            description: StoredValue::new(config.description_client()),
        }
    }
}

pub fn use_service_clients() -> ServiceClients {
    use_context::<ServiceClients>().expect("ServiceClients not found. Provide it in App.")
}
