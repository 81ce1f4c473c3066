use std::time::Duration;

use reqwest::Client;

use crate::{
    domain::common::{DiacareConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::{DeepSeekLLMClient, GeminiLLMClient},
};

const CONNECT_TIMEOUT_SECS: u64 = 10;

pub type DiacareService = Service<GeminiLLMClient, DeepSeekLLMClient>;

pub fn create_service(config: DiacareConfig) -> Result<DiacareService, CoreError> {
    let http_client = Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(config.llm.request_timeout_secs))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
        })?;

    let gemini = GeminiLLMClient::new(config.llm.gemini, http_client.clone());
    let deepseek = DeepSeekLLMClient::new(config.llm.deepseek, http_client);

    Ok(Service::new(gemini, deepseek))
}
