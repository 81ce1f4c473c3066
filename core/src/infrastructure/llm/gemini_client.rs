use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{ProviderConfig, entities::app_errors::CoreError},
    llm::ports::{CompletionRequest, LLMClient},
};

pub const GEMINI_PROVIDER_NAME: &str = "Google Gemini";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(config: ProviderConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key,
            model_name: config.model,
            base_url: config.base_url,
            client,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn call_gemini_api(
        &self,
        api_key: &str,
        request: GeminiRequest,
    ) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            // The key travels in the query string, so the URL never goes into messages.
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        tracing::info!("Google Gemini API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    CoreError::AuthenticationFailed {
                        details: error_text,
                    }
                }
                _ => CoreError::ProviderError {
                    status: status.as_u16(),
                    body: error_text,
                },
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    fn provider_name(&self) -> &'static str {
        GEMINI_PROVIDER_NAME
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CoreError::MissingCredentials {
                provider: GEMINI_PROVIDER_NAME,
            })?;

        // generateContent has no system role here; the persona leads the prompt.
        let gemini_request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{}\n\n{}", request.system_instruction, request.prompt),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                response_mime_type: request
                    .json_output
                    .then(|| "application/json".to_string()),
            }),
        };

        self.call_gemini_api(api_key, gemini_request).await
    }
}
