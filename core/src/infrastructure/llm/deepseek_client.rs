use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{ProviderConfig, entities::app_errors::CoreError},
    llm::ports::{CompletionRequest, LLMClient},
};

pub const DEEPSEEK_PROVIDER_NAME: &str = "DeepSeek";

/// Client for DeepSeek's OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct DeepSeekLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl DeepSeekLLMClient {
    pub fn new(config: ProviderConfig, client: Client) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("DEEPSEEK_API_KEY is not set; meal plan requests will be rejected upstream");
        }

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
}

impl LLMClient for DeepSeekLLMClient {
    fn provider_name(&self) -> &'static str {
        DEEPSEEK_PROVIDER_NAME
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let chat_request = ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
            response_format: request.json_output.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        // A missing key is sent as-is and left for the provider to reject.
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("DeepSeek API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        tracing::info!("DeepSeek API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("DeepSeek API error: {} - {}", status, error_text);
            return Err(CoreError::ProviderError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse DeepSeek response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
