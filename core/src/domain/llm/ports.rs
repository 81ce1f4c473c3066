use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// A single-shot completion: one system instruction, one user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Ask the provider for JSON-formatted output when it supports the hint.
    pub json_output: bool,
}

/// LLM Client trait for calling hosted text-completion providers
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Human-readable provider name used in error reports.
    fn provider_name(&self) -> &'static str;

    fn has_credentials(&self) -> bool;

    /// Sends one request and returns the provider's raw completion text.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
