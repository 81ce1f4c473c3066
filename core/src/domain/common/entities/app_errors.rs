use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{provider} API key is not configured")]
    MissingCredentials { provider: &'static str },

    #[error("provider rejected the API key: {details}")]
    AuthenticationFailed { details: String },

    #[error("provider returned HTTP {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("failed to parse provider response: {0}")]
    ParseError(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),
}
