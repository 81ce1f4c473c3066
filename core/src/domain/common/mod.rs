pub mod entities;
pub mod lenient;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct DiacareConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini: ProviderConfig,
    pub deepseek: ProviderConfig,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl ProviderConfig {
    /// Builds a provider config, treating a blank key as absent.
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini: ProviderConfig::new(
                None,
                DEFAULT_GEMINI_MODEL.to_string(),
                DEFAULT_GEMINI_BASE_URL.to_string(),
            ),
            deepseek: ProviderConfig::new(
                None,
                DEFAULT_DEEPSEEK_MODEL.to_string(),
                DEFAULT_DEEPSEEK_BASE_URL.to_string(),
            ),
            request_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}
