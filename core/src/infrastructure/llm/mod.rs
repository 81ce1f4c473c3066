pub mod deepseek_client;
pub mod gemini_client;

pub use deepseek_client::DeepSeekLLMClient;
pub use gemini_client::GeminiLLMClient;
