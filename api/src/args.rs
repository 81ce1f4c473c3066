use std::path::PathBuf;

use clap::{ArgAction, Parser};
use diacare_core::domain::common::{
    DEFAULT_DEEPSEEK_BASE_URL, DEFAULT_DEEPSEEK_MODEL, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL, DEFAULT_LLM_TIMEOUT_SECS, DiacareConfig, LLMConfig, ProviderConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "diacare-api", version, about = "DiaCare recipe and meal plan API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/diacare`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,

    #[arg(long = "tls-cert", env = "TLS_CERT_PATH", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "TLS_KEY_PATH", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GOOGLE_GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "deepseek-api-key", env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub deepseek_api_key: Option<String>,

    #[arg(long = "deepseek-model", env = "DEEPSEEK_MODEL", default_value = DEFAULT_DEEPSEEK_MODEL)]
    pub deepseek_model: String,

    #[arg(
        long = "deepseek-base-url",
        env = "DEEPSEEK_BASE_URL",
        default_value = DEFAULT_DEEPSEEK_BASE_URL
    )]
    pub deepseek_base_url: String,

    /// Upper bound on a single provider call, in seconds.
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = DEFAULT_LLM_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for DiacareConfig {
    fn from(args: Args) -> Self {
        DiacareConfig {
            llm: LLMConfig {
                gemini: ProviderConfig::new(
                    args.llm.gemini_api_key,
                    args.llm.gemini_model,
                    args.llm.gemini_base_url,
                ),
                deepseek: ProviderConfig::new(
                    args.llm.deepseek_api_key,
                    args.llm.deepseek_model,
                    args.llm.deepseek_base_url,
                ),
                request_timeout_secs: args.llm.timeout_secs,
            },
        }
    }
}
