use axum::{Json, extract::State};
use diacare_core::domain::{llm::ports::LLMClient, locale::Locale};
use serde::Serialize;

use super::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Serialize)]
pub struct ProvidersConfig {
    pub gemini: ProviderStatus,
    pub deepseek: ProviderStatus,
}

/// Never carries the key itself, only whether one is set.
#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub model: String,
    pub configured: bool,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let gemini = state.service.recipe_llm();
    let deepseek = state.service.meal_plan_llm();

    Json(ConfigResponse {
        default_locale: Locale::default(),
        locales: Locale::ALL.to_vec(),
        providers: ProvidersConfig {
            gemini: ProviderStatus {
                model: gemini.model_name().to_string(),
                configured: gemini.has_credentials(),
            },
            deepseek: ProviderStatus {
                model: deepseek.model_name().to_string(),
                configured: deepseek.has_credentials(),
            },
        },
    })
}
