use axum::extract::State;
use diacare_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::GeneratedRecipe, ports::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        recipe::validators::GenerateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    locale::RequestLocale,
};

const API_KEY_URL_HINT: &str = "Get your API key from https://aistudio.google.com/app/apikey";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub recipe: GeneratedRecipe,
}

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates one diabetes-friendly recipe with Google Gemini. When the model output holds no usable JSON a placeholder recipe carrying `rawResponse` is returned instead of an error.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid request body"),
        (status = 401, body = ApiErrorResponse, description = "Gemini rejected the API key"),
        (status = 500, body = ApiErrorResponse, description = "Missing API key or provider failure")
    ),
    params(
        ("Accept-Language" = Option<String>, Header, description = "Language for generated text"),
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into_input(locale))
        .await
        .map_err(recipe_error)?;

    Ok(Response::OK(GenerateRecipeResponse { recipe }))
}

fn recipe_error(error: CoreError) -> ApiError {
    match error {
        CoreError::MissingCredentials { .. } => ApiError::InternalServerError(
            ApiErrorResponse::new(
                "API key not configured. Please add your GOOGLE_GEMINI_API_KEY to the environment variables.",
            )
            .with_instructions(API_KEY_URL_HINT),
        ),
        CoreError::AuthenticationFailed { details } => ApiError::Unauthorized(
            ApiErrorResponse::new(
                "Authentication failed. Your Google Gemini API key is invalid or expired.",
            )
            .with_instructions(
                "Please verify your API key at https://aistudio.google.com/app/apikey and ensure it's correctly set in your environment variables.",
            )
            .with_details(details),
        ),
        other => {
            tracing::error!("Recipe generation error: {}", other);
            ApiError::InternalServerError(
                ApiErrorResponse::new(
                    "Failed to generate recipe. Please check your API key and try again.",
                )
                .with_details(other.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn missing_key_is_a_server_error_with_instructions() {
        let err = recipe_error(CoreError::MissingCredentials {
            provider: "Google Gemini",
        });

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body().error.contains("GOOGLE_GEMINI_API_KEY"));
        assert_eq!(err.body().instructions.as_deref(), Some(API_KEY_URL_HINT));
        assert!(err.body().details.is_none());
    }

    #[test]
    fn rejected_key_is_unauthorized_with_provider_body() {
        let err = recipe_error(CoreError::AuthenticationFailed {
            details: "API key not valid".to_string(),
        });

        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.body().details.as_deref(), Some("API key not valid"));
    }

    #[test]
    fn provider_failure_reports_status() {
        let err = recipe_error(CoreError::ProviderError {
            status: 503,
            body: "overloaded".to_string(),
        });

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body().details.as_deref().unwrap().contains("503"));
    }
}
