use axum::extract::State;
use diacare_core::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::GeneratedMealPlan, ports::MealPlanService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        meal_plan::validators::GenerateMealPlanValidator,
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

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanResponse {
    pub meal_plan: GeneratedMealPlan,
}

#[utoipa::path(
    post,
    path = "/generate-meal-plan",
    tag = "meal-plan",
    summary = "Generate a meal plan",
    description = "Generates a multi-day diabetes-friendly meal plan with DeepSeek. Model output without usable JSON is reported as an error.",
    responses(
        (status = 200, body = GenerateMealPlanResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid request body"),
        (status = 500, body = ApiErrorResponse, description = "Provider failure or unparseable plan")
    ),
    params(
        ("Accept-Language" = Option<String>, Header, description = "Language for generated text"),
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .generate_meal_plan(payload.into_input(locale))
        .await
        .map_err(meal_plan_error)?;

    Ok(Response::OK(GenerateMealPlanResponse { meal_plan }))
}

fn meal_plan_error(error: CoreError) -> ApiError {
    match error {
        CoreError::ParseError(_) => ApiError::InternalServerError(ApiErrorResponse::new(
            "Failed to parse meal plan. Please try again.",
        )),
        other => {
            tracing::error!("Meal plan generation error: {}", other);
            ApiError::InternalServerError(ApiErrorResponse::new(
                "Failed to generate meal plan. Please try again.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn parse_failure_has_its_own_message() {
        let err = meal_plan_error(CoreError::ParseError("expected value".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body().error,
            "Failed to parse meal plan. Please try again."
        );
    }

    #[test]
    fn provider_failure_is_a_generic_server_error() {
        let err = meal_plan_error(CoreError::ProviderError {
            status: 401,
            body: "Authentication Fails".to_string(),
        });

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            &ApiErrorResponse::new("Failed to generate meal plan. Please try again.")
        );
    }
}
