use diacare_core::domain::{
    locale::Locale,
    meal_plan::value_objects::{DEFAULT_PLAN_DAYS, GenerateMealPlanInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::form_values::{optional_u32_from_form, u32_from_form};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanValidator {
    #[serde(deserialize_with = "u32_from_form")]
    #[validate(range(
        min = 1,
        max = 10000,
        message = "dailyCalories must be between 1 and 10000"
    ))]
    #[schema(example = 1800)]
    pub daily_calories: u32,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "preferences must be at most 2000 characters"))]
    pub preferences: Option<String>,

    /// Number of days to plan, 7 when omitted.
    #[serde(default, deserialize_with = "optional_u32_from_form")]
    #[validate(range(min = 1, max = 31, message = "days must be between 1 and 31"))]
    #[schema(example = 7)]
    pub days: Option<u32>,
}

impl GenerateMealPlanValidator {
    pub fn into_input(self, locale: Locale) -> GenerateMealPlanInput {
        GenerateMealPlanInput {
            daily_calories: self.daily_calories,
            dietary_restrictions: self.dietary_restrictions,
            preferences: self.preferences,
            days: self.days.unwrap_or(DEFAULT_PLAN_DAYS),
            locale,
        }
    }
}
