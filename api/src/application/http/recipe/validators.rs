use diacare_core::domain::{
    locale::Locale,
    recipe::value_objects::{GenerateRecipeInput, MealType},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::form_values::u32_from_form;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    /// Target calories per serving.
    #[serde(deserialize_with = "u32_from_form")]
    #[validate(range(min = 1, max = 10000, message = "calories must be between 1 and 10000"))]
    #[schema(example = 400)]
    pub calories: u32,

    pub meal_type: MealType,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "preferences must be at most 2000 characters"))]
    pub preferences: Option<String>,

    /// Maximum cooking time in minutes.
    #[serde(deserialize_with = "u32_from_form")]
    #[validate(range(min = 1, max = 1440, message = "cookingTime must be between 1 and 1440"))]
    #[schema(example = 20)]
    pub cooking_time: u32,

    #[serde(deserialize_with = "u32_from_form")]
    #[validate(range(min = 1, max = 100, message = "servings must be between 1 and 100"))]
    #[schema(example = 2)]
    pub servings: u32,
}

impl GenerateRecipeValidator {
    pub fn into_input(self, locale: Locale) -> GenerateRecipeInput {
        GenerateRecipeInput {
            calories: self.calories,
            meal_type: self.meal_type,
            dietary_restrictions: self.dietary_restrictions,
            preferences: self.preferences,
            cooking_time: self.cooking_time,
            servings: self.servings,
            locale,
        }
    }
}
