use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::common::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_days: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub daily_calories: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub plan: Vec<DayPlan>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub shopping_list: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub nutrition_summary: NutritionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    #[serde(default, deserialize_with = "lenient::number")]
    pub day: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub meals: DayMeals,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub total_calories: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayMeals {
    #[serde(default, deserialize_with = "lenient::optional_object")]
    pub breakfast: Option<PlannedMeal>,
    #[serde(default, deserialize_with = "lenient::optional_object")]
    pub lunch: Option<PlannedMeal>,
    #[serde(default, deserialize_with = "lenient::optional_object")]
    pub dinner: Option<PlannedMeal>,
    #[serde(default, deserialize_with = "lenient::optional_object")]
    pub snack: Option<PlannedMeal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedMeal {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub calories: Option<u32>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub carbs: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub protein: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub avg_daily_calories: Option<u32>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub avg_carbs: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub avg_protein: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub avg_fiber: String,
}

impl GeneratedMealPlan {
    /// Coerces an extracted provider object into meal plan shape.
    ///
    /// Every field decodes leniently, so any object yields a plan.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        serde_json::from_value(Value::Object(object)).unwrap_or_default()
    }
}
