use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{common::lenient, recipe::value_objects::GenerateRecipeInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GlycemicIndex {
    Low,
    Medium,
    High,
}

impl GlycemicIndex {
    /// Reads labels such as `"Low"`, `"low GI"` or `"moderate"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        if label.starts_with("low") {
            Some(GlycemicIndex::Low)
        } else if label.starts_with("medium") || label.starts_with("moderate") {
            Some(GlycemicIndex::Medium)
        } else if label.starts_with("high") {
            Some(GlycemicIndex::High)
        } else {
            None
        }
    }
}

fn lenient_glycemic_index<'de, D>(deserializer: D) -> Result<Option<GlycemicIndex>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(GlycemicIndex::from_label))
}

/// A single recipe as returned by the provider.
///
/// Every field is optional on the wire; absent or mistyped values decode to
/// their defaults. `raw_response` is only set on fallback recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub servings: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub calories: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub carbs: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub protein: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fat: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fiber: String,
    #[serde(default, deserialize_with = "lenient_glycemic_index")]
    pub glycemic_index: Option<GlycemicIndex>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub nutrition_notes: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub raw_response: Option<String>,
}

impl GeneratedRecipe {
    /// Coerces an extracted provider object into recipe shape.
    ///
    /// Every field decodes leniently, so any object yields a recipe.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let mut recipe: GeneratedRecipe =
            serde_json::from_value(Value::Object(object)).unwrap_or_default();
        recipe.raw_response = None;
        recipe
    }

    /// Placeholder recipe used when the provider text holds no usable JSON.
    ///
    /// Echoes what the caller asked for and keeps the provider text so the
    /// client can still show it.
    pub fn fallback(input: &GenerateRecipeInput, raw_response: String) -> Self {
        Self {
            title: "Custom Diabetes-Friendly Recipe".to_string(),
            description: "A personalized recipe created based on your preferences".to_string(),
            prep_time: "15 minutes".to_string(),
            cook_time: format!("{} minutes", input.cooking_time),
            servings: input.servings.to_string(),
            calories: format!("{} per serving", input.calories),
            carbs: "30g".to_string(),
            protein: "20g".to_string(),
            fat: "10g".to_string(),
            fiber: "8g".to_string(),
            glycemic_index: Some(GlycemicIndex::Low),
            ingredients: vec!["Please check the raw response for ingredients".to_string()],
            instructions: vec!["Please check the raw response for instructions".to_string()],
            nutrition_notes: vec![
                "Diabetes-friendly recipe".to_string(),
                "Balanced macronutrients".to_string(),
            ],
            raw_response: Some(raw_response),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.raw_response.is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{locale::Locale, recipe::value_objects::MealType};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn coerces_loosely_typed_provider_fields() {
        let recipe = GeneratedRecipe::from_json_object(object(json!({
            "title": "Veggie Bowl",
            "servings": 2,
            "calories": 400,
            "glycemicIndex": "low",
            "ingredients": ["chickpeas", "spinach"],
            "instructions": "Mix everything.",
            "rawResponse": "should not leak"
        })));

        assert_eq!(recipe.title, "Veggie Bowl");
        assert_eq!(recipe.servings, "2");
        assert_eq!(recipe.calories, "400");
        assert_eq!(recipe.glycemic_index, Some(GlycemicIndex::Low));
        assert_eq!(recipe.ingredients, vec!["chickpeas", "spinach"]);
        assert_eq!(recipe.instructions, vec!["Mix everything."]);
        assert!(recipe.nutrition_notes.is_empty());
        assert!(!recipe.is_fallback());
    }

    #[test]
    fn unknown_glycemic_label_is_dropped() {
        let recipe =
            GeneratedRecipe::from_json_object(object(json!({ "glycemicIndex": "unknown" })));
        assert_eq!(recipe.glycemic_index, None);
    }

    #[test]
    fn fallback_echoes_request_fields() {
        let input = GenerateRecipeInput {
            calories: 450,
            meal_type: MealType::Dinner,
            dietary_restrictions: vec![],
            preferences: None,
            cooking_time: 25,
            servings: 3,
            locale: Locale::En,
        };
        let recipe = GeneratedRecipe::fallback(&input, "garbled".to_string());

        assert_eq!(recipe.calories, "450 per serving");
        assert_eq!(recipe.cook_time, "25 minutes");
        assert_eq!(recipe.servings, "3");
        assert_eq!(recipe.raw_response.as_deref(), Some("garbled"));
        assert!(recipe.is_fallback());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let recipe = GeneratedRecipe {
            prep_time: "5 minutes".to_string(),
            glycemic_index: Some(GlycemicIndex::Medium),
            ..Default::default()
        };
        let value = serde_json::to_value(&recipe).unwrap();

        assert_eq!(value["prepTime"], "5 minutes");
        assert_eq!(value["glycemicIndex"], "Medium");
        assert!(value.get("rawResponse").is_none());
    }
}
