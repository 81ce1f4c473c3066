use crate::domain::{
    llm::{
        CompletionRequest,
        prompt::{language_instruction, list_or_none, text_or_none},
    },
    recipe::value_objects::GenerateRecipeInput,
};

pub const RECIPE_SYSTEM_INSTRUCTION: &str = "You are a professional nutritionist and chef specializing in diabetes-friendly recipes. Always respond with valid JSON format only, no additional text.";
pub const RECIPE_TEMPERATURE: f32 = 0.7;
pub const RECIPE_MAX_OUTPUT_TOKENS: u32 = 2000;

pub fn build_recipe_prompt(input: &GenerateRecipeInput) -> String {
    let mut prompt = format!(
        r#"Create a diabetes-friendly {meal_type} recipe with the following requirements:
- Target calories: {calories} per serving
- Servings: {servings}
- Maximum cooking time: {cooking_time} minutes
- Dietary restrictions: {restrictions}
- Additional preferences: {preferences}

Please provide a detailed recipe in JSON format with the following structure:
{{
  "title": "Recipe name",
  "description": "Brief description",
  "prepTime": "X minutes",
  "cookTime": "X minutes",
  "servings": "{servings}",
  "calories": "X per serving",
  "carbs": "Xg",
  "protein": "Xg",
  "fat": "Xg",
  "fiber": "Xg",
  "glycemicIndex": "Low/Medium/High",
  "ingredients": ["ingredient 1", "ingredient 2", ...],
  "instructions": ["step 1", "step 2", ...],
  "nutritionNotes": ["benefit 1", "benefit 2", ...]
}}

Focus on diabetes-friendly ingredients with low glycemic index, high fiber, and balanced macronutrients."#,
        meal_type = input.meal_type,
        calories = input.calories,
        servings = input.servings,
        cooking_time = input.cooking_time,
        restrictions = list_or_none(&input.dietary_restrictions),
        preferences = text_or_none(input.preferences.as_deref()),
    );

    if let Some(instruction) = language_instruction(input.locale) {
        prompt.push_str("\n\n");
        prompt.push_str(&instruction);
    }

    prompt
}

pub fn recipe_completion_request(input: &GenerateRecipeInput) -> CompletionRequest {
    CompletionRequest {
        system_instruction: RECIPE_SYSTEM_INSTRUCTION.to_string(),
        prompt: build_recipe_prompt(input),
        temperature: RECIPE_TEMPERATURE,
        max_output_tokens: RECIPE_MAX_OUTPUT_TOKENS,
        json_output: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{locale::Locale, recipe::value_objects::MealType};

    fn lunch_request() -> GenerateRecipeInput {
        GenerateRecipeInput {
            calories: 400,
            meal_type: MealType::Lunch,
            dietary_restrictions: vec!["vegetarian".to_string()],
            preferences: None,
            cooking_time: 20,
            servings: 2,
            locale: Locale::En,
        }
    }

    #[test]
    fn prompt_embeds_every_request_field() {
        let prompt = build_recipe_prompt(&lunch_request());

        assert!(prompt.starts_with("Create a diabetes-friendly lunch recipe"));
        assert!(prompt.contains("- Target calories: 400 per serving"));
        assert!(prompt.contains("- Servings: 2"));
        assert!(prompt.contains("- Maximum cooking time: 20 minutes"));
        assert!(prompt.contains("- Dietary restrictions: vegetarian"));
        assert!(prompt.contains("- Additional preferences: None"));
        assert!(prompt.contains("\"servings\": \"2\""));
        assert!(prompt.contains("\"nutritionNotes\""));
    }

    #[test]
    fn english_prompt_has_no_language_line() {
        assert!(!build_recipe_prompt(&lunch_request()).contains("human-readable"));
    }

    #[test]
    fn localized_prompt_requests_language() {
        let input = GenerateRecipeInput {
            locale: Locale::Fr,
            ..lunch_request()
        };
        assert!(build_recipe_prompt(&input).ends_with(
            "Write every human-readable text value in French. Keep all JSON keys exactly as shown in English."
        ));
    }

    #[test]
    fn completion_request_uses_recipe_sampling() {
        let request = recipe_completion_request(&lunch_request());
        assert_eq!(request.max_output_tokens, 2000);
        assert!(request.json_output);
        assert!(request.system_instruction.contains("diabetes-friendly recipes"));
    }
}
