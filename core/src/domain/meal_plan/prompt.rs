use crate::domain::{
    llm::{
        CompletionRequest,
        prompt::{language_instruction, list_or_none, text_or_none},
    },
    meal_plan::value_objects::GenerateMealPlanInput,
};

pub const MEAL_PLAN_SYSTEM_INSTRUCTION: &str = "You are a professional nutritionist specializing in diabetes meal planning. Always respond with valid JSON format.";
pub const MEAL_PLAN_TEMPERATURE: f32 = 0.7;
pub const MEAL_PLAN_MAX_OUTPUT_TOKENS: u32 = 4000;

pub fn build_meal_plan_prompt(input: &GenerateMealPlanInput) -> String {
    let mut prompt = format!(
        r#"Create a {days}-day diabetes-friendly meal plan with the following requirements:
- Daily calorie target: {daily_calories} calories
- Dietary restrictions: {restrictions}
- Additional preferences: {preferences}

Please provide a detailed meal plan in JSON format with the following structure:
{{
  "totalDays": {days},
  "dailyCalories": "{daily_calories}",
  "plan": [
    {{
      "day": 1,
      "date": "Day 1",
      "meals": {{
        "breakfast": {{
          "name": "Recipe name",
          "calories": 300,
          "carbs": "25g",
          "protein": "15g",
          "description": "Brief description"
        }},
        "lunch": {{ ... }},
        "dinner": {{ ... }},
        "snack": {{ ... }}
      }},
      "totalCalories": 1500,
      "notes": "Any special notes for the day"
    }},
    ...
  ],
  "shoppingList": ["ingredient 1", "ingredient 2", ...],
  "nutritionSummary": {{
    "avgDailyCalories": 1500,
    "avgCarbs": "150g",
    "avgProtein": "80g",
    "avgFiber": "30g"
  }}
}}

Focus on variety, balanced nutrition, and diabetes-friendly ingredients with low glycemic index."#,
        days = input.days,
        daily_calories = input.daily_calories,
        restrictions = list_or_none(&input.dietary_restrictions),
        preferences = text_or_none(input.preferences.as_deref()),
    );

    if let Some(instruction) = language_instruction(input.locale) {
        prompt.push_str("\n\n");
        prompt.push_str(&instruction);
    }

    prompt
}

pub fn meal_plan_completion_request(input: &GenerateMealPlanInput) -> CompletionRequest {
    CompletionRequest {
        system_instruction: MEAL_PLAN_SYSTEM_INSTRUCTION.to_string(),
        prompt: build_meal_plan_prompt(input),
        temperature: MEAL_PLAN_TEMPERATURE,
        max_output_tokens: MEAL_PLAN_MAX_OUTPUT_TOKENS,
        json_output: false,
    }
}
