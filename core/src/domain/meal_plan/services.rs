use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    extraction::extract_json_object,
    llm::ports::LLMClient,
    meal_plan::{
        entities::GeneratedMealPlan, ports::MealPlanService,
        prompt::meal_plan_completion_request, value_objects::GenerateMealPlanInput,
    },
};

impl<RL, ML> MealPlanService for Service<RL, ML>
where
    RL: LLMClient,
    ML: LLMClient,
{
    async fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<GeneratedMealPlan, CoreError> {
        let request = meal_plan_completion_request(&input);
        let raw_response = self.meal_plan_llm.complete(request).await?;

        let meal_plan = extract_json_object(&raw_response)
            .map(GeneratedMealPlan::from_json_object)
            .map_err(|e| {
                error!("Failed to parse meal plan JSON: {}", e);
                CoreError::ParseError(e.to_string())
            })?;

        info!(
            days = input.days,
            planned_days = meal_plan.plan.len(),
            "Meal plan generated"
        );

        Ok(meal_plan)
    }
}
