use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::GeneratedMealPlan, value_objects::GenerateMealPlanInput},
};

/// Service trait for multi-day meal plan generation
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    /// Generates a meal plan. Unlike recipes there is no fallback: provider
    /// text without recoverable JSON fails with [`CoreError::ParseError`].
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<GeneratedMealPlan, CoreError>> + Send;
}
