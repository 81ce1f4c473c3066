use std::sync::Arc;

use crate::domain::llm::ports::LLMClient;

/// Stateless generation service.
///
/// `RL` serves single recipes, `ML` serves multi-day meal plans. Both are
/// behind `Arc` so the service can be cloned into every request handler.
pub struct Service<RL, ML>
where
    RL: LLMClient,
    ML: LLMClient,
{
    pub(crate) recipe_llm: Arc<RL>,
    pub(crate) meal_plan_llm: Arc<ML>,
}

impl<RL, ML> Service<RL, ML>
where
    RL: LLMClient,
    ML: LLMClient,
{
    pub fn new(recipe_llm: RL, meal_plan_llm: ML) -> Self {
        Self {
            recipe_llm: Arc::new(recipe_llm),
            meal_plan_llm: Arc::new(meal_plan_llm),
        }
    }

    pub fn recipe_llm(&self) -> &RL {
        &self.recipe_llm
    }

    pub fn meal_plan_llm(&self) -> &ML {
        &self.meal_plan_llm
    }
}

impl<RL, ML> Clone for Service<RL, ML>
where
    RL: LLMClient,
    ML: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            recipe_llm: Arc::clone(&self.recipe_llm),
            meal_plan_llm: Arc::clone(&self.meal_plan_llm),
        }
    }
}
