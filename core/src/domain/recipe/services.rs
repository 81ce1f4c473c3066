use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    extraction::extract_json_object,
    llm::ports::LLMClient,
    recipe::{
        entities::GeneratedRecipe, ports::RecipeService, prompt::recipe_completion_request,
        value_objects::GenerateRecipeInput,
    },
};

impl<RL, ML> RecipeService for Service<RL, ML>
where
    RL: LLMClient,
    ML: LLMClient,
{
    async fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        // 1. Refuse before any network call when no key is configured
        if !self.recipe_llm.has_credentials() {
            return Err(CoreError::MissingCredentials {
                provider: self.recipe_llm.provider_name(),
            });
        }

        // 2. Render prompt and call the provider once
        let request = recipe_completion_request(&input);
        let raw_response = self.recipe_llm.complete(request).await?;

        // 3. Recover JSON, degrading to a placeholder recipe
        let recipe = match extract_json_object(&raw_response) {
            Ok(object) => GeneratedRecipe::from_json_object(object),
            Err(e) => {
                warn!("Failed to parse recipe JSON, returning fallback: {}", e);
                GeneratedRecipe::fallback(&input, raw_response)
            }
        };

        info!(
            meal_type = %input.meal_type,
            fallback = recipe.is_fallback(),
            "Recipe generated"
        );

        Ok(recipe)
    }
}
