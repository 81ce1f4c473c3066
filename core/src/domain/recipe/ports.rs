use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::GeneratedRecipe, value_objects::GenerateRecipeInput},
};

/// Service trait for single-recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Generates one recipe.
    ///
    /// Provider text that holds no recoverable JSON still yields a recipe: a
    /// fallback carrying the raw text. Only configuration, authentication and
    /// transport problems surface as errors.
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;
}
