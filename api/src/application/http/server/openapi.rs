use crate::application::http::{
    meal_plan::router::MealPlanApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DiaCare API",
        description = "Diabetes-friendly recipe and meal plan generation"
    ),
    nest(
        (path = "/api", api = RecipeApiDoc),
        (path = "/api", api = MealPlanApiDoc),
    )
)]
pub struct ApiDoc;
