pub mod common;
pub mod extraction;
pub mod llm;
pub mod locale;
pub mod meal_plan;
pub mod recipe;
