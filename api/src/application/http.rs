pub mod form_values;
pub mod health;
pub mod meal_plan;
pub mod recipe;
pub mod server;
