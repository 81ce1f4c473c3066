use crate::domain::locale::Locale;

pub const DEFAULT_PLAN_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateMealPlanInput {
    pub daily_calories: u32,
    pub dietary_restrictions: Vec<String>,
    pub preferences: Option<String>,
    pub days: u32,
    pub locale: Locale,
}
