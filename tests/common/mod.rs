mod fixtures;
mod server;

pub use fixtures::*;
pub use server::*;

// Re-export commonly used types from platelog for tests
pub use platelog::{ApiError, DailyTotals, GoalSet, MealPhoto, Nutrient, NutritionApi};
