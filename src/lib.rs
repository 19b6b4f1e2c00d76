pub mod api;
pub mod cli;
pub mod goals;
pub mod models;
pub mod summary;

pub use api::{AnalysisOutcome, ApiError, MealPhoto, NutritionApi};
pub use goals::GoalStore;
pub use models::{DailyTotals, GoalSet, MealAnalysis, Nutrient};

#[cfg(feature = "gui")]
pub mod gui;
