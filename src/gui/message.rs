use std::path::PathBuf;

use crate::api::{AnalysisOutcome, ApiError};
use crate::gui::app::SelectedPhoto;
use crate::models::{DailyTotals, GoalSet, Nutrient};

#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    GoalsLoaded(GoalSet),

    // Goal editing
    GoalInputChanged(Nutrient, String),
    GoalInputCommitted(Nutrient),
    GoalsSaved(Result<(), String>),

    // Daily summary
    StatsFetched(Result<DailyTotals, ApiError>),
    StreakAdvanced(Result<u32, ApiError>),

    // Photo acquisition
    PickPhoto,
    PhotoChosen(Option<PathBuf>),
    PhotoHovered,
    HoverLeft,
    PhotoDropped(PathBuf),
    PhotoRead(Result<SelectedPhoto, String>),

    // Analysis
    FoodNameChanged(String),
    FoodQuantityChanged(String),
    AnalyzePressed,
    AnalysisFinished(Result<AnalysisOutcome, ApiError>),
    AlertDismissed,

    // Day controls
    ResetDayPressed,
    DayReset(Result<(), ApiError>),
    ToggleDarkMode,
}
