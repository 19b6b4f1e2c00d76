use std::fmt;

use serde::{Deserialize, Serialize};

/// The four tracked nutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Proteins,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Proteins,
        Nutrient::Carbs,
        Nutrient::Fats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Proteins => "Proteins",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fats => "Fats",
        }
    }

    /// Wire/key spelling, as used in payloads and the goals file.
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Proteins => "proteins",
            Nutrient::Carbs => "carbs",
            Nutrient::Fats => "fats",
        }
    }

    pub fn from_key(key: &str) -> Option<Nutrient> {
        Nutrient::ALL.iter().copied().find(|n| n.key() == key)
    }

    /// Display unit suffix. Calories are unitless, the rest are grams.
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Daily targets for each nutrient, as configured by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSet {
    pub calories: u32,
    pub proteins: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl Default for GoalSet {
    fn default() -> Self {
        GoalSet {
            calories: 2000,
            proteins: 50,
            carbs: 250,
            fats: 70,
        }
    }
}

impl GoalSet {
    pub fn target(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }

    pub fn set_target(&mut self, nutrient: Nutrient, value: u32) {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Proteins => self.proteins = value,
            Nutrient::Carbs => self.carbs = value,
            Nutrient::Fats => self.fats = value,
        }
    }
}

/// Nutrient estimate for a single analyzed photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Meal name echoed back by the server, when one was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MealAnalysis {
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }
}

/// Running nutrient sums for the current day plus the streak counter.
/// Owned by the server; the client only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub streak: u32,
}

impl DailyTotals {
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }
}

/// Response body of the upload/analyze endpoint.
///
/// Older servers name the per-meal payload `current_meal`; both spellings
/// are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default, alias = "current_meal")]
    pub data: Option<MealAnalysis>,
    #[serde(default)]
    pub daily_total: Option<DailyTotals>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreakResponse {
    pub streak: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}
