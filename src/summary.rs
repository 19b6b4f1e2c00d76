//! Pure display math for the daily summary: bar percentages, labels, and
//! the all-goals-met check that drives the streak.

use crate::models::{DailyTotals, GoalSet, Nutrient};

/// Bar fill for one nutrient, clamped to at most 100.
///
/// A zero target counts as met and renders a full bar rather than dividing
/// by zero.
pub fn progress_percent(current: f64, goal: u32) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    ((current / goal as f64) * 100.0).min(100.0)
}

/// Text under a bar: rounded current amount over the target, gram-suffixed
/// for everything except calories.
pub fn progress_label(nutrient: Nutrient, current: f64, goal: u32) -> String {
    format!("{}/{}{}", current.round() as i64, goal, nutrient.unit())
}

/// Per-meal amount as shown in the results panel.
pub fn meal_amount_label(nutrient: Nutrient, amount: f64) -> String {
    format!("{}{}", amount.round() as i64, nutrient.unit())
}

/// True when every daily total has reached its target. Reaching the target
/// exactly counts.
pub fn all_goals_met(totals: &DailyTotals, goals: &GoalSet) -> bool {
    Nutrient::ALL
        .iter()
        .all(|&nutrient| totals.amount(nutrient) >= goals.target(nutrient) as f64)
}

pub fn streak_label(streak: u32) -> String {
    format!("Streak: {streak} days")
}

/// Parse a goal input field. Anything that is not a plain non-negative
/// integer becomes 0.
pub fn parse_goal_input(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(calories: f64, proteins: f64, carbs: f64, fats: f64) -> DailyTotals {
        DailyTotals {
            calories,
            proteins,
            carbs,
            fats,
            streak: 0,
        }
    }

    #[test]
    fn percent_scales_and_clamps() {
        assert_eq!(progress_percent(1000.0, 2000), 50.0);
        assert_eq!(progress_percent(100.0, 250), 40.0);
        assert_eq!(progress_percent(5000.0, 2000), 100.0);
    }

    #[test]
    fn percent_for_zero_goal_is_full() {
        assert_eq!(progress_percent(0.0, 0), 100.0);
        assert_eq!(progress_percent(35.0, 0), 100.0);
    }

    #[test]
    fn halfway_day_renders_expected_bars() {
        let goals = GoalSet::default();
        let today = totals(1000.0, 25.0, 100.0, 30.0);
        let percents: Vec<f64> = Nutrient::ALL
            .iter()
            .map(|&n| progress_percent(today.amount(n), goals.target(n)))
            .collect();
        assert_eq!(percents[0], 50.0);
        assert_eq!(percents[1], 50.0);
        assert_eq!(percents[2], 40.0);
        assert!((percents[3] - 100.0 * 30.0 / 70.0).abs() < 1e-9);
        assert!(!all_goals_met(&today, &goals));
    }

    #[test]
    fn labels_follow_unit_rule() {
        assert_eq!(progress_label(Nutrient::Calories, 950.4, 2000), "950/2000");
        assert_eq!(progress_label(Nutrient::Proteins, 25.0, 50), "25/50g");
        assert_eq!(progress_label(Nutrient::Fats, 30.6, 70), "31/70g");
        assert_eq!(meal_amount_label(Nutrient::Calories, 210.2), "210");
        assert_eq!(meal_amount_label(Nutrient::Carbs, 38.5), "39g");
    }

    #[test]
    fn met_when_every_total_reaches_its_target() {
        let goals = GoalSet::default();
        assert!(all_goals_met(&totals(2000.0, 50.0, 250.0, 70.0), &goals));
        assert!(all_goals_met(&totals(2400.0, 80.0, 300.0, 90.0), &goals));
        assert!(!all_goals_met(&totals(2400.0, 80.0, 300.0, 69.9), &goals));
    }

    #[test]
    fn zero_targets_count_as_met() {
        let goals = GoalSet {
            calories: 0,
            proteins: 0,
            carbs: 0,
            fats: 0,
        };
        assert!(all_goals_met(&totals(0.0, 0.0, 0.0, 0.0), &goals));
    }

    #[test]
    fn goal_input_parsing() {
        assert_eq!(parse_goal_input("1800"), 1800);
        assert_eq!(parse_goal_input(" 60 "), 60);
        assert_eq!(parse_goal_input(""), 0);
        assert_eq!(parse_goal_input("abc"), 0);
        assert_eq!(parse_goal_input("-5"), 0);
        assert_eq!(parse_goal_input("12.5"), 0);
    }

    #[test]
    fn streak_text() {
        assert_eq!(streak_label(4), "Streak: 4 days");
    }
}
