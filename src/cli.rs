//! Headless subcommand handlers.
//!
//! These drive the same client code the window uses, so goal math and
//! server behavior stay identical between the two front ends.

use std::path::Path;

use anyhow::{Context, bail};

use crate::api::{MealPhoto, NutritionApi};
use crate::goals::GoalStore;
use crate::models::{DailyTotals, GoalSet, Nutrient};
use crate::summary;

/// Submit one photo for analysis and print the estimate plus today's totals.
pub async fn run_analyze(
    api: &NutritionApi,
    store: &GoalStore,
    image_path: &Path,
    food_name: Option<String>,
    food_quantity: Option<String>,
) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(image_path)
        .await
        .with_context(|| format!("failed to read {}", image_path.display()))?;
    if image::guess_format(&bytes).is_err() {
        bail!("{} does not look like an image", image_path.display());
    }

    let file_name = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("meal")
        .to_string();
    let mut photo = MealPhoto::new(file_name, bytes);
    photo.food_name = food_name;
    photo.food_quantity = food_quantity;

    let outcome = api.upload_meal_photo(photo).await?;

    println!("=== Meal Analysis ===");
    if let Some(name) = &outcome.meal.name {
        println!("Meal: {name}");
    }
    for nutrient in Nutrient::ALL {
        println!(
            "  {:<10} {}",
            nutrient.label(),
            summary::meal_amount_label(nutrient, outcome.meal.amount(nutrient)),
        );
    }

    let goals = store.load().await;
    let totals = match outcome.daily_total {
        Some(totals) => totals,
        None => api.daily_stats().await?,
    };
    print_summary(&totals, &goals);
    Ok(())
}

/// Print the daily summary. Hitting every goal advances the streak, the
/// same as rendering the summary in the window does.
pub async fn run_stats(api: &NutritionApi, store: &GoalStore) -> anyhow::Result<()> {
    let goals = store.load().await;
    let mut totals = api.daily_stats().await?;
    if summary::all_goals_met(&totals, &goals) {
        totals.streak = api.advance_streak().await?;
    }
    print_summary(&totals, &goals);
    Ok(())
}

/// Show the stored goal set, applying any `NUTRIENT=VALUE` updates first.
pub async fn run_goals(store: &GoalStore, updates: &[String]) -> anyhow::Result<()> {
    let mut goals = store.load().await;
    if !updates.is_empty() {
        for update in updates {
            let (key, value) = update
                .split_once('=')
                .with_context(|| format!("expected NUTRIENT=VALUE, got '{update}'"))?;
            let nutrient = Nutrient::from_key(key.trim())
                .with_context(|| format!("unknown nutrient '{}'", key.trim()))?;
            goals.set_target(nutrient, summary::parse_goal_input(value));
        }
        store.save(goals).await?;
    }

    println!("=== Daily Goals ===");
    for nutrient in Nutrient::ALL {
        println!(
            "  {:<10} {}{}",
            nutrient.label(),
            goals.target(nutrient),
            nutrient.unit(),
        );
    }
    println!();
    println!("Stored at {}", store.path().display());
    Ok(())
}

/// Clear today's totals on the server.
pub async fn run_reset(api: &NutritionApi) -> anyhow::Result<()> {
    api.reset_day().await?;
    println!("Daily totals reset.");
    Ok(())
}

fn print_summary(totals: &DailyTotals, goals: &GoalSet) {
    println!();
    println!("=== Daily Summary ===");
    println!("{}", summary::streak_label(totals.streak));
    for nutrient in Nutrient::ALL {
        let current = totals.amount(nutrient);
        let goal = goals.target(nutrient);
        println!(
            "  {:<10} {:>12}  {:5.1}%",
            nutrient.label(),
            summary::progress_label(nutrient, current, goal),
            summary::progress_percent(current, goal),
        );
    }
}
