// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-meal composition command for the fuelplan CLI
// ABOUTME: Classifies a free-text meal name and scales its template to the carb target

use crate::helpers::display::emit;
use clap::Args;
use fuelplan::config::PlannerConfig;
use fuelplan::errors::{AppError, AppResult};
use fuelplan::formatters::MealReport;
use fuelplan::intelligence::suggest_meal;
use fuelplan::models::{MacroTotals, TrainingTime};

/// Flags for `fuelplan meal`
#[derive(Debug, Args)]
pub struct MealArgs {
    /// Meal name, e.g. "Breakfast" or "Pre-training snack"
    #[arg(long)]
    name: String,

    /// Carbohydrate target (g)
    #[arg(long)]
    carbs: f64,

    /// Protein target (g)
    #[arg(long, default_value_t = 0.0)]
    protein: f64,

    /// Fat target (g)
    #[arg(long, default_value_t = 0.0)]
    fat: f64,

    /// Session time of day the meal is planned around
    #[arg(long)]
    time: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn non_negative(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!("{field} must be a non-negative number of grams"))
            .with_field(field))
    }
}

/// Compose the meal and print it
pub fn run(args: &MealArgs) -> AppResult<()> {
    let target = MacroTotals {
        carbs_g: non_negative("carbs", args.carbs)?,
        protein_g: non_negative("protein", args.protein)?,
        fat_g: non_negative("fat", args.fat)?,
    };
    let training_time = args
        .time
        .as_deref()
        .map(str::parse::<TrainingTime>)
        .transpose()?;
    let suggestion = suggest_meal(&args.name, target, &PlannerConfig::global().meal_planning);

    emit(
        &MealReport {
            meal: &args.name,
            suggestion: &suggestion,
            training_time,
        },
        &args.format,
    )
}
