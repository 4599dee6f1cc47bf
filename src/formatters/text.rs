// ABOUTME: Human-readable text rendering of daily plans, single meals and the food table
// ABOUTME: Display wrappers that also serialize transparently for JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::day_planner::{DailyPlan, MealPlanEntry};
use crate::intelligence::food_reference::MealTemplate;
use crate::intelligence::hydration::HydrationPlan;
use crate::intelligence::meal_composition::MealSuggestion;
use fuelplan_core::models::{FoodItem, TrainingTime};
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 72;

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))
}

/// Text report for a [`DailyPlan`]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct PlanReport<'a>(pub &'a DailyPlan);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "DAILY NUTRITION PLAN")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        let energy = &plan.energy;
        heading(f, "Energy")?;
        writeln!(f, "  BMR (Mifflin-St Jeor)   {:>6.0} kcal", energy.bmr)?;
        writeln!(f, "  Activity factor         {:>6.2} x", energy.activity_factor)?;
        writeln!(f, "  Base TDEE               {:>6.0} kcal", energy.base_tdee)?;
        writeln!(f, "  Training                {:>6.0} kcal", energy.training_kcal)?;
        writeln!(f, "  Day TDEE                {:>6.0} kcal", energy.day_tdee)?;
        writeln!(f, "  Goal adjustment         {:>+6.0} kcal", energy.goal_delta_kcal)?;
        writeln!(f, "  Target                  {:>6.0} kcal", energy.target_kcal)?;

        let macros = &plan.macros;
        heading(f, "Macros")?;
        writeln!(
            f,
            "  Carbohydrate  {:>5.0} g  ({:.1} g/kg, {:.0}%)",
            macros.totals.carbs_g, macros.carbs_g_per_kg, macros.percentages.carbs_percent
        )?;
        writeln!(
            f,
            "  Protein       {:>5.0} g  ({:.1} g/kg, {:.0}%)",
            macros.totals.protein_g, macros.protein_g_per_kg, macros.percentages.protein_percent
        )?;
        writeln!(
            f,
            "  Fat           {:>5.0} g  ({:.1} g/kg, {:.0}%)",
            macros.totals.fat_g, macros.fat_g_per_kg, macros.percentages.fat_percent
        )?;
        writeln!(
            f,
            "  From macros   {:>5.0} kcal ({:+.0} kcal vs target)",
            macros.macro_kcal, plan.macro_kcal_delta
        )?;

        let carbs = &plan.carbs;
        heading(f, "Carbohydrate timing")?;
        writeln!(f, "  Total for the day       {:>6.0} g", carbs.total_g)?;
        match carbs.carbs_per_hour {
            Some(rate) => writeln!(
                f,
                "  During training         {:>6.0} g ({rate:.0} g/h)",
                carbs.during_training_g
            )?,
            None => writeln!(
                f,
                "  During training         no session planned: no intra-workout carbohydrate"
            )?,
        }
        writeln!(f, "  Outside training        {:>6.0} g", carbs.outside_training_g)?;

        heading(f, "Meals")?;
        writeln!(
            f,
            "  {:<26} {:>6} {:>7} {:>7} {:>7}",
            "Meal", "Share", "CHO g", "PRO g", "FAT g"
        )?;
        for meal in &plan.meals {
            write_meal_row(f, meal)?;
        }

        heading(f, "Meal suggestions")?;
        for meal in &plan.meals {
            writeln!(f, "  {} ({})", meal.name, meal.time_hint)?;
            write_suggestion(f, &meal.suggestion)?;
        }

        heading(f, "Hydration & electrolytes")?;
        match &plan.hydration {
            Some(hydration) => write_hydration(f, hydration)?,
            None => writeln!(
                f,
                "  No session planned: no specific hydration or sodium recommendation."
            )?,
        }

        if !plan.advisories.is_empty() {
            heading(f, "Notes")?;
            for advisory in &plan.advisories {
                writeln!(f, "  ! {}", advisory.message())?;
            }
        }

        heading(f, "Summary")?;
        for line in &plan.summary {
            writeln!(f, "  - {line}")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "General estimates based on sports-nutrition guidelines. Adjust to how you feel, \
             your digestion and advice from your doctor or dietitian."
        )
    }
}

fn write_meal_row(f: &mut fmt::Formatter<'_>, meal: &MealPlanEntry) -> fmt::Result {
    writeln!(
        f,
        "  {:<26} {:>5.0}% {:>7.0} {:>7.0} {:>7.0}",
        meal.name,
        meal.carb_share * 100.0,
        meal.target.carbs_g,
        meal.target.protein_g,
        meal.target.fat_g
    )
}

fn write_suggestion(f: &mut fmt::Formatter<'_>, suggestion: &MealSuggestion) -> fmt::Result {
    for portion in &suggestion.portions {
        writeln!(f, "    - {:.0} g {}", portion.grams, portion.food)?;
    }
    writeln!(
        f,
        "    estimated {:.0} g CHO / {:.0} g PRO / {:.0} g FAT (target {:.0} / {:.0} / {:.0})",
        suggestion.realized.carbs_g,
        suggestion.realized.protein_g,
        suggestion.realized.fat_g,
        suggestion.target.carbs_g,
        suggestion.target.protein_g,
        suggestion.target.fat_g
    )
}

fn write_hydration(f: &mut fmt::Formatter<'_>, hydration: &HydrationPlan) -> fmt::Result {
    writeln!(f, "  Duration                {:>6.2} h", hydration.duration_hours)?;
    writeln!(
        f,
        "  Fluid                   {:>6.2} L/h, {:.2} L total",
        hydration.liters_per_hour, hydration.total_liters
    )?;
    writeln!(
        f,
        "  Sodium                  {:>6.0} mg/h, {:.0} mg total",
        hydration.sodium_mg_per_hour, hydration.total_sodium_mg
    )?;
    writeln!(
        f,
        "  In practice: about {:.1} bottles of {:.0} ml and {:.1} tablets of {:.0} mg sodium.",
        hydration.bottles,
        hydration.bottle_liters * 1000.0,
        hydration.sodium_tablets,
        hydration.sodium_tablet_mg
    )
}

/// Text report for one composed meal
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MealReport<'a> {
    /// Meal name as given
    pub meal: &'a str,
    /// Composed plate
    pub suggestion: &'a MealSuggestion,
    /// Session time the meal was planned around, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_time: Option<TrainingTime>,
}

impl fmt::Display for MealReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} template, portions x{:.2})",
            self.meal, self.suggestion.category, self.suggestion.scale_factor
        )?;
        if let Some(time) = self.training_time {
            writeln!(f, "  planned around a {time} session")?;
        }
        write_suggestion(f, self.suggestion)
    }
}

/// Text table of reference foods
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct FoodTable<'a>(pub &'a [FoodItem]);

impl fmt::Display for FoodTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<28} {:>8} {:>8} {:>8}   (per 100 g)",
            "Food", "CHO g", "PRO g", "FAT g"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for item in self.0 {
            writeln!(
                f,
                "{:<28} {:>8.1} {:>8.1} {:>8.1}",
                item.name, item.carbs_per_100g, item.protein_per_100g, item.fat_per_100g
            )?;
        }
        Ok(())
    }
}

/// Text listing of the base meal templates
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TemplateTable(pub Vec<MealTemplate>);

impl fmt::Display for TemplateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for template in &self.0 {
            let base = template.base_macros();
            writeln!(f, "{}", template.category)?;
            for portion in template.portions {
                writeln!(f, "  - {:>5.0} g {}", portion.grams, portion.food)?;
            }
            writeln!(
                f,
                "  base {:.0} g CHO / {:.0} g PRO / {:.0} g FAT",
                base.carbs_g, base.protein_g, base.fat_g
            )?;
        }
        Ok(())
    }
}
