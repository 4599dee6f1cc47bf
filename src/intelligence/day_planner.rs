// ABOUTME: Daily plan orchestration from a validated request to the complete nutrition plan
// ABOUTME: Runs energy, macro, timing, composition and hydration stages, then adds advisories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day Planner
//!
//! [`plan_day`] is the single entry point of the calculation pipeline:
//!
//! 1. Validate the [`PlanRequest`] at the boundary
//! 2. Energy model and macro target model
//! 3. Intra-workout carbohydrate and the out-of-training pool
//! 4. Meal pattern, per-meal macro split and food portions
//! 5. Hydration and electrolytes
//! 6. Advisories and the plain-language summary

use super::hydration::{plan_hydration, HydrationPlan};
use super::meal_composition::{suggest_meal_for_category, MealSuggestion};
use super::meal_timing::{
    carbs_during_training, carbs_outside_training, meal_pattern,
    split_protein_and_fat_across_meals,
};
use super::nutrition_calculator::{calculate_daily_nutrition_needs, EnergyBreakdown, MacroTargets};
use super::physiological_constants::{profile_limits, session_limits};
use crate::config::{MealPlanningConfig, PlannerConfig};
use fuelplan_core::errors::{AppError, AppResult};
use fuelplan_core::models::{
    AthleteProfile, EnvironmentalContext, MacroTotals, MealCategory, SessionWindow, TrainingDay,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Everything needed to plan one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Athlete profile
    pub profile: AthleteProfile,
    /// Training day
    pub training: TrainingDay,
    /// Intra-workout carbohydrate rate (g/h); the configured default applies when absent
    #[serde(default)]
    pub carbs_per_hour: Option<f64>,
    /// Session conditions
    #[serde(default)]
    pub environment: EnvironmentalContext,
}

impl PlanRequest {
    /// Request with default carb rate and environment
    #[must_use]
    pub fn new(profile: AthleteProfile, training: TrainingDay) -> Self {
        Self {
            profile,
            training,
            carbs_per_hour: None,
            environment: EnvironmentalContext::default(),
        }
    }

    /// Set the intra-workout carbohydrate rate
    #[must_use]
    pub fn with_carbs_per_hour(mut self, carbs_per_hour: f64) -> Self {
        self.carbs_per_hour = Some(carbs_per_hour);
        self
    }

    /// Set the session conditions
    #[must_use]
    pub fn with_environment(mut self, environment: EnvironmentalContext) -> Self {
        self.environment = environment;
        self
    }

    /// Carb rate in effect for this request
    #[must_use]
    pub fn effective_carbs_per_hour(&self, config: &MealPlanningConfig) -> f64 {
        self.carbs_per_hour.unwrap_or(config.default_carbs_per_hour)
    }

    /// Check every input against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self, config: &MealPlanningConfig) -> AppResult<()> {
        let profile = &self.profile;

        if !(profile_limits::MIN_AGE_YEARS..=profile_limits::MAX_AGE_YEARS).contains(&profile.age) {
            return Err(AppError::value_out_of_range(
                "age",
                f64::from(profile.age),
                f64::from(profile_limits::MIN_AGE_YEARS),
                f64::from(profile_limits::MAX_AGE_YEARS),
            ));
        }
        check_range(
            "weight_kg",
            profile.weight_kg,
            profile_limits::MIN_WEIGHT_KG,
            profile_limits::MAX_WEIGHT_KG,
        )?;
        check_range(
            "height_cm",
            profile.height_cm,
            profile_limits::MIN_HEIGHT_CM,
            profile_limits::MAX_HEIGHT_CM,
        )?;

        if self.training.duration_hours > session_limits::MAX_DURATION_HOURS {
            return Err(AppError::value_out_of_range(
                "duration_hours",
                f64::from(self.training.duration_hours),
                0.0,
                f64::from(session_limits::MAX_DURATION_HOURS),
            ));
        }
        if self.training.duration_minutes > session_limits::MAX_DURATION_MINUTES {
            return Err(AppError::value_out_of_range(
                "duration_minutes",
                f64::from(self.training.duration_minutes),
                0.0,
                f64::from(session_limits::MAX_DURATION_MINUTES),
            ));
        }

        // The rate only matters when the athlete actually trains
        if let Some(rate) = self.carbs_per_hour {
            if !self.training.training_type.is_rest() {
                check_range(
                    "carbs_per_hour",
                    rate,
                    config.min_carbs_per_hour,
                    config.max_carbs_per_hour,
                )?;
            }
        }

        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}

/// Carbohydrate split between the session and the meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarbTiming {
    /// Daily carbohydrate target (g)
    pub total_g: f64,
    /// Rate used during the session (g/h); `None` when there is no session
    pub carbs_per_hour: Option<f64>,
    /// Carbohydrate taken during the session (g)
    pub during_training_g: f64,
    /// Carbohydrate left for the meals (g)
    pub outside_training_g: f64,
}

/// One row of the meal plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealPlanEntry {
    /// Display label
    pub name: &'static str,
    /// Template category
    pub category: MealCategory,
    /// Advisory clock-time window
    pub time_hint: &'static str,
    /// Share of the out-of-training carbohydrate pool (0-1)
    pub carb_share: f64,
    /// Macro targets for the meal
    pub target: MacroTotals,
    /// Concrete plate
    pub suggestion: MealSuggestion,
}

/// Caution attached to a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Macro-derived kcal and the energy target disagree by more than the threshold
    KcalDiscrepancy {
        /// kcal implied by the macro targets
        macro_kcal: f64,
        /// Energy target
        target_kcal: f64,
        /// `macro_kcal - target_kcal`
        delta_kcal: f64,
    },
    /// Intra-workout rate is below the coaching threshold
    LowIntraWorkoutCarbs {
        /// Rate in use (g/h)
        carbs_per_hour: f64,
        /// Threshold (g/h)
        threshold: f64,
    },
}

impl Advisory {
    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::KcalDiscrepancy {
                macro_kcal,
                target_kcal,
                delta_kcal,
            } => format!(
                "Macro targets add up to {macro_kcal:.0} kcal, {:.0} kcal {} the {target_kcal:.0} kcal estimate. \
                 The targets are approximate; adjust portions to hunger, recovery and weight trend.",
                delta_kcal.abs(),
                if *delta_kcal > 0.0 { "above" } else { "below" }
            ),
            Self::LowIntraWorkoutCarbs { carbs_per_hour, .. } => format!(
                "{carbs_per_hour:.0} g/h may be low for moderate or long endurance sessions. \
                 If energy dips or recovery feels slow, try 40–60 g/h."
            ),
        }
    }
}

/// Complete plan for one day
#[derive(Debug, Clone, Serialize)]
pub struct DailyPlan {
    /// Echo of the athlete profile
    pub profile: AthleteProfile,
    /// Echo of the training day
    pub training: TrainingDay,
    /// Echo of the session conditions
    pub environment: EnvironmentalContext,
    /// Meal pattern bucket used
    pub session_window: SessionWindow,
    /// Energy model output
    pub energy: EnergyBreakdown,
    /// Macro model output
    pub macros: MacroTargets,
    /// `macros.macro_kcal - energy.target_kcal`, reported, never corrected
    pub macro_kcal_delta: f64,
    /// Carbohydrate timing
    pub carbs: CarbTiming,
    /// Meals in pattern order
    pub meals: Vec<MealPlanEntry>,
    /// Session hydration; absent without a session
    pub hydration: Option<HydrationPlan>,
    /// Cautions
    pub advisories: Vec<Advisory>,
    /// Plain-language recap
    pub summary: Vec<String>,
}

/// Plan one day
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the request fails validation. The
/// calculation itself cannot fail.
pub fn plan_day(request: &PlanRequest, config: &PlannerConfig) -> AppResult<DailyPlan> {
    request.validate(&config.meal_planning)?;

    let profile = &request.profile;
    let training = &request.training;

    // Step 1: energy and macro targets
    let needs = calculate_daily_nutrition_needs(profile, training, &config.nutrition);
    debug!(
        bmr = needs.energy.bmr,
        target_kcal = needs.energy.target_kcal,
        macro_kcal = needs.macros.macro_kcal,
        "computed energy and macro targets"
    );

    // Step 2: carbohydrate timing
    let carbs = carb_timing(request, needs.macros.totals.carbs_g, &config.meal_planning);
    debug!(
        during_g = carbs.during_training_g,
        outside_g = carbs.outside_training_g,
        "split carbohydrate around the session"
    );

    // Step 3: meals
    let session_window = training.session_window();
    let meals = build_meals(
        session_window,
        carbs.outside_training_g,
        &needs.macros.totals,
        &config.meal_planning,
    );
    debug!(window = ?session_window, meals = meals.len(), "distributed macros across meals");

    // Step 4: hydration
    let hydration = plan_hydration(training, &request.environment, &config.hydration);

    // Step 5: advisories and summary
    let advisories = collect_advisories(
        needs.macros.macro_kcal,
        needs.energy.target_kcal,
        &carbs,
        request,
        config,
    );
    for advisory in &advisories {
        warn!(advisory = ?advisory, "{}", advisory.message());
    }

    let summary = build_summary(request, &needs.energy, &needs.macros, &carbs);

    info!(
        training_type = %training.training_type,
        target_kcal = needs.energy.target_kcal.round(),
        carbs_g = needs.macros.totals.carbs_g.round(),
        advisories = advisories.len(),
        "daily plan ready"
    );

    Ok(DailyPlan {
        profile: profile.clone(),
        training: training.clone(),
        environment: request.environment,
        session_window,
        energy: needs.energy,
        macros: needs.macros,
        macro_kcal_delta: needs.macro_kcal_delta,
        carbs,
        meals,
        hydration,
        advisories,
        summary,
    })
}

fn carb_timing(request: &PlanRequest, total_g: f64, config: &MealPlanningConfig) -> CarbTiming {
    let carbs_per_hour = request
        .training
        .has_session()
        .then(|| request.effective_carbs_per_hour(config));
    let during_training_g =
        carbs_per_hour.map_or(0.0, |rate| carbs_during_training(&request.training, rate));

    CarbTiming {
        total_g,
        carbs_per_hour,
        during_training_g,
        outside_training_g: carbs_outside_training(total_g, during_training_g),
    }
}

fn build_meals(
    window: SessionWindow,
    outside_training_g: f64,
    totals: &MacroTotals,
    config: &MealPlanningConfig,
) -> Vec<MealPlanEntry> {
    let pattern = meal_pattern(window);
    let split =
        split_protein_and_fat_across_meals(totals.protein_g, totals.fat_g, pattern, config);
    let protein_per_meal_g = split.protein_per_meal_g;

    pattern
        .iter()
        .zip(split.fat_per_meal_g)
        .map(|(slot, fat_g)| {
            let target = MacroTotals {
                carbs_g: outside_training_g * slot.carb_share,
                protein_g: protein_per_meal_g,
                fat_g,
            };
            MealPlanEntry {
                name: slot.name,
                category: slot.category,
                time_hint: slot.time_hint,
                carb_share: slot.carb_share,
                target,
                suggestion: suggest_meal_for_category(slot.category, target, config),
            }
        })
        .collect()
}

fn collect_advisories(
    macro_kcal: f64,
    target_kcal: f64,
    carbs: &CarbTiming,
    request: &PlanRequest,
    config: &PlannerConfig,
) -> Vec<Advisory> {
    let thresholds = &config.nutrition.advisories;
    let mut advisories = Vec::new();

    let delta_kcal = macro_kcal - target_kcal;
    if delta_kcal.abs() > thresholds.kcal_discrepancy_threshold {
        advisories.push(Advisory::KcalDiscrepancy {
            macro_kcal,
            target_kcal,
            delta_kcal,
        });
    }

    if !request.training.training_type.is_rest() {
        if let Some(rate) = carbs.carbs_per_hour {
            if rate < thresholds.low_intra_carbs_per_hour {
                advisories.push(Advisory::LowIntraWorkoutCarbs {
                    carbs_per_hour: rate,
                    threshold: thresholds.low_intra_carbs_per_hour,
                });
            }
        }
    }

    advisories
}

fn build_summary(
    request: &PlanRequest,
    energy: &EnergyBreakdown,
    macros: &MacroTargets,
    carbs: &CarbTiming,
) -> Vec<String> {
    let profile = &request.profile;
    let training = &request.training;
    let mut lines = Vec::with_capacity(7);

    lines.push(format!(
        "Today: {}, {} years, {:.1} kg, {:.0} cm.",
        profile.sex, profile.age, profile.weight_kg, profile.height_cm
    ));

    if training.has_session() {
        lines.push(format!(
            "Training: {}, {:.2} h, {} importance, {}.",
            training.training_type,
            training.duration_in_hours(),
            training.importance,
            training.training_time
        ));
    } else {
        lines.push("Training: none planned today.".to_owned());
    }

    lines.push(format!("Goal: {}.", profile.goal));
    lines.push(format!(
        "Estimated target for the day: {:.0} kcal.",
        energy.target_kcal
    ));
    lines.push(format!(
        "Macro targets: {:.0} g carbohydrate, {:.0} g protein, {:.0} g fat.",
        macros.totals.carbs_g, macros.totals.protein_g, macros.totals.fat_g
    ));

    match carbs.carbs_per_hour {
        Some(rate) if carbs.during_training_g > 0.0 => lines.push(format!(
            "During training: {rate:.0} g/h of carbohydrate for {:.2} h, {:.0} g in total.",
            training.duration_in_hours(),
            carbs.during_training_g
        )),
        _ => lines.push("No specific carbohydrate intake during training today.".to_owned()),
    }

    lines.push(
        "The remaining carbohydrate is spread across the meals, favouring those closest to the \
         session while keeping enough at the other meals of the day."
            .to_owned(),
    );

    lines
}
