// ABOUTME: Energy and macronutrient target calculations using published sports-nutrition formulas
// ABOUTME: BMR, activity factor, MET training cost, goal delta and tiered g/kg macro heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Energy model and macro target model for one athlete and one training day.
//! Every function is pure and total: enumerations are closed, and unknown
//! labels were already mapped to their fallback by the lossy parsers.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>
//!
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CarbRangesConfig, GoalValuesConfig, NutritionConfig,
    TrainingMetConfig,
};
use fuelplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use fuelplan_core::models::{
    ActivityLevel, AthleteProfile, BodyGoal, MacroTotals, SessionImportance, Sex, TrainingDay,
    TrainingType,
};
use serde::{Deserialize, Serialize};

/// Energy side of the plan, kcal/day unless noted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Multiplier for non-sport daily activity
    pub activity_factor: f64,
    /// BMR x activity factor
    pub base_tdee: f64,
    /// MET-based cost of the session
    pub training_kcal: f64,
    /// Base TDEE + training
    pub day_tdee: f64,
    /// Goal adjustment (negative for a deficit)
    pub goal_delta_kcal: f64,
    /// Day TDEE + goal adjustment
    pub target_kcal: f64,
}

/// Macronutrient percentage breakdown of macro-derived kcal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Daily macro targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Carbohydrate g/kg
    pub carbs_g_per_kg: f64,
    /// Protein g/kg
    pub protein_g_per_kg: f64,
    /// Fat g/kg
    pub fat_g_per_kg: f64,
    /// Daily grams
    pub totals: MacroTotals,
    /// kcal implied by the gram targets (4/4/9)
    pub macro_kcal: f64,
    /// Share of `macro_kcal` per macro
    pub percentages: MacroPercentages,
}

/// Energy and macro targets together, with the unreconciled gap between them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyNutritionNeeds {
    /// Energy model output
    pub energy: EnergyBreakdown,
    /// Macro model output
    pub macros: MacroTargets,
    /// `macros.macro_kcal - energy.target_kcal`
    pub macro_kcal_delta: f64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + sex_constant
}

/// Daily activity multiplier applied to BMR
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Energy cost of the session: MET x weight(kg) x duration(h)
///
/// Rest and unrecognized types cost nothing.
#[must_use]
pub fn calculate_training_energy_cost(
    weight_kg: f64,
    duration_hours: f64,
    training_type: TrainingType,
    config: &TrainingMetConfig,
) -> f64 {
    config.met_for(training_type) * weight_kg * duration_hours
}

/// Carbohydrate target in g/kg
///
/// Importance picks a point in the type's range (low bound, midpoint, high
/// bound); the goal then nudges it by `goal_adjustment` without leaving the
/// range.
#[must_use]
pub fn carb_grams_per_kg(
    training_type: TrainingType,
    importance: SessionImportance,
    goal: BodyGoal,
    config: &CarbRangesConfig,
) -> f64 {
    let range = config.range_for(training_type);

    let base = match importance {
        SessionImportance::Low => range.min,
        SessionImportance::Medium => range.midpoint(),
        SessionImportance::High => range.max,
    };

    match goal {
        BodyGoal::Maintain => base,
        BodyGoal::MildDeficit => range.min.max(base - config.goal_adjustment),
        BodyGoal::MildSurplus => range.max.min(base + config.goal_adjustment),
    }
}

/// Protein target in g/kg
#[must_use]
pub const fn protein_grams_per_kg(goal: BodyGoal, config: &GoalValuesConfig) -> f64 {
    config.value_for(goal)
}

/// Fat target in g/kg
#[must_use]
pub const fn fat_grams_per_kg(goal: BodyGoal, config: &GoalValuesConfig) -> f64 {
    config.value_for(goal)
}

/// Run the energy model
#[must_use]
pub fn calculate_energy_breakdown(
    profile: &AthleteProfile,
    training: &TrainingDay,
    config: &NutritionConfig,
) -> EnergyBreakdown {
    // Step 1: BMR
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
    );

    // Step 2: non-sport activity
    let activity_factor = activity_factor(profile.activity_level, &config.activity_factors);
    let base_tdee = bmr * activity_factor;

    // Step 3: the session itself
    let training_kcal = calculate_training_energy_cost(
        profile.weight_kg,
        training.duration_in_hours(),
        training.training_type,
        &config.training_met,
    );
    let day_tdee = base_tdee + training_kcal;

    // Step 4: goal
    let goal_delta_kcal = config.goal_energy_delta.value_for(profile.goal);

    EnergyBreakdown {
        bmr,
        activity_factor,
        base_tdee,
        training_kcal,
        day_tdee,
        goal_delta_kcal,
        target_kcal: day_tdee + goal_delta_kcal,
    }
}

/// Run the macro target model
#[must_use]
pub fn calculate_macro_targets(
    profile: &AthleteProfile,
    training: &TrainingDay,
    config: &NutritionConfig,
) -> MacroTargets {
    let carbs_g_per_kg = carb_grams_per_kg(
        training.training_type,
        training.importance,
        profile.goal,
        &config.carb_ranges,
    );
    let protein_g_per_kg = protein_grams_per_kg(profile.goal, &config.protein_g_per_kg);
    let fat_g_per_kg = fat_grams_per_kg(profile.goal, &config.fat_g_per_kg);

    let totals = MacroTotals {
        carbs_g: carbs_g_per_kg * profile.weight_kg,
        protein_g: protein_g_per_kg * profile.weight_kg,
        fat_g: fat_g_per_kg * profile.weight_kg,
    };
    let macro_kcal = totals.kcal();

    MacroTargets {
        carbs_g_per_kg,
        protein_g_per_kg,
        fat_g_per_kg,
        totals,
        macro_kcal,
        percentages: macro_percentages(&totals, macro_kcal),
    }
}

fn macro_percentages(totals: &MacroTotals, macro_kcal: f64) -> MacroPercentages {
    if macro_kcal <= 0.0 {
        return MacroPercentages {
            carbs_percent: 0.0,
            protein_percent: 0.0,
            fat_percent: 0.0,
        };
    }
    MacroPercentages {
        carbs_percent: (totals.carbs_g * KCAL_PER_G_CARBS / macro_kcal) * 100.0,
        protein_percent: (totals.protein_g * KCAL_PER_G_PROTEIN / macro_kcal) * 100.0,
        fat_percent: (totals.fat_g * KCAL_PER_G_FAT / macro_kcal) * 100.0,
    }
}

/// Energy and macro targets for the day
///
/// The macro-derived kcal is reported next to the energy target and never
/// reconciled with it.
#[must_use]
pub fn calculate_daily_nutrition_needs(
    profile: &AthleteProfile,
    training: &TrainingDay,
    config: &NutritionConfig,
) -> DailyNutritionNeeds {
    let energy = calculate_energy_breakdown(profile, training, config);
    let macros = calculate_macro_targets(profile, training, config);

    DailyNutritionNeeds {
        energy,
        macros,
        macro_kcal_delta: macros.macro_kcal - energy.target_kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_st_jeor_female_constant() {
        let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 30, Sex::Female, &BmrConfig::default());
        // 600 + 1031.25 - 150 - 161
        assert!((bmr - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_surplus_is_capped_at_range_max() {
        let config = CarbRangesConfig::default();
        let value = carb_grams_per_kg(
            TrainingType::LongKeySession,
            SessionImportance::High,
            BodyGoal::MildSurplus,
            &config,
        );
        assert!((value - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_other_type_uses_fallback_range() {
        let config = CarbRangesConfig::default();
        let value = carb_grams_per_kg(
            TrainingType::Other,
            SessionImportance::Medium,
            BodyGoal::Maintain,
            &config,
        );
        assert!((value - 4.5).abs() < f64::EPSILON);
        let met = TrainingMetConfig::default();
        assert!(calculate_training_energy_cost(70.0, 2.0, TrainingType::Other, &met).abs() < f64::EPSILON);
    }
}
