// ABOUTME: Nutrition planning pipeline from athlete profile and training day to a daily plan
// ABOUTME: Energy, macro, timing, composition and hydration models plus the day planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The calculation pipeline, in dependency order:
//!
//! - `food_reference` - Static food table and meal templates
//! - `nutrition_calculator` - Energy model and macro target model
//! - `meal_timing` - Carbohydrate timing and per-meal distribution
//! - `meal_composition` - Food portions for each meal
//! - `hydration` - Fluid and sodium for the session
//! - `day_planner` - Validates a request and assembles the [`DailyPlan`]
//!
//! Every stage is a pure function of its inputs and the read-only configuration.

/// Static food-composition table and meal templates
pub mod food_reference;
/// Fluid and electrolyte recommendations
pub mod hydration;
/// Food portions for a meal's macro targets
pub mod meal_composition;
/// Meal patterns and macro distribution around the session
pub mod meal_timing;
/// BMR, TDEE, training cost and macro targets
pub mod nutrition_calculator;
/// Input limits backed by the physiology literature
pub mod physiological_constants;

/// Request validation and plan assembly
pub mod day_planner;

pub use day_planner::{
    plan_day, Advisory, CarbTiming, DailyPlan, MealPlanEntry, PlanRequest,
};
pub use food_reference::{find_food, get_food, FOODS};
pub use hydration::{hydration_rate, plan_hydration, sodium_rate, HydrationPlan};
pub use meal_composition::{classify_meal_name, suggest_meal, MealSuggestion};
pub use meal_timing::{meal_pattern, meal_times_suggestion, MealSlot};
pub use nutrition_calculator::{
    calculate_daily_nutrition_needs, calculate_mifflin_st_jeor, calculate_training_energy_cost,
    DailyNutritionNeeds, EnergyBreakdown, MacroPercentages, MacroTargets,
};
