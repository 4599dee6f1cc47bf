// ABOUTME: Integration tests for the day planner entry point
// ABOUTME: Covers request validation, plan assembly, advisories and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_close, deficit_profile, interval_day, long_morning_day, reference_profile,
    reference_request,
};
use fuelplan::config::PlannerConfig;
use fuelplan::errors::ErrorCode;
use fuelplan::formatters::{format_output, OutputFormat, PlanReport};
use fuelplan::intelligence::{plan_day, Advisory, PlanRequest};
use fuelplan::models::{
    EnvironmentalContext, MealCategory, SessionWindow, SweatRate, TemperatureCondition,
    TrainingDay,
};
use serde_json::Value;

#[test]
fn test_reference_interval_day() {
    common::init_test_logging();
    let plan = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();

    assert_close(plan.energy.target_kcal, 3218.25, 1e-9);
    assert_close(plan.macros.totals.carbs_g, 490.0, 1e-9);
    assert_close(plan.macro_kcal_delta, -187.25, 1e-9);

    assert_eq!(plan.carbs.carbs_per_hour, Some(60.0));
    assert_close(plan.carbs.during_training_g, 90.0, 1e-9);
    assert_close(plan.carbs.outside_training_g, 400.0, 1e-9);

    assert_eq!(plan.session_window, SessionWindow::AfternoonEvening);
    assert_eq!(plan.meals.len(), 5);
    // |delta| below 200 and 60 g/h above 40
    assert!(plan.advisories.is_empty());
    assert!(plan.hydration.is_some());
    assert_eq!(plan.summary.len(), 7);
}

#[test]
fn test_meal_targets_add_up_to_daily_targets() {
    let plan = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();

    let carbs: f64 = plan.meals.iter().map(|meal| meal.target.carbs_g).sum();
    let protein: f64 = plan.meals.iter().map(|meal| meal.target.protein_g).sum();
    let fat: f64 = plan.meals.iter().map(|meal| meal.target.fat_g).sum();

    assert_close(carbs, plan.carbs.outside_training_g, 1e-9);
    assert_close(protein, plan.macros.totals.protein_g, 1e-9);
    assert_close(fat, plan.macros.totals.fat_g, 1e-9);
}

#[test]
fn test_post_training_dinner_hits_scale_ceiling() {
    let plan = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();
    let dinner = plan
        .meals
        .iter()
        .find(|meal| meal.category == MealCategory::PostTraining)
        .unwrap();

    assert_eq!(dinner.name, "Dinner / Post-training");
    assert_close(dinner.target.carbs_g, 120.0, 1e-9);
    // 120 g asked of a 37.6 g template
    assert_close(dinner.suggestion.scale_factor, 1.8, 1e-12);
    assert!(dinner.suggestion.realized.carbs_g < dinner.target.carbs_g);
}

#[test]
fn test_rest_day_keeps_all_carbs_for_meals() {
    let request = PlanRequest::new(deficit_profile(), TrainingDay::rest());
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();

    assert_eq!(plan.carbs.carbs_per_hour, None);
    assert_close(plan.carbs.during_training_g, 0.0, f64::EPSILON);
    assert_close(plan.carbs.outside_training_g, plan.carbs.total_g, f64::EPSILON);
    assert_eq!(plan.session_window, SessionWindow::NoSession);
    assert_eq!(plan.meals.len(), 4);
    assert!(plan.hydration.is_none());
}

#[test]
fn test_kcal_discrepancy_is_reported_not_corrected() {
    let request = PlanRequest::new(deficit_profile(), TrainingDay::rest());
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();

    assert_eq!(plan.advisories.len(), 1);
    match plan.advisories[0] {
        Advisory::KcalDiscrepancy {
            macro_kcal,
            target_kcal,
            delta_kcal,
        } => {
            assert_close(macro_kcal, 1656.0, 1e-9);
            assert_close(target_kcal, 1284.3, 1e-9);
            assert_close(delta_kcal, 371.7, 1e-9);
        }
        Advisory::LowIntraWorkoutCarbs { .. } => panic!("unexpected advisory"),
    }
    // Targets stay as computed
    assert_close(plan.macros.macro_kcal, 1656.0, 1e-9);
    assert_close(plan.energy.target_kcal, 1284.3, 1e-9);
}

#[test]
fn test_low_intra_workout_rate_advisory() {
    let request = reference_request().with_carbs_per_hour(30.0);
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();

    assert!(plan.advisories.contains(&Advisory::LowIntraWorkoutCarbs {
        carbs_per_hour: 30.0,
        threshold: 40.0,
    }));
    assert!(plan.advisories[0].message().contains("30 g/h"));
}

#[test]
fn test_no_low_rate_advisory_on_rest_day() {
    // the rate is ignored on a rest day, even outside the accepted range
    let request = PlanRequest::new(reference_profile(), TrainingDay::rest()).with_carbs_per_hour(5.0);
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();

    assert!(!plan
        .advisories
        .iter()
        .any(|advisory| matches!(advisory, Advisory::LowIntraWorkoutCarbs { .. })));
}

#[test]
fn test_out_of_range_inputs_are_rejected() {
    let config = PlannerConfig::default();

    let mut young = reference_request();
    young.profile.age = 9;
    let err = plan_day(&young, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.field.as_deref(), Some("age"));

    let mut heavy = reference_request();
    heavy.profile.weight_kg = 151.0;
    let err = plan_day(&heavy, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("weight_kg"));

    let mut nan_height = reference_request();
    nan_height.profile.height_cm = f64::NAN;
    let err = plan_day(&nan_height, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("height_cm"));

    let mut long = reference_request();
    long.training.duration_hours = 7;
    let err = plan_day(&long, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("duration_hours"));

    let mut minutes = reference_request();
    minutes.training.duration_minutes = 60;
    let err = plan_day(&minutes, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("duration_minutes"));

    let fast = reference_request().with_carbs_per_hour(150.0);
    let err = plan_day(&fast, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("carbs_per_hour"));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_boundary_values_are_accepted() {
    let mut request = reference_request().with_carbs_per_hour(120.0);
    request.profile.age = 90;
    request.profile.weight_kg = 35.0;
    request.profile.height_cm = 210.0;
    request.training.duration_hours = 6;
    request.training.duration_minutes = 59;

    assert!(plan_day(&request, &PlannerConfig::default()).is_ok());
}

#[test]
fn test_environment_flows_into_hydration() {
    let request = PlanRequest::new(reference_profile(), long_morning_day()).with_environment(
        EnvironmentalContext {
            temperature: TemperatureCondition::Hot,
            sweat_rate: SweatRate::High,
        },
    );
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();
    let hydration = plan.hydration.unwrap();

    assert_eq!(plan.session_window, SessionWindow::Morning);
    assert_close(hydration.total_sodium_mg, 2400.0, 1e-9);
    // 9 g/kg * 70 minus 3 h at 60 g/h
    assert_close(plan.carbs.outside_training_g, 450.0, 1e-9);
}

#[test]
fn test_json_output_shape() {
    let plan = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();
    let rendered = format_output(&PlanReport(&plan), OutputFormat::Json).unwrap();
    let json: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(json["training"]["training_type"], "intervals");
    assert_eq!(json["session_window"], "afternoon_evening");
    assert_eq!(json["meals"].as_array().unwrap().len(), 5);
    assert_eq!(json["meals"][3]["category"], "post_training");
    assert_eq!(json["environment"]["temperature"], "temperate");
    assert!(json["hydration"]["total_liters"].is_number());
    assert!(json["advisories"].as_array().unwrap().is_empty());
}

#[test]
fn test_advisory_json_is_tagged() {
    let request = reference_request().with_carbs_per_hour(25.0);
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["advisories"][0]["kind"], "low_intra_workout_carbs");
    assert_eq!(json["advisories"][0]["threshold"], 40.0);
}

#[test]
fn test_text_report_mentions_every_meal() {
    let plan = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();
    let text = format_output(&PlanReport(&plan), OutputFormat::Text).unwrap();

    assert!(text.starts_with("DAILY NUTRITION PLAN"));
    for meal in &plan.meals {
        assert!(text.contains(meal.name), "missing {}", meal.name);
    }
    assert!(text.contains("Hydration & electrolytes"));
}

#[test]
fn test_text_report_states_no_intra_workout_carbs_on_rest_day() {
    let request = PlanRequest::new(deficit_profile(), TrainingDay::rest());
    let plan = plan_day(&request, &PlannerConfig::default()).unwrap();
    let text = format_output(&PlanReport(&plan), OutputFormat::Text).unwrap();

    assert!(text.contains("no intra-workout carbohydrate"));
    assert!(!text.contains("g/h)"));

    let training = plan_day(&reference_request(), &PlannerConfig::default()).unwrap();
    let text = format_output(&PlanReport(&training), OutputFormat::Text).unwrap();
    assert!(text.contains("(60 g/h)"));
    assert!(!text.contains("no intra-workout carbohydrate"));
}

#[test]
fn test_request_deserializes_with_defaults() {
    let raw = serde_json::json!({
        "profile": {
            "age": 35,
            "sex": "male",
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "activity_level": "medium",
            "goal": "maintain"
        },
        "training": {
            "training_type": "intervals",
            "importance": "high",
            "duration_hours": 1,
            "duration_minutes": 30,
            "training_time": "evening"
        }
    });
    let request: PlanRequest = serde_json::from_value(raw).unwrap();

    assert_eq!(request, PlanRequest::new(reference_profile(), interval_day()));
    assert_eq!(request.environment, EnvironmentalContext::default());
}
