// ABOUTME: Integration tests for planner configuration loading
// ABOUTME: Exercises FUELPLAN_* environment overrides, parse failures and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use fuelplan::config::{ConfigError, PlannerConfig};
use fuelplan::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 6] = [
    "FUELPLAN_SCALE_MIN",
    "FUELPLAN_SCALE_MAX",
    "FUELPLAN_DEFAULT_CARBS_PER_HOUR",
    "FUELPLAN_DEFICIT_KCAL",
    "FUELPLAN_BOTTLE_LITERS",
    "FUELPLAN_ACTIVITY_FACTOR_HIGH",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = PlannerConfig::load().unwrap();

    assert_close(config.meal_planning.scale_min, 0.6, f64::EPSILON);
    assert_close(config.meal_planning.scale_max, 1.8, f64::EPSILON);
    assert_close(config.meal_planning.default_carbs_per_hour, 60.0, f64::EPSILON);
    assert_close(config.nutrition.goal_energy_delta.mild_deficit, -300.0, f64::EPSILON);
    assert_close(config.hydration.bottle_liters, 0.5, f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("FUELPLAN_SCALE_MAX", "2.0");
    env::set_var("FUELPLAN_DEFAULT_CARBS_PER_HOUR", " 75 ");
    env::set_var("FUELPLAN_DEFICIT_KCAL", "-400");
    env::set_var("FUELPLAN_BOTTLE_LITERS", "0.75");
    env::set_var("FUELPLAN_ACTIVITY_FACTOR_HIGH", "1.7");

    let config = PlannerConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_close(config.meal_planning.scale_max, 2.0, f64::EPSILON);
    assert_close(config.meal_planning.default_carbs_per_hour, 75.0, f64::EPSILON);
    assert_close(config.nutrition.goal_energy_delta.mild_deficit, -400.0, f64::EPSILON);
    assert_close(config.hydration.bottle_liters, 0.75, f64::EPSILON);
    assert_close(config.nutrition.activity_factors.high, 1.7, f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("FUELPLAN_SCALE_MAX", "lots");

    let result = PlannerConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("FUELPLAN_SCALE_MAX")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("FUELPLAN_SCALE_MIN", "1.5");

    let result = PlannerConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_non_finite_overrides_are_rejected() {
    for (name, value) in [
        ("FUELPLAN_SCALE_MAX", "NaN"),
        ("FUELPLAN_BOTTLE_LITERS", "nan"),
        ("FUELPLAN_DEFAULT_CARBS_PER_HOUR", "inf"),
        ("FUELPLAN_ACTIVITY_FACTOR_HIGH", "-infinity"),
    ] {
        clear_overrides();
        env::set_var(name, value);

        let result = PlannerConfig::load();
        clear_overrides();

        match result {
            Err(ConfigError::ValueOutOfRange(message)) => {
                assert!(message.contains(name), "{message}");
                assert!(message.contains("finite"), "{message}");
            }
            other => panic!("expected {name}={value} to be rejected, got {other:?}"),
        }
    }
}

#[test]
#[serial]
fn test_positive_deficit_override_is_rejected() {
    clear_overrides();
    env::set_var("FUELPLAN_DEFICIT_KCAL", "250");

    let result = PlannerConfig::load();
    clear_overrides();

    let err: AppError = result.unwrap_err().into();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_config_serializes_every_section() {
    let json = serde_json::to_value(PlannerConfig::default()).unwrap();

    assert!(json["nutrition"]["bmr"].is_object());
    assert_eq!(json["nutrition"]["advisories"]["kcal_discrepancy_threshold"], 200.0);
    assert_eq!(json["meal_planning"]["snack_fat_weight"], 0.5);
    assert_eq!(json["hydration"]["sodium_tablet_mg"], 300.0);
}
