// ABOUTME: Integration tests for the hydration and electrolyte model
// ABOUTME: Checks fluid and sodium rates, session totals and the no-session case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, interval_day, long_morning_day};
use fuelplan::config::HydrationConfig;
use fuelplan::intelligence::{hydration_rate, plan_hydration, sodium_rate};
use fuelplan::models::{EnvironmentalContext, SweatRate, TemperatureCondition, TrainingDay};

#[test]
fn test_hydration_rate_table() {
    let config = HydrationConfig::default();
    assert_close(
        hydration_rate(TemperatureCondition::Temperate, SweatRate::Medium, &config),
        0.65,
        1e-12,
    );
    assert_close(
        hydration_rate(TemperatureCondition::Cold, SweatRate::Low, &config),
        0.405,
        1e-12,
    );
    assert_close(
        hydration_rate(TemperatureCondition::VeryHot, SweatRate::High, &config),
        1.105,
        1e-12,
    );
}

#[test]
fn test_sodium_rate_table() {
    let config = HydrationConfig::default();
    assert_close(sodium_rate(SweatRate::Low, &config), 350.0, f64::EPSILON);
    assert_close(sodium_rate(SweatRate::Medium, &config), 550.0, f64::EPSILON);
    assert_close(sodium_rate(SweatRate::High, &config), 800.0, f64::EPSILON);
}

#[test]
fn test_default_environment_session_plan() {
    let plan = plan_hydration(
        &interval_day(),
        &EnvironmentalContext::default(),
        &HydrationConfig::default(),
    )
    .unwrap();

    assert_close(plan.duration_hours, 1.5, 1e-12);
    assert_close(plan.total_liters, 0.975, 1e-9);
    assert_close(plan.bottles, 1.95, 1e-9);
    assert_close(plan.total_sodium_mg, 825.0, 1e-9);
    assert_close(plan.sodium_tablets, 2.75, 1e-9);
}

#[test]
fn test_hot_long_session_plan() {
    let environment = EnvironmentalContext {
        temperature: TemperatureCondition::Hot,
        sweat_rate: SweatRate::High,
    };
    let plan = plan_hydration(&long_morning_day(), &environment, &HydrationConfig::default())
        .unwrap();

    // 0.85 * 1.15 L/h for 3 h
    assert_close(plan.liters_per_hour, 0.9775, 1e-12);
    assert_close(plan.total_liters, 2.9325, 1e-9);
    assert_close(plan.total_sodium_mg, 2400.0, 1e-9);
    assert_close(plan.sodium_tablets, 8.0, 1e-9);
}

#[test]
fn test_no_plan_without_a_session() {
    let config = HydrationConfig::default();
    let environment = EnvironmentalContext::default();

    let rest = TrainingDay {
        duration_hours: 2,
        ..TrainingDay::rest()
    };
    assert!(plan_hydration(&rest, &environment, &config).is_none());

    let zero_length = TrainingDay {
        duration_hours: 0,
        duration_minutes: 0,
        ..interval_day()
    };
    assert!(plan_hydration(&zero_length, &environment, &config).is_none());
}

#[test]
fn test_environment_labels_parse_leniently() {
    assert_eq!(
        TemperatureCondition::from_str_lossy("very hot"),
        TemperatureCondition::VeryHot
    );
    assert_eq!(
        TemperatureCondition::from_str_lossy("sauna"),
        TemperatureCondition::Temperate
    );
    assert_eq!(SweatRate::from_str_lossy("HIGH"), SweatRate::High);
    assert!("sauna".parse::<TemperatureCondition>().is_err());
}
