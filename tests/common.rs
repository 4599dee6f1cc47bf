// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and reference athlete/training fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `fuelplan`

use fuelplan::intelligence::PlanRequest;
use fuelplan::models::{
    ActivityLevel, AthleteProfile, BodyGoal, SessionImportance, Sex, TrainingDay, TrainingTime,
    TrainingType,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Male, 35 y, 70 kg, 175 cm, medium activity, maintain
pub fn reference_profile() -> AthleteProfile {
    AthleteProfile {
        age: 35,
        sex: Sex::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        activity_level: ActivityLevel::Medium,
        goal: BodyGoal::Maintain,
    }
}

/// Female, 30 y, 60 kg, 165 cm, low activity, mild deficit
pub fn deficit_profile() -> AthleteProfile {
    AthleteProfile {
        age: 30,
        sex: Sex::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::Low,
        goal: BodyGoal::MildDeficit,
    }
}

/// High-importance 1h30 interval session in the evening
pub fn interval_day() -> TrainingDay {
    TrainingDay {
        training_type: TrainingType::Intervals,
        importance: SessionImportance::High,
        duration_hours: 1,
        duration_minutes: 30,
        training_time: TrainingTime::Evening,
    }
}

/// Three-hour key session early in the morning
pub fn long_morning_day() -> TrainingDay {
    TrainingDay {
        training_type: TrainingType::LongKeySession,
        importance: SessionImportance::High,
        duration_hours: 3,
        duration_minutes: 0,
        training_time: TrainingTime::EarlyMorning,
    }
}

/// Reference profile on the interval day with default rate and environment
pub fn reference_request() -> PlanRequest {
    PlanRequest::new(reference_profile(), interval_day())
}

/// Float comparison with an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
