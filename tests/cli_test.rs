// ABOUTME: End-to-end tests for the fuelplan binary
// ABOUTME: Checks stdout content and the sysexits status reported for failed requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::{Command, Output};

fn fuelplan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuelplan"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("fuelplan binary should start")
}

const REST_DAY: [&str; 11] = [
    "plan", "--age", "30", "--sex", "female", "--weight", "60", "--height", "165", "--activity",
    "low",
];

#[test]
fn test_rest_day_plan_succeeds() {
    let output = fuelplan(&REST_DAY);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("DAILY NUTRITION PLAN"));
    assert!(stdout.contains("no intra-workout carbohydrate"));
}

#[test]
fn test_out_of_range_weight_exits_with_data_error() {
    let output = fuelplan(&[
        "plan", "--age", "30", "--sex", "female", "--weight", "200", "--height", "165",
    ]);

    assert_eq!(output.status.code(), Some(65));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("weight_kg"), "{stderr}");
}

#[test]
fn test_unknown_label_exits_with_usage_error() {
    let output = fuelplan(&[
        "plan", "--age", "30", "--sex", "robot", "--weight", "60", "--height", "165",
    ]);

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn test_unknown_food_exits_with_data_error() {
    let output = fuelplan(&["foods", "--name", "unobtainium"]);

    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn test_negative_meal_target_exits_with_usage_error() {
    let output = fuelplan(&["meal", "--name", "Dinner", "--carbs=-5"]);

    assert_eq!(output.status.code(), Some(64));
}
