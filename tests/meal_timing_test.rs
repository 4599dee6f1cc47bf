// ABOUTME: Integration tests for carbohydrate timing and per-meal macro distribution
// ABOUTME: Checks meal patterns, intra-workout carbs and the protein/fat split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, interval_day};
use fuelplan::config::MealPlanningConfig;
use fuelplan::intelligence::meal_timing::{
    carbs_during_training, carbs_outside_training, split_protein_and_fat_across_meals,
};
use fuelplan::intelligence::{meal_pattern, meal_times_suggestion};
use fuelplan::models::{MealCategory, SessionWindow, TrainingDay};

const WINDOWS: [SessionWindow; 4] = [
    SessionWindow::Morning,
    SessionWindow::Midday,
    SessionWindow::AfternoonEvening,
    SessionWindow::NoSession,
];

#[test]
fn test_every_pattern_share_sums_to_one() {
    for window in WINDOWS {
        let total: f64 = meal_pattern(window).iter().map(|slot| slot.carb_share).sum();
        assert_close(total, 1.0, 1e-9);
    }
}

#[test]
fn test_pattern_sizes_and_order() {
    assert_eq!(meal_pattern(SessionWindow::Morning).len(), 5);
    assert_eq!(meal_pattern(SessionWindow::NoSession).len(), 4);

    let names: Vec<&str> = meal_times_suggestion(SessionWindow::AfternoonEvening)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "Breakfast",
            "Lunch",
            "Pre-training snack",
            "Dinner / Post-training",
            "Snacks"
        ]
    );
}

#[test]
fn test_morning_pattern_leads_with_pre_training_breakfast() {
    let first = &meal_pattern(SessionWindow::Morning)[0];
    assert_eq!(first.name, "Breakfast (pre-training)");
    assert_eq!(first.category, MealCategory::Breakfast);
    assert_close(first.carb_share, 0.20, 1e-12);
}

#[test]
fn test_intra_workout_carbs_for_interval_day() {
    assert_close(carbs_during_training(&interval_day(), 60.0), 90.0, 1e-9);
    assert_close(carbs_during_training(&TrainingDay::rest(), 60.0), 0.0, f64::EPSILON);
}

#[test]
fn test_outside_carbs_never_negative() {
    assert_close(carbs_outside_training(490.0, 90.0), 400.0, 1e-9);
    assert_close(carbs_outside_training(100.0, 360.0), 0.0, f64::EPSILON);
}

#[test]
fn test_protein_is_even_and_snacks_get_half_fat() {
    let pattern = meal_pattern(SessionWindow::AfternoonEvening);
    let split = split_protein_and_fat_across_meals(126.0, 63.0, pattern, &MealPlanningConfig::default());

    assert_close(split.protein_per_meal_g, 25.2, 1e-9);
    assert_close(split.protein_per_meal_g * pattern.len() as f64, 126.0, 1e-9);

    // weights 1 + 1 + 0.5 + 1 + 0.5
    let expected = [15.75, 15.75, 7.875, 15.75, 7.875];
    assert_eq!(split.fat_per_meal_g.len(), expected.len());
    for (actual, expected) in split.fat_per_meal_g.iter().zip(expected) {
        assert_close(*actual, expected, 1e-9);
    }
    assert_close(split.fat_per_meal_g.iter().sum(), 63.0, 1e-9);
}

#[test]
fn test_snack_fat_is_half_a_main_meal_in_every_pattern() {
    let config = MealPlanningConfig::default();
    for window in WINDOWS {
        let pattern = meal_pattern(window);
        let split = split_protein_and_fat_across_meals(100.0, 60.0, pattern, &config);
        let main = pattern
            .iter()
            .zip(&split.fat_per_meal_g)
            .find(|(slot, _)| !slot.category.is_snack())
            .map(|(_, fat)| *fat)
            .unwrap();
        for (slot, fat) in pattern.iter().zip(&split.fat_per_meal_g) {
            if slot.category.is_snack() {
                assert_close(*fat, main * 0.5, 1e-9);
            }
        }
        assert_close(split.fat_per_meal_g.iter().sum(), 60.0, 1e-9);
    }
}
