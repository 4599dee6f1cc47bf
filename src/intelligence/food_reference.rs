// ABOUTME: Static food-composition table and per-category meal templates
// ABOUTME: Reference foods per 100 g and the base portions each meal category starts from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference data
//!
//! A fixed table of common athlete foods (grams of carbohydrate, protein and
//! fat per 100 g, cooked weight where noted) plus one single-plate template
//! per [`MealCategory`]. Both tables are immutable process-wide constants.

use fuelplan_core::errors::{AppError, AppResult};
use fuelplan_core::models::{FoodItem, MacroTotals, MealCategory};
use serde::Serialize;

/// Food-composition table, per 100 g
pub static FOODS: &[FoodItem] = &[
    FoodItem::new("rolled oats", 60.0, 13.0, 7.0),
    FoodItem::new("oat flour", 60.0, 13.0, 7.0),
    FoodItem::new("banana", 23.0, 1.0, 0.0),
    FoodItem::new("kiwi", 15.0, 1.0, 0.5),
    FoodItem::new("almonds", 22.0, 21.0, 50.0),
    FoodItem::new("egg whites", 1.0, 11.0, 0.0),
    FoodItem::new("cooked basmati rice", 28.0, 3.0, 0.3),
    FoodItem::new("cooked wholewheat pasta", 25.0, 5.0, 1.5),
    FoodItem::new("low-fat greek yogurt", 4.0, 10.0, 0.0),
    FoodItem::new("chicken breast", 0.0, 31.0, 3.0),
    FoodItem::new("turkey breast", 0.0, 29.0, 2.0),
    FoodItem::new("cod", 0.0, 18.0, 0.8),
    // about two medium eggs
    FoodItem::new("whole eggs", 1.0, 13.0, 11.0),
    FoodItem::new("tomato passata", 5.0, 1.5, 0.5),
    FoodItem::new("canned tuna, drained", 0.0, 25.0, 8.0),
    FoodItem::new("cooked sweet potatoes", 20.0, 2.0, 0.1),
    FoodItem::new("fennel", 3.0, 1.0, 0.0),
    FoodItem::new("red radicchio", 3.0, 1.0, 0.0),
    FoodItem::new("light minestrone", 5.0, 2.0, 0.5),
    FoodItem::new("extra virgin olive oil", 0.0, 0.0, 100.0),
    FoodItem::new("honey", 82.0, 0.0, 0.0),
    FoodItem::new("jam", 60.0, 0.0, 0.0),
    // powder
    FoodItem::new("whey protein", 6.0, 80.0, 6.0),
    // chickpea/bean/lentil average
    FoodItem::new("cooked legumes", 16.0, 8.0, 1.5),
    FoodItem::new("lactose-free ricotta", 3.0, 9.0, 10.0),
    FoodItem::new("cottage cheese", 3.0, 13.0, 4.0),
    FoodItem::new("grated parmesan", 0.0, 35.0, 28.0),
    FoodItem::new("lactose-free milk", 5.0, 3.5, 1.5),
    FoodItem::new("rice cakes", 80.0, 7.0, 2.0),
];

/// A food and its quantity in grams
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Portion {
    /// Food name (key into [`FOODS`])
    pub food: &'static str,
    /// Quantity in grams
    pub grams: f64,
}

impl Portion {
    const fn new(food: &'static str, grams: f64) -> Self {
        Self { food, grams }
    }

    /// Macros for this portion; unknown foods contribute nothing
    #[must_use]
    pub fn macros(&self) -> MacroTotals {
        find_food(self.food).map_or_else(MacroTotals::default, |item| item.macros_for(self.grams))
    }
}

/// Base single-plate template for a category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MealTemplate {
    /// Category the template serves
    pub category: MealCategory,
    /// Ordered base portions
    pub portions: &'static [Portion],
}

impl MealTemplate {
    /// Macros of the unscaled template
    #[must_use]
    pub fn base_macros(&self) -> MacroTotals {
        macros_for_portions(self.portions)
    }
}

static BREAKFAST: &[Portion] = &[
    Portion::new("rolled oats", 50.0),
    Portion::new("low-fat greek yogurt", 150.0),
    Portion::new("banana", 100.0),
    Portion::new("almonds", 10.0),
];

static SNACK: &[Portion] = &[
    Portion::new("rice cakes", 20.0),
    Portion::new("whey protein", 30.0),
    Portion::new("almonds", 10.0),
];

static POST_TRAINING: &[Portion] = &[
    Portion::new("cooked basmati rice", 120.0),
    Portion::new("chicken breast", 120.0),
    Portion::new("tomato passata", 80.0),
];

static LUNCH: &[Portion] = &[
    Portion::new("cooked basmati rice", 120.0),
    Portion::new("chicken breast", 120.0),
    Portion::new("extra virgin olive oil", 10.0),
    Portion::new("fennel", 80.0),
];

static DINNER: &[Portion] = &[
    Portion::new("cooked wholewheat pasta", 120.0),
    Portion::new("canned tuna, drained", 120.0),
    Portion::new("extra virgin olive oil", 10.0),
    Portion::new("red radicchio", 80.0),
];

/// Template for a meal category
#[must_use]
pub const fn template_for(category: MealCategory) -> MealTemplate {
    let portions = match category {
        MealCategory::Breakfast => BREAKFAST,
        MealCategory::Snack => SNACK,
        MealCategory::PostTraining => POST_TRAINING,
        MealCategory::Lunch => LUNCH,
        MealCategory::Dinner => DINNER,
    };
    MealTemplate {
        category,
        portions,
    }
}

/// All templates in category order
#[must_use]
pub fn all_templates() -> Vec<MealTemplate> {
    MealCategory::ALL.into_iter().map(template_for).collect()
}

/// Exact (case-insensitive) lookup by food name
#[must_use]
pub fn find_food(name: &str) -> Option<&'static FoodItem> {
    let needle = name.trim();
    FOODS
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(needle))
}

/// Lookup that reports a missing food as an error
///
/// # Errors
///
/// Returns `ResourceNotFound` when no food matches `name`
pub fn get_food(name: &str) -> AppResult<&'static FoodItem> {
    find_food(name).ok_or_else(|| AppError::not_found(format!("Food '{name}'")).with_field("name"))
}

/// Sum of macros over a list of portions
#[must_use]
pub fn macros_for_portions(portions: &[Portion]) -> MacroTotals {
    portions.iter().map(Portion::macros).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_food_names_are_unique() {
        let names: HashSet<_> = FOODS.iter().map(|item| item.name).collect();
        assert_eq!(names.len(), FOODS.len());
        assert_eq!(FOODS.len(), 29);
    }

    #[test]
    fn test_every_template_food_exists() {
        for template in all_templates() {
            for portion in template.portions {
                assert!(
                    find_food(portion.food).is_some(),
                    "{} template references unknown food {}",
                    template.category,
                    portion.food
                );
            }
        }
    }

    #[test]
    fn test_breakfast_base_macros() {
        let totals = macros_for_portions(template_for(MealCategory::Breakfast).portions);
        // oats 30 + yogurt 6 + banana 23 + almonds 2.2
        assert!((totals.carbs_g - 61.2).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find_food("  Banana ").is_some());
        assert!(get_food("dragon fruit").is_err());
    }
}
