// ABOUTME: Nutrition models for reference foods, meal categories and macro totals
// ABOUTME: FoodItem per-100g composition, MealCategory tags and additive MacroTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::constants::units::FOOD_REFERENCE_GRAMS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Reference food with composition per 100 g
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FoodItem {
    /// Unique name (table key)
    pub name: &'static str,
    /// Carbohydrate grams per 100 g
    pub carbs_per_100g: f64,
    /// Protein grams per 100 g
    pub protein_per_100g: f64,
    /// Fat grams per 100 g
    pub fat_per_100g: f64,
}

impl FoodItem {
    /// Build a table entry
    #[must_use]
    pub const fn new(
        name: &'static str,
        carbs_per_100g: f64,
        protein_per_100g: f64,
        fat_per_100g: f64,
    ) -> Self {
        Self {
            name,
            carbs_per_100g,
            protein_per_100g,
            fat_per_100g,
        }
    }

    /// Macros contained in `grams` of this food
    #[must_use]
    pub fn macros_for(&self, grams: f64) -> MacroTotals {
        let factor = grams / FOOD_REFERENCE_GRAMS;
        MacroTotals {
            carbs_g: self.carbs_per_100g * factor,
            protein_g: self.protein_per_100g * factor,
            fat_g: self.fat_per_100g * factor,
        }
    }
}

/// Grams of carbohydrate, protein and fat
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Energy content using Atwater factors
    #[must_use]
    pub fn kcal(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_G_FAT,
            self.protein_g
                .mul_add(KCAL_PER_G_PROTEIN, self.carbs_g * KCAL_PER_G_CARBS),
        )
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            carbs_g: self.carbs_g + rhs.carbs_g,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Meal category that selects a food template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast
    Breakfast,
    /// Recovery meal after the session
    PostTraining,
    /// Snack between meals
    Snack,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
}

impl MealCategory {
    /// All categories in template order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Snack,
        Self::PostTraining,
        Self::Lunch,
        Self::Dinner,
    ];

    /// True for snack slots (fat is deprioritized there)
    #[must_use]
    pub const fn is_snack(&self) -> bool {
        matches!(self, Self::Snack)
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::PostTraining => "post-training",
            Self::Snack => "snack",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_for_scales_per_100g() {
        let oats = FoodItem::new("rolled oats", 60.0, 13.0, 7.0);
        let macros = oats.macros_for(50.0);

        assert!((macros.carbs_g - 30.0).abs() < 1e-9);
        assert!((macros.protein_g - 6.5).abs() < 1e-9);
        assert!((macros.fat_g - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_macro_totals_sum_and_kcal() {
        let total: MacroTotals = [
            MacroTotals { carbs_g: 10.0, protein_g: 5.0, fat_g: 1.0 },
            MacroTotals { carbs_g: 20.0, protein_g: 0.0, fat_g: 2.0 },
        ]
        .into_iter()
        .sum();

        assert!((total.carbs_g - 30.0).abs() < 1e-9);
        // 30*4 + 5*4 + 3*9
        assert!((total.kcal() - 167.0).abs() < 1e-9);
    }
}
