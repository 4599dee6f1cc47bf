// ABOUTME: Unit constants shared by the planner and its presentation layers
// ABOUTME: Energy per gram of each macronutrient and practical serving sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Food composition reference quantity
pub mod units {
    /// Food table values are expressed per this many grams
    pub const FOOD_REFERENCE_GRAMS: f64 = 100.0;
    /// Minutes per hour, for duration conversion
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Service identity used by logging
pub mod service_names {
    /// Binary and service name
    pub const FUELPLAN: &str = "fuelplan";
}
