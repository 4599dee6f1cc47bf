// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Reference data commands for the fuelplan CLI
// ABOUTME: Lists the food-composition table and the base meal templates

use crate::helpers::display::emit;
use fuelplan::errors::AppResult;
use fuelplan::formatters::{FoodTable, TemplateTable};
use fuelplan::intelligence::food_reference::all_templates;
use fuelplan::intelligence::{get_food, FOODS};
use std::slice;

/// Print every food, or only the one named
pub fn list(name: Option<&str>, format: &str) -> AppResult<()> {
    match name {
        Some(name) => {
            let item = get_food(name)?;
            emit(&FoodTable(slice::from_ref(item)), format)
        }
        None => emit(&FoodTable(FOODS), format),
    }
}

/// Print the base meal templates
pub fn templates(format: &str) -> AppResult<()> {
    emit(&TemplateTable(all_templates()), format)
}
