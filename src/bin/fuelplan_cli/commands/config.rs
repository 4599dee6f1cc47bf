// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Configuration command for the fuelplan CLI
// ABOUTME: Prints the effective planner configuration after environment overrides

use fuelplan::config::PlannerConfig;
use fuelplan::errors::AppResult;

/// Print the effective configuration as pretty JSON
pub fn show() -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(PlannerConfig::global())?;
    println!("{rendered}");
    Ok(())
}
