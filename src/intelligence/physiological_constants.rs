// ABOUTME: Accepted ranges for athlete profile and session inputs
// ABOUTME: Age, body weight, height and session duration limits checked before planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological limits for planner inputs
//!
//! Inputs outside these bounds are rejected at the request boundary. The
//! calculation pipeline itself trusts its inputs.

/// Athlete profile bounds
///
/// Mifflin-St Jeor was validated on adults; the age floor is widened to 10 so
/// that junior athletes still get an estimate.
/// Reference: Frankenfield, D., et al. (2005). Comparison of predictive equations
/// for resting metabolic rate in healthy nonobese and obese adults.
pub mod profile_limits {
    /// Youngest supported age (years)
    pub const MIN_AGE_YEARS: u32 = 10;
    /// Oldest supported age (years)
    pub const MAX_AGE_YEARS: u32 = 90;
    /// Lightest supported body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 35.0;
    /// Heaviest supported body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 150.0;
    /// Shortest supported height (cm)
    pub const MIN_HEIGHT_CM: f64 = 140.0;
    /// Tallest supported height (cm)
    pub const MAX_HEIGHT_CM: f64 = 210.0;
}

/// Session duration bounds
pub mod session_limits {
    /// Longest main session, whole hours
    pub const MAX_DURATION_HOURS: u32 = 6;
    /// Extra minutes on top of the whole hours
    pub const MAX_DURATION_MINUTES: u32 = 59;
}
