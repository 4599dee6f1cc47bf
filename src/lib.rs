// ABOUTME: Main library entry point for the fuelplan daily nutrition planner
// ABOUTME: Exposes configuration, logging, the planning pipeline and output formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fuelplan
//!
//! Computes one athlete's daily nutrition plan from a handful of profile and
//! training parameters: energy expenditure, macronutrient targets,
//! intra-workout fueling, meal-by-meal distribution with concrete food
//! portions, and hydration/electrolyte needs.
//!
//! ## Architecture
//!
//! - **Models / errors**: re-exported from the `fuelplan-core` crate
//! - **Config**: compiled-in tables with `FUELPLAN_*` environment overrides
//! - **Intelligence**: the deterministic calculation pipeline
//! - **Formatters**: text and JSON rendering for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use fuelplan::config::PlannerConfig;
//! use fuelplan::intelligence::{plan_day, PlanRequest};
//! use fuelplan::models::{
//!     ActivityLevel, AthleteProfile, BodyGoal, SessionImportance, Sex, TrainingDay,
//!     TrainingTime, TrainingType,
//! };
//!
//! let profile = AthleteProfile {
//!     age: 35,
//!     sex: Sex::Male,
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     activity_level: ActivityLevel::Medium,
//!     goal: BodyGoal::Maintain,
//! };
//! let training = TrainingDay {
//!     training_type: TrainingType::Intervals,
//!     importance: SessionImportance::High,
//!     duration_hours: 1,
//!     duration_minutes: 30,
//!     training_time: TrainingTime::Evening,
//! };
//!
//! let plan = plan_day(&PlanRequest::new(profile, training), &PlannerConfig::default())?;
//! assert_eq!(plan.meals.len(), 5);
//! # Ok::<(), fuelplan::errors::AppError>(())
//! ```

/// Planner configuration with environment overrides
pub mod config;

/// Text and JSON rendering
pub mod formatters;

/// Calculation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

// Re-export foundation types so callers need a single dependency
pub use fuelplan_core::{constants, errors, models};
