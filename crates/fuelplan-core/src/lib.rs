// ABOUTME: Core types for the fuelplan daily nutrition planner
// ABOUTME: Foundation crate with error handling, domain models and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fuelplan Core
//!
//! Foundation crate providing shared types for the fuelplan planner. It changes
//! rarely, so the calculation crate and the CLI can rebuild independently of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Athlete profile, training day, environment and food models
//! - **constants**: Energy densities and practical serving sizes

/// Unified error handling system with standard error codes
pub mod errors;

/// Energy densities and practical unit sizes
pub mod constants;

/// Core domain models (profile, training day, environment, foods)
pub mod models;
