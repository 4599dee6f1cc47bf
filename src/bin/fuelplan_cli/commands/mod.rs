// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for the fuelplan CLI
// ABOUTME: Provides the plan, meal, reference data and config commands

pub mod config;
pub mod foods;
pub mod meal;
pub mod plan;
