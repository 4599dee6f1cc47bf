// ABOUTME: fuelplan CLI - command-line front end for the daily nutrition planner
// ABOUTME: Collects profile and training flags, runs the planner and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan an interval day for a 70 kg athlete training in the evening
//! fuelplan plan --age 35 --sex male --weight 70 --height 175 \
//!     --training intervals --importance high --hours 1 --minutes 30 --time evening
//!
//! # Same plan as JSON, hot conditions, heavy sweater
//! fuelplan plan --age 35 --sex male --weight 70 --height 175 --training long \
//!     --hours 3 --time early-morning --temperature hot --sweat high --format json
//!
//! # Compose a single meal from macro targets
//! fuelplan meal --name "Dinner" --carbs 90 --protein 35 --fat 15
//!
//! # Reference data and effective configuration
//! fuelplan foods
//! fuelplan templates
//! fuelplan config
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::meal::MealArgs;
use commands::plan::PlanArgs;
use fuelplan::errors::AppResult;
use fuelplan::logging::LoggingConfig;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fuelplan",
    about = "Daily nutrition planner for endurance and strength athletes",
    long_about = "Estimates energy needs, macro targets, intra-workout fueling, meal-by-meal \
                  portions and hydration for one training day."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the full plan for one day
    Plan(PlanArgs),

    /// Compose one meal from macro targets
    Meal(MealArgs),

    /// Print the food-composition reference table
    Foods {
        /// Show a single food (case-insensitive exact name)
        #[arg(long)]
        name: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the base meal templates
    Templates {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    debug!("fuelplan CLI started");

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }

    Ok(())
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Plan(args) => commands::plan::run(&args),
        Command::Meal(args) => commands::meal::run(&args),
        Command::Foods { name, format } => commands::foods::list(name.as_deref(), &format),
        Command::Templates { format } => commands::foods::templates(&format),
        Command::Config => commands::config::show(),
    }
}
