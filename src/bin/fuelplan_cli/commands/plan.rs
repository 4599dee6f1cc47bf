// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Daily plan command for the fuelplan CLI
// ABOUTME: Parses profile, training and environment flags into a plan request

use crate::helpers::display::emit;
use clap::Args;
use fuelplan::config::PlannerConfig;
use fuelplan::errors::AppResult;
use fuelplan::formatters::PlanReport;
use fuelplan::intelligence::{plan_day, PlanRequest};
use fuelplan::models::{AthleteProfile, EnvironmentalContext, TrainingDay};

/// Flags for `fuelplan plan`
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Age in years (10-90)
    #[arg(long)]
    age: u32,

    /// Sex: male or female
    #[arg(long)]
    sex: String,

    /// Body weight in kg (35-150)
    #[arg(long)]
    weight: f64,

    /// Height in cm (140-210)
    #[arg(long)]
    height: f64,

    /// Daily activity outside training: low, medium, high
    #[arg(long, default_value = "medium")]
    activity: String,

    /// Body-composition goal: maintain, mild-deficit, mild-surplus
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Session type: rest, endurance-moderate, intervals, strength, long-key-session
    #[arg(long, default_value = "rest")]
    training: String,

    /// Session importance: low, medium, high
    #[arg(long, default_value = "medium")]
    importance: String,

    /// Whole hours of the session (0-6)
    #[arg(long, default_value_t = 0)]
    hours: u32,

    /// Extra minutes of the session (0-59)
    #[arg(long, default_value_t = 0)]
    minutes: u32,

    /// Time of day: early-morning, mid-morning, lunch-break, afternoon, evening, unspecified
    #[arg(long, default_value = "unspecified")]
    time: String,

    /// Carbohydrate during training in g/h (20-120, default 60)
    #[arg(long)]
    carbs_per_hour: Option<f64>,

    /// Temperature: cold, temperate, hot, very-hot
    #[arg(long, default_value = "temperate")]
    temperature: String,

    /// Sweat rate: low, medium, high
    #[arg(long, default_value = "medium")]
    sweat: String,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

impl PlanArgs {
    /// Strictly parse the labels and build the request
    fn to_request(&self) -> AppResult<PlanRequest> {
        let profile = AthleteProfile {
            age: self.age,
            sex: self.sex.parse()?,
            weight_kg: self.weight,
            height_cm: self.height,
            activity_level: self.activity.parse()?,
            goal: self.goal.parse()?,
        };
        let training = TrainingDay {
            training_type: self.training.parse()?,
            importance: self.importance.parse()?,
            duration_hours: self.hours,
            duration_minutes: self.minutes,
            training_time: self.time.parse()?,
        };
        let environment = EnvironmentalContext {
            temperature: self.temperature.parse()?,
            sweat_rate: self.sweat.parse()?,
        };

        let request = PlanRequest::new(profile, training).with_environment(environment);
        Ok(match self.carbs_per_hour {
            Some(rate) => request.with_carbs_per_hour(rate),
            None => request,
        })
    }
}

/// Plan the day and print the report
pub fn run(args: &PlanArgs) -> AppResult<()> {
    let request = args.to_request()?;
    let plan = plan_day(&request, PlannerConfig::global())?;
    emit(&PlanReport(&plan), &args.format)
}
