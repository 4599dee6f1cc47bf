// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for the fuelplan CLI
// ABOUTME: Renders a report as text or JSON and writes it to stdout

use fuelplan::errors::{AppError, AppResult, ErrorCode};
use fuelplan::formatters::{format_output, OutputFormat};
use serde::Serialize;
use std::fmt::Display;

/// Render `data` in the requested format and print it
pub fn emit<T>(data: &T, format: &str) -> AppResult<()>
where
    T: Serialize + Display,
{
    let format = OutputFormat::from_str_param(format);
    let rendered = format_output(data, format)
        .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))?;
    println!("{}", rendered.trim_end());
    Ok(())
}
