// ABOUTME: Error types for rules configuration loading and validation
// ABOUTME: Provides ConfigError for threshold, guideline, and engine config failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold band is internally inconsistent (e.g. warning above critical)
    #[error("Invalid range for {0}")]
    InvalidRange(&'static str),

    /// A required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable lookup failed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A value could not be parsed from its environment override
    #[error("Failed to parse configuration value: {0}")]
    Parse(String),

    /// Scoring weights or adjustments are inconsistent
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(&'static str),

    /// A value is outside its permitted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
