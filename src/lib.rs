// ABOUTME: Main library entry point for the Vitalis health rule-evaluation pipeline
// ABOUTME: Exposes the evaluators, pipeline facade, models, config, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

// deny(unsafe_code): zero-tolerance unsafe policy; nothing in this crate
// needs raw pointers or FFI.
#![deny(unsafe_code)]

//! # Vitalis Evaluation Pipeline
//!
//! A rule-evaluation core for personal health data. It ingests biometric
//! readings and meal nutrition records and produces prioritized alerts,
//! guideline compliance reports, and dietary recommendations. Storage,
//! transport, and ingestion live with external collaborators; this crate
//! evaluates snapshots and returns plain records.
//!
//! ## Components
//!
//! - **Alert Evaluator**: per-kind clinical threshold bands over individual
//!   biometric readings
//! - **Daily Aggregate Monitor**: running daily intake totals against
//!   info/warning thresholds
//! - **Guideline Compliance Scorer**: WHO, AHA, and ADA rule blocks scored
//!   into a 0-100 compliance report
//! - **Recommendation Engine**: condition and biometric-trend rule bundles
//!   plus catalog food ranking
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use uuid::Uuid;
//! use vitalis::evaluation::AlertEvaluator;
//! use vitalis::models::BiometricReading;
//!
//! let evaluator = AlertEvaluator::new();
//! let reading = BiometricReading::glucose(Uuid::new_v4(), 185.0, Utc::now());
//! for alert in evaluator.evaluate(&reading) {
//!     println!("{}: {}", alert.alert_type, alert.title);
//! }
//! ```

/// Rules configuration with validated thresholds and env-var overrides
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// The rule evaluators at the core of the pipeline
pub mod evaluation;

/// Production logging and structured output
pub mod logging;

/// Common data models for readings, meals, alerts, and recommendations
pub mod models;

/// Facade wiring the evaluators to async store and sink ports
pub mod pipeline;
