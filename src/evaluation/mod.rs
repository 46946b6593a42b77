// ABOUTME: Rule evaluation layer: alert thresholds, guideline compliance, daily aggregates, recommendations
// ABOUTME: Each evaluator is stateless over read-only snapshots and returns plain result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! # Rule Evaluation
//!
//! The four evaluators at the core of the pipeline:
//!
//! - [`AlertEvaluator`] grades individual biometric readings against
//!   per-kind clinical threshold bands
//! - [`DailyAggregateMonitor`] watches running daily totals, currently
//!   calories, for intake threshold crossings
//! - [`ComplianceScorer`] grades a logged meal against the WHO, AHA, and
//!   ADA guideline blocks and produces a scored report
//! - [`RecommendationEngine`] fires condition and biometric-trend rule
//!   bundles and ranks catalog foods
//!
//! Evaluators hold only an immutable copy of their rule configuration.
//! Each call consumes a snapshot and returns records; nothing here performs
//! I/O or retains state between invocations, so one user's evaluation can
//! never affect another's.

pub mod alert_evaluator;
pub mod clinical_constants;
pub mod compliance;
pub mod daily_monitor;
pub mod recommendation_engine;

pub use alert_evaluator::AlertEvaluator;
pub use compliance::{
    ComplianceFinding, ComplianceReport, ComplianceScorer, ComplianceStatus, FindingSeverity,
    Guideline, RemediationAdvice,
};
pub use daily_monitor::DailyAggregateMonitor;
pub use recommendation_engine::RecommendationEngine;
