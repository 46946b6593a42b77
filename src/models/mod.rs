// ABOUTME: Core data models for the Vitalis rule evaluation pipeline
// ABOUTME: Re-exports biometric, nutrition, profile, alert, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! # Data Models
//!
//! Core data structures shared across the evaluators and the pipeline
//! facade. Inputs (readings, meals, profiles) are read-only snapshots owned
//! by external collaborators; outputs (alerts, recommendations) are plain
//! records returned to the caller.
//!
//! ## Design Principles
//!
//! - **Lenient inbound parsing**: absent or malformed numeric fields become
//!   zero/absent, never a deserialization error
//! - **Immutable records**: readings and alerts never change after creation
//! - **Serializable**: all models support JSON for storage and CLI output
//! - **Type safe**: closed enums make unhandled biometric kinds impossible

// Domain modules
mod alert;
mod biometrics;
mod de;
mod nutrition;
mod profile;
mod recommendation;

// Re-export all public types for convenience
// Biometrics domain
pub use biometrics::{BiometricKind, BiometricReading, BiometricValue};

// Nutrition domain
pub use nutrition::{DailyNutritionTotals, FoodCatalogEntry, MealNutritionProfile, MealType};

// Profile domain
pub use profile::{Gender, HealthCondition, UserHealthProfile};

// Alert domain
pub use alert::{Alert, AlertContext, AlertSeverity, AlertTrigger};

// Recommendation domain
pub use recommendation::{
    FoodSuggestion, IngredientSwap, MealCandidate, Recommendation, RecommendationPriority,
    RecommendationResponse, SuggestedAction,
};
