// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides in-memory store/sink fakes and common model builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `vitalis`
//!
//! This module provides fixture builders and fake `HealthDataStore` /
//! `AlertSink` implementations so pipeline tests can run without a
//! real backend.

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use vitalis::errors::{AppError, AppResult};
use vitalis::models::{
    Alert, BiometricReading, FoodCatalogEntry, HealthCondition, MealNutritionProfile, MealType,
    UserHealthProfile,
};
use vitalis::pipeline::{AlertSink, EvaluationPipeline, HealthDataStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile fixture with the given declared conditions
pub fn profile_with(user_id: Uuid, conditions: &[HealthCondition]) -> UserHealthProfile {
    UserHealthProfile {
        user_id,
        gender: None,
        conditions: conditions.to_vec(),
    }
}

/// Glucose reading recorded now
pub fn glucose_reading(user_id: Uuid, mg_dl: f64) -> BiometricReading {
    BiometricReading::glucose(user_id, mg_dl, Utc::now())
}

/// Glucose reading recorded `days_ago` days in the past
pub fn stale_glucose_reading(user_id: Uuid, mg_dl: f64, days_ago: i64) -> BiometricReading {
    BiometricReading::glucose(user_id, mg_dl, Utc::now() - Duration::days(days_ago))
}

/// Blood pressure reading recorded now
pub fn blood_pressure_reading(user_id: Uuid, systolic: f64, diastolic: f64) -> BiometricReading {
    BiometricReading::blood_pressure(user_id, systolic, diastolic, Utc::now())
}

/// Lunch that sits comfortably inside every guideline band
pub fn balanced_meal(user_id: Uuid) -> MealNutritionProfile {
    let mut meal = MealNutritionProfile::new(user_id, MealType::Lunch, Utc::now());
    meal.name = Some("Grilled chicken salad".to_owned());
    meal.calories = Some(520.0);
    meal.protein_g = 38.0;
    meal.carbs_g = 42.0;
    meal.fat_g = 18.0;
    meal.saturated_fat_g = 4.0;
    meal.fiber_g = 9.0;
    meal.sugar_g = 8.0;
    meal.sodium_mg = 480.0;
    meal.cholesterol_mg = 95.0;
    meal
}

/// Dinner that blows through the WHO sodium limit on its own
pub fn salty_meal(user_id: Uuid) -> MealNutritionProfile {
    let mut meal = MealNutritionProfile::new(user_id, MealType::Dinner, Utc::now());
    meal.name = Some("Instant ramen".to_owned());
    meal.calories = Some(880.0);
    meal.protein_g = 14.0;
    meal.carbs_g = 110.0;
    meal.fat_g = 32.0;
    meal.saturated_fat_g = 14.0;
    meal.fiber_g = 2.0;
    meal.sugar_g = 6.0;
    meal.sodium_mg = 2600.0;
    meal.cholesterol_mg = 40.0;
    meal
}

/// Catalog entry tagged for one meal slot with the given aggregator score
pub fn catalog_entry(name: &str, meal_type: MealType, health_score: f64) -> FoodCatalogEntry {
    FoodCatalogEntry {
        name: name.to_owned(),
        health_score: Some(health_score),
        meal_type: Some(meal_type),
        ..FoodCatalogEntry::default()
    }
}

/// Small lunch-heavy catalog used by recommendation tests
pub fn sample_catalog() -> Vec<FoodCatalogEntry> {
    let mut salad = catalog_entry("Grilled chicken salad", MealType::Lunch, 8.6);
    salad.calories = 420.0;
    salad.protein_g = 36.0;
    salad.fiber_g = 6.0;
    salad.sodium_mg = 380.0;

    let mut soup = catalog_entry("Lentil soup", MealType::Lunch, 8.1);
    soup.calories = 310.0;
    soup.protein_g = 18.0;
    soup.fiber_g = 11.0;
    soup.sodium_mg = 420.0;

    let mut bowl = catalog_entry("Brown rice bowl with veggies", MealType::Lunch, 7.4);
    bowl.calories = 540.0;
    bowl.carbs_g = 78.0;
    bowl.fiber_g = 8.0;
    bowl.sodium_mg = 460.0;

    let mut burger = catalog_entry("Double cheeseburger", MealType::Lunch, 3.1);
    burger.calories = 940.0;
    burger.fat_g = 52.0;
    burger.sodium_mg = 1350.0;
    burger.fiber_g = 2.0;

    let mut oatmeal = catalog_entry("Oatmeal with berries", MealType::Breakfast, 8.9);
    oatmeal.calories = 290.0;
    oatmeal.fiber_g = 7.0;
    oatmeal.sugar_g = 9.0;

    vec![salad, soup, bowl, burger, oatmeal]
}

/// In-memory data store with per-method failure toggles
#[derive(Default)]
pub struct FakeStore {
    pub readings: Vec<BiometricReading>,
    pub meals: Vec<MealNutritionProfile>,
    pub profile: Option<UserHealthProfile>,
    pub catalog: Vec<FoodCatalogEntry>,
    pub fail_readings: bool,
    pub fail_meals: bool,
    pub fail_profile: bool,
    pub fail_catalog: bool,
}

#[async_trait]
impl HealthDataStore for FakeStore {
    async fn recent_readings(
        &self,
        _user_id: Uuid,
        _window_days: i64,
        limit: usize,
    ) -> AppResult<Vec<BiometricReading>> {
        if self.fail_readings {
            return Err(AppError::data_store("reading lookup failed"));
        }
        Ok(self.readings.iter().take(limit).cloned().collect())
    }

    async fn todays_meals(&self, _user_id: Uuid) -> AppResult<Vec<MealNutritionProfile>> {
        if self.fail_meals {
            return Err(AppError::data_store("meal lookup failed"));
        }
        Ok(self.meals.clone())
    }

    async fn health_profile(&self, user_id: Uuid) -> AppResult<UserHealthProfile> {
        if self.fail_profile {
            return Err(AppError::data_store("profile lookup failed"));
        }
        Ok(self
            .profile
            .clone()
            .unwrap_or_else(|| UserHealthProfile::without_conditions(user_id)))
    }

    async fn food_catalog(&self, limit: usize) -> AppResult<Vec<FoodCatalogEntry>> {
        if self.fail_catalog {
            return Err(AppError::data_store("catalog lookup failed"));
        }
        Ok(self.catalog.iter().take(limit).cloned().collect())
    }
}

/// Alert sink that captures persisted alerts in memory
#[derive(Default)]
pub struct FakeSink {
    pub persisted: Mutex<Vec<Alert>>,
    pub fail: bool,
}

impl FakeSink {
    /// Sink that rejects every write
    pub fn failing() -> Self {
        Self {
            persisted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Snapshot of everything persisted so far
    pub fn persisted_alerts(&self) -> Vec<Alert> {
        self.persisted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for FakeSink {
    async fn persist_alerts(&self, alerts: &[Alert]) -> AppResult<()> {
        if self.fail {
            return Err(AppError::alert_sink("sink unavailable"));
        }
        self.persisted.lock().unwrap().extend_from_slice(alerts);
        Ok(())
    }
}

/// Wire a pipeline to fakes, returning the sink handle for assertions
pub fn pipeline_with(store: FakeStore, sink: FakeSink) -> (EvaluationPipeline, Arc<FakeSink>) {
    init_test_logging();
    let sink = Arc::new(sink);
    let pipeline = EvaluationPipeline::new(Arc::new(store), sink.clone());
    (pipeline, sink)
}
