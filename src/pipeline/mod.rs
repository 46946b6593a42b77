// ABOUTME: Evaluation pipeline facade wiring the evaluators to async store and sink ports
// ABOUTME: Owns the degraded-path semantics: best-effort partial results plus error indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! # Evaluation Pipeline
//!
//! The facade callers invoke per event: a new biometric reading, a logged
//! meal, or an on-demand recommendation request. It fetches read-only
//! snapshots through [`HealthDataStore`], runs the pure evaluators, and
//! hands alerts to [`AlertSink`] for bulk persistence.
//!
//! Dependency failures never surface as hard errors from the evaluation
//! entry points. A failed sink write still returns the computed alerts; a
//! failed store read degrades to an empty or reduced result. Every degraded
//! path carries a machine-readable error code and is logged with structured
//! fields, so one user's broken evaluation cannot take down a sibling's.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RulesConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::evaluation::{
    AlertEvaluator, ComplianceReport, ComplianceScorer, DailyAggregateMonitor,
    RecommendationEngine,
};
use crate::logging::AppLogger;
use crate::models::{
    Alert, BiometricReading, DailyNutritionTotals, FoodCatalogEntry, IngredientSwap,
    MealCandidate, MealNutritionProfile, MealType, RecommendationResponse, UserHealthProfile,
};

/// Maximum readings fetched per recommendation request
const RECENT_READINGS_LIMIT: usize = 50;

/// Read-only snapshot access to externally owned health data
///
/// Implementations live with the persistence collaborator. Absent optional
/// fields in returned records are zero/absent values, never errors.
#[async_trait]
pub trait HealthDataStore: Send + Sync {
    /// Biometric readings for a user within the given day window, newest allowed first
    async fn recent_readings(
        &self,
        user_id: Uuid,
        window_days: i64,
        limit: usize,
    ) -> AppResult<Vec<BiometricReading>>;

    /// All meals the user logged today
    async fn todays_meals(&self, user_id: Uuid) -> AppResult<Vec<MealNutritionProfile>>;

    /// The user's declared health profile
    async fn health_profile(&self, user_id: Uuid) -> AppResult<UserHealthProfile>;

    /// A bounded slice of the food catalog
    async fn food_catalog(&self, limit: usize) -> AppResult<Vec<FoodCatalogEntry>>;
}

/// Outbound alert persistence owned by the storage collaborator
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Persist a batch of alerts; all-or-nothing is the implementation's choice
    async fn persist_alerts(&self, alerts: &[Alert]) -> AppResult<()>;
}

/// Result of evaluating one biometric reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingEvaluation {
    /// Alerts the reading produced, persisted on a best-effort basis
    pub alerts: Vec<Alert>,
    /// Set when alert persistence failed; the alerts are still returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

/// Result of evaluating one logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEvaluation {
    /// Guideline compliance report for the meal
    pub report: ComplianceReport,
    /// Daily intake alert, when today's running total crossed a threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_alert: Option<Alert>,
    /// Set when a store read or sink write degraded the evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

/// Facade running the evaluators over store snapshots
pub struct EvaluationPipeline {
    store: Arc<dyn HealthDataStore>,
    sink: Arc<dyn AlertSink>,
    alert_evaluator: AlertEvaluator,
    daily_monitor: DailyAggregateMonitor,
    compliance_scorer: ComplianceScorer,
    recommendation_engine: RecommendationEngine,
    signal_window_days: i64,
    catalog_fetch_limit: usize,
}

impl EvaluationPipeline {
    /// Wire a pipeline to its data store and alert sink
    ///
    /// Evaluators and fetch bounds come from the global rules configuration.
    #[must_use]
    pub fn new(store: Arc<dyn HealthDataStore>, sink: Arc<dyn AlertSink>) -> Self {
        let recommendation = &RulesConfig::global().recommendation;
        Self {
            store,
            sink,
            alert_evaluator: AlertEvaluator::new(),
            daily_monitor: DailyAggregateMonitor::new(),
            compliance_scorer: ComplianceScorer::new(),
            recommendation_engine: RecommendationEngine::new(),
            signal_window_days: recommendation.triggers.signal_window_days,
            catalog_fetch_limit: recommendation.limits.max_catalog_sample,
        }
    }

    /// Evaluate a new biometric reading and persist any alerts
    ///
    /// The computed alerts are returned even when the sink write fails; the
    /// failure is logged and surfaced through `error_code`.
    pub async fn process_reading(&self, reading: &BiometricReading) -> ReadingEvaluation {
        let started = Instant::now();
        let alerts = self.alert_evaluator.evaluate(reading);

        for alert in &alerts {
            AppLogger::log_alert(
                &alert.user_id.to_string(),
                &alert.alert_type,
                alert.severity.as_str(),
            );
        }

        let mut error_code = None;
        if !alerts.is_empty() {
            if let Err(err) = self.sink.persist_alerts(&alerts).await {
                AppLogger::log_degraded("alert_evaluator", err.code.as_str(), &err.message);
                error_code = Some(err.code);
            }
        }

        AppLogger::log_evaluation(
            "alert_evaluator",
            &reading.user_id.to_string(),
            alerts.len(),
            duration_ms(started),
        );

        ReadingEvaluation { alerts, error_code }
    }

    /// Score a logged meal and check the day's running intake
    ///
    /// A failed profile lookup degrades to condition-free scoring (the WHO
    /// block still applies); a failed meal-history lookup skips the daily
    /// monitor. Both paths set `error_code` and keep the rest of the result.
    pub async fn evaluate_meal(&self, meal: &MealNutritionProfile) -> MealEvaluation {
        let started = Instant::now();
        let mut error_code = None;

        let profile = match self.store.health_profile(meal.user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                AppLogger::log_degraded("compliance_scorer", err.code.as_str(), &err.message);
                error_code = Some(err.code);
                UserHealthProfile::without_conditions(meal.user_id)
            }
        };
        let report = self.compliance_scorer.score_meal(meal, &profile);

        let daily_alert = match self.store.todays_meals(meal.user_id).await {
            Ok(meals) => self
                .daily_monitor
                .evaluate_daily_calories(meal.user_id, &meals),
            Err(err) => {
                AppLogger::log_degraded("daily_monitor", err.code.as_str(), &err.message);
                error_code = Some(err.code);
                None
            }
        };

        if let Some(alert) = &daily_alert {
            AppLogger::log_alert(
                &alert.user_id.to_string(),
                &alert.alert_type,
                alert.severity.as_str(),
            );
            if let Err(err) = self.sink.persist_alerts(std::slice::from_ref(alert)).await {
                AppLogger::log_degraded("daily_monitor", err.code.as_str(), &err.message);
                error_code = Some(err.code);
            }
        }

        AppLogger::log_evaluation(
            "compliance_scorer",
            &meal.user_id.to_string(),
            report.violations.len() + report.warnings.len(),
            duration_ms(started),
        );

        MealEvaluation {
            report,
            daily_alert,
            error_code,
        }
    }

    /// Generate recommendations and food suggestions for a user
    ///
    /// Any store failure yields an empty response carrying the error code;
    /// callers surface that as "no recommendations available".
    pub async fn recommend(&self, user_id: Uuid, meal_type: MealType) -> RecommendationResponse {
        let started = Instant::now();

        let profile = match self.store.health_profile(user_id).await {
            Ok(profile) => profile,
            Err(err) => return degraded_recommendation(&err),
        };
        let readings = match self
            .store
            .recent_readings(user_id, self.signal_window_days, RECENT_READINGS_LIMIT)
            .await
        {
            Ok(readings) => readings,
            Err(err) => return degraded_recommendation(&err),
        };
        let catalog = match self.store.food_catalog(self.catalog_fetch_limit).await {
            Ok(catalog) => catalog,
            Err(err) => return degraded_recommendation(&err),
        };

        let response = self.recommendation_engine.recommend_from_snapshot(
            &profile,
            &readings,
            &catalog,
            meal_type,
        );

        AppLogger::log_evaluation(
            "recommendation_engine",
            &user_id.to_string(),
            response.recommendations.len() + response.suggestions.len(),
            duration_ms(started),
        );

        response
    }

    /// Rank catalog meal candidates for a slot against the user's day so far
    pub async fn suggest_meals(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> AppResult<Vec<MealCandidate>> {
        let profile = self.store.health_profile(user_id).await?;
        let meals = self.store.todays_meals(user_id).await?;
        let totals = DailyNutritionTotals::from_meals(&meals);
        let catalog = self.store.food_catalog(self.catalog_fetch_limit).await?;

        Ok(self.recommendation_engine.rank_meal_candidates(
            &catalog,
            meal_type,
            &profile,
            Some(&totals),
        ))
    }

    /// Look up a healthier ingredient substitute
    #[must_use]
    pub fn suggest_ingredient_swap(&self, ingredient: &str) -> Option<IngredientSwap> {
        self.recommendation_engine.suggest_ingredient_swap(ingredient)
    }
}

fn degraded_recommendation(err: &AppError) -> RecommendationResponse {
    AppLogger::log_degraded("recommendation_engine", err.code.as_str(), &err.message);
    RecommendationResponse::degraded(err.code)
}

fn duration_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
