// ABOUTME: Integration tests for the evaluation pipeline facade
// ABOUTME: Exercises reading evaluation, meal scoring, recommendations, and degraded store paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    balanced_meal, blood_pressure_reading, glucose_reading, pipeline_with, profile_with,
    salty_meal, sample_catalog, FakeSink, FakeStore,
};
use uuid::Uuid;
use vitalis::errors::ErrorCode;
use vitalis::evaluation::Guideline;
use vitalis::models::{AlertSeverity, HealthCondition, MealType, RecommendationPriority};

#[tokio::test]
async fn test_process_reading_persists_critical_alert() {
    let user_id = Uuid::new_v4();
    let (pipeline, sink) = pipeline_with(FakeStore::default(), FakeSink::default());

    let result = pipeline.process_reading(&glucose_reading(user_id, 185.0)).await;

    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].alert_type, "glucose_spike");
    assert_eq!(result.alerts[0].severity, AlertSeverity::Critical);
    assert!(result.error_code.is_none());

    let persisted = sink.persisted_alerts();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].user_id, user_id);
}

#[tokio::test]
async fn test_process_reading_in_range_persists_nothing() {
    let user_id = Uuid::new_v4();
    let (pipeline, sink) = pipeline_with(FakeStore::default(), FakeSink::default());

    let result = pipeline.process_reading(&glucose_reading(user_id, 100.0)).await;

    assert!(result.alerts.is_empty());
    assert!(result.error_code.is_none());
    assert!(sink.persisted_alerts().is_empty());
}

#[tokio::test]
async fn test_process_reading_returns_alerts_when_sink_fails() {
    let user_id = Uuid::new_v4();
    let (pipeline, sink) = pipeline_with(FakeStore::default(), FakeSink::failing());

    let result = pipeline.process_reading(&glucose_reading(user_id, 185.0)).await;

    // The evaluation result must survive a sink outage
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.error_code, Some(ErrorCode::AlertSinkError));
    assert!(sink.persisted_alerts().is_empty());
}

#[tokio::test]
async fn test_evaluate_meal_applies_profile_conditions() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        profile: Some(profile_with(user_id, &[HealthCondition::Diabetes])),
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let result = pipeline.evaluate_meal(&balanced_meal(user_id)).await;

    assert!(result.error_code.is_none());
    // 42 g carbs at the default glycemic index projects a load above the
    // ADA per-meal limit, so the diabetic profile picks up a violation
    // the condition-free profile would not.
    assert!(result
        .report
        .violations
        .iter()
        .any(|finding| finding.guideline == Guideline::Ada
            && finding.parameter == "glycemic_load"));
    assert!(result
        .report
        .compliant
        .iter()
        .any(|finding| finding.guideline == Guideline::Who));
}

#[tokio::test]
async fn test_evaluate_meal_raises_daily_alert_after_heavy_day() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        meals: vec![salty_meal(user_id), salty_meal(user_id), salty_meal(user_id)],
        ..FakeStore::default()
    };
    let (pipeline, sink) = pipeline_with(store, FakeSink::default());

    let result = pipeline.evaluate_meal(&balanced_meal(user_id)).await;

    // 3 x 880 kcal already logged crosses the warning threshold
    let alert = result.daily_alert.unwrap();
    assert_eq!(alert.alert_type, "daily_calories_exceeded");
    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_eq!(sink.persisted_alerts().len(), 1);
}

#[tokio::test]
async fn test_evaluate_meal_degrades_to_condition_free_scoring() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        fail_profile: true,
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let result = pipeline.evaluate_meal(&balanced_meal(user_id)).await;

    assert_eq!(result.error_code, Some(ErrorCode::DataStoreError));
    // Scoring still ran, but only against the universal guideline block
    let all_findings = result
        .report
        .violations
        .iter()
        .chain(&result.report.warnings)
        .chain(&result.report.compliant);
    for finding in all_findings {
        assert_eq!(finding.guideline, Guideline::Who);
    }
}

#[tokio::test]
async fn test_evaluate_meal_skips_daily_monitor_when_history_unavailable() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        fail_meals: true,
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let result = pipeline.evaluate_meal(&balanced_meal(user_id)).await;

    assert_eq!(result.error_code, Some(ErrorCode::DataStoreError));
    assert!(result.daily_alert.is_none());
    assert!(!result.report.compliant.is_empty());
}

#[tokio::test]
async fn test_recommend_merges_signal_and_condition_bundles() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        profile: Some(profile_with(user_id, &[HealthCondition::Hypertension])),
        readings: vec![blood_pressure_reading(user_id, 150.0, 95.0)],
        catalog: sample_catalog(),
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let response = pipeline.recommend(user_id, MealType::Lunch).await;

    assert!(response.error_code.is_none());
    // The elevated-reading bundle and the declared-condition bundle share a
    // dedup key; only the high-priority copy survives.
    let bp_bundles: Vec<_> = response
        .recommendations
        .iter()
        .filter(|rec| rec.rec_type == "blood_pressure")
        .collect();
    assert_eq!(bp_bundles.len(), 1);
    assert_eq!(bp_bundles[0].priority, RecommendationPriority::High);

    assert!(!response.suggestions.is_empty());
    assert!(response.suggestions.len() <= 5);
    // Breakfast-tagged entries never surface for a lunch slot
    assert!(response
        .suggestions
        .iter()
        .all(|s| s.name != "Oatmeal with berries"));
}

#[tokio::test]
async fn test_recommend_degrades_when_store_fails() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        fail_profile: true,
        catalog: sample_catalog(),
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let response = pipeline.recommend(user_id, MealType::Lunch).await;

    assert_eq!(response.error_code, Some(ErrorCode::DataStoreError));
    assert!(response.recommendations.is_empty());
    assert!(response.suggestions.is_empty());
}

#[tokio::test]
async fn test_suggest_meals_ranks_catalog_for_conditions() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        profile: Some(profile_with(user_id, &[HealthCondition::Hypertension])),
        meals: vec![balanced_meal(user_id)],
        catalog: sample_catalog(),
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let candidates = pipeline.suggest_meals(user_id, MealType::Lunch).await.unwrap();

    // The 1350 mg sodium entry is filtered out for a hypertensive profile
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|c| c.name != "Double cheeseburger"));
    assert_eq!(candidates[0].name, "Grilled chicken salad");
    assert!(candidates[0].score >= candidates[1].score);
    assert_eq!(
        candidates[0].description.as_deref(),
        Some("Lean protein over fresh greens")
    );
}

#[tokio::test]
async fn test_suggest_meals_propagates_store_failure() {
    let user_id = Uuid::new_v4();
    let store = FakeStore {
        fail_catalog: true,
        ..FakeStore::default()
    };
    let (pipeline, _sink) = pipeline_with(store, FakeSink::default());

    let err = pipeline
        .suggest_meals(user_id, MealType::Lunch)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DataStoreError);
}

#[tokio::test]
async fn test_ingredient_swap_passthrough() {
    let (pipeline, _sink) = pipeline_with(FakeStore::default(), FakeSink::default());

    let swap = pipeline.suggest_ingredient_swap("White Rice").unwrap();
    assert_eq!(swap.suggested, "brown rice");
    assert!((swap.confidence - 0.85).abs() < f64::EPSILON);

    assert!(pipeline.suggest_ingredient_swap("quinoa").is_none());
}
