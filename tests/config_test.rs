// ABOUTME: Integration tests for rules configuration loading
// ABOUTME: Covers defaults, environment overrides, parse failures, and band validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vitalis::config::RulesConfig;

#[test]
#[serial]
fn test_defaults_match_clinical_constants() {
    let config = RulesConfig::load().unwrap();

    assert!((config.thresholds.glucose.critical_high_mg_dl - 180.0).abs() < f64::EPSILON);
    assert!((config.thresholds.glucose.warning_high_mg_dl - 140.0).abs() < f64::EPSILON);
    assert!((config.guidelines.who.sodium_limit_mg - 2000.0).abs() < f64::EPSILON);
    assert!((config.guidelines.aha.sodium_limit_mg - 1500.0).abs() < f64::EPSILON);
    assert!((config.guidelines.ada.glycemic_load_limit - 20.0).abs() < f64::EPSILON);
    assert!((config.daily_intake.warning_calories - 2500.0).abs() < f64::EPSILON);
    assert_eq!(config.recommendation.limits.max_food_suggestions, 5);
    assert_eq!(config.recommendation.triggers.signal_window_days, 7);
}

#[test]
#[serial]
fn test_env_override_changes_glucose_band() {
    env::set_var("VITALIS_GLUCOSE_CRITICAL_HIGH", "200");

    let config = RulesConfig::load().unwrap();
    assert!((config.thresholds.glucose.critical_high_mg_dl - 200.0).abs() < f64::EPSILON);

    env::remove_var("VITALIS_GLUCOSE_CRITICAL_HIGH");
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("VITALIS_GLUCOSE_CRITICAL_HIGH", "not-a-number");

    let err = RulesConfig::load().unwrap_err();
    assert!(err.to_string().contains("VITALIS_GLUCOSE_CRITICAL_HIGH"));

    env::remove_var("VITALIS_GLUCOSE_CRITICAL_HIGH");
}

#[test]
#[serial]
fn test_inverted_band_fails_validation() {
    // Critical bound pushed below the warning bound must be rejected
    env::set_var("VITALIS_GLUCOSE_CRITICAL_HIGH", "120");

    let err = RulesConfig::load().unwrap_err();
    assert!(err
        .to_string()
        .contains("critical_high must exceed warning_high"));

    env::remove_var("VITALIS_GLUCOSE_CRITICAL_HIGH");
}

#[test]
#[serial]
fn test_recommendation_trigger_overrides() {
    env::set_var("VITALIS_RECOMMENDATION_GLUCOSE_TRIGGER", "130");
    env::set_var("VITALIS_RECOMMENDATION_SIGNAL_WINDOW_DAYS", "14");

    let config = RulesConfig::load().unwrap();
    assert!((config.recommendation.triggers.glucose_trigger_mg_dl - 130.0).abs() < f64::EPSILON);
    assert_eq!(config.recommendation.triggers.signal_window_days, 14);

    env::remove_var("VITALIS_RECOMMENDATION_GLUCOSE_TRIGGER");
    env::remove_var("VITALIS_RECOMMENDATION_SIGNAL_WINDOW_DAYS");
}

#[test]
#[serial]
fn test_warning_band_ratio_must_stay_below_one() {
    env::set_var("VITALIS_SCORING_WARNING_BAND_RATIO", "1.5");

    let err = RulesConfig::load().unwrap_err();
    assert!(err.to_string().contains("warning band ratio"));

    env::remove_var("VITALIS_SCORING_WARNING_BAND_RATIO");
}

#[test]
#[serial]
fn test_global_returns_process_wide_singleton() {
    let first = RulesConfig::global();
    let second = RulesConfig::global();
    assert!(std::ptr::eq(first, second));
}
