// ABOUTME: Integration tests for biometric alert evaluation from wire-format readings
// ABOUTME: Covers lenient JSON parsing, partial readings, alert serialization, and quiet paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{blood_pressure_reading, glucose_reading};
use uuid::Uuid;
use vitalis::evaluation::AlertEvaluator;
use vitalis::models::{AlertSeverity, BiometricReading, BiometricValue};

#[test]
fn test_reading_parses_from_lenient_wire_json() {
    common::init_test_logging();
    // Aggregators deliver numbers as strings; the reading must still parse
    let raw = format!(
        r#"{{
            "id": "{}",
            "user_id": "{}",
            "kind": "glucose",
            "value": {{ "glucose_mg_dl": "185.5" }},
            "recorded_at": "2026-08-25T08:00:00Z"
        }}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let reading: BiometricReading = serde_json::from_str(&raw).unwrap();

    let alerts = AlertEvaluator::new().evaluate(&reading);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, "glucose_spike");
    assert!((alerts[0].context.measured_value - 185.5).abs() < f64::EPSILON);
    assert!((alerts[0].context.threshold_value - 180.0).abs() < f64::EPSILON);
    assert_eq!(alerts[0].context.unit, "mg/dL");
}

#[test]
fn test_partial_blood_pressure_reading_still_evaluates() {
    common::init_test_logging();
    let raw = format!(
        r#"{{
            "id": "{}",
            "user_id": "{}",
            "kind": "blood_pressure",
            "value": {{ "systolic_mmhg": 185 }},
            "recorded_at": "2026-08-25T08:00:00Z"
        }}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let reading: BiometricReading = serde_json::from_str(&raw).unwrap();

    let alerts = AlertEvaluator::new().evaluate(&reading);

    // The present component is enough to cross the crisis band
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, "blood_pressure_crisis");
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
}

#[test]
fn test_alert_wire_format_is_stable() {
    common::init_test_logging();
    let user_id = Uuid::new_v4();
    let reading = glucose_reading(user_id, 60.0);

    let alerts = AlertEvaluator::new().evaluate(&reading);
    assert_eq!(alerts.len(), 1);

    let wire = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(wire["alert_type"], "glucose_low");
    assert_eq!(wire["severity"], "warning");
    assert_eq!(wire["triggered_by"], "threshold_breach");
    assert_eq!(wire["source_reading_id"], reading.id.to_string());
    assert!(wire["context"]["measured_value"].is_number());
}

#[test]
fn test_temperature_alert_uses_canonical_unit() {
    common::init_test_logging();
    let reading = BiometricReading::new(
        Uuid::new_v4(),
        BiometricValue::Temperature {
            temperature_celsius: Some(39.8),
        },
        Utc::now(),
    );

    let alerts = AlertEvaluator::new().evaluate(&reading);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].context.unit, "°C");
}

#[test]
fn test_in_range_battery_produces_no_alerts() {
    common::init_test_logging();
    let user_id = Uuid::new_v4();
    let evaluator = AlertEvaluator::new();
    let now = Utc::now();

    let readings = vec![
        glucose_reading(user_id, 100.0),
        blood_pressure_reading(user_id, 118.0, 76.0),
        BiometricReading::heart_rate(user_id, 68.0, now),
        BiometricReading::new(
            user_id,
            BiometricValue::Temperature {
                temperature_celsius: Some(36.8),
            },
            now,
        ),
        BiometricReading::new(
            user_id,
            BiometricValue::Cholesterol {
                total_mg_dl: Some(170.0),
                ldl_mg_dl: None,
            },
            now,
        ),
        BiometricReading::new(
            user_id,
            BiometricValue::Weight {
                weight_kg: Some(72.0),
            },
            now,
        ),
    ];

    let alerts: Vec<_> = readings
        .iter()
        .flat_map(|reading| evaluator.evaluate(reading))
        .collect();
    assert!(alerts.is_empty());
}
