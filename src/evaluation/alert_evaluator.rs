// ABOUTME: Alert evaluator applying per-kind clinical threshold bands to readings
// ABOUTME: Produces severity-ranked alerts with canned messages and suggested actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Threshold alert evaluation for biometric readings.
//!
//! Each biometric kind runs at most one high-side and one low-side check
//! against its configured bands. On each side the critical bound is tested
//! first and suppresses the warning bound, so a reading yields at most one
//! alert per side. Blood pressure is evaluated jointly over both components
//! with OR semantics and a single combined alert. Missing values produce no
//! alerts and never abort sibling checks.

use tracing::debug;

use crate::config::{BiometricThresholdsConfig, RulesConfig};
use crate::models::{Alert, AlertContext, AlertSeverity, BiometricReading, BiometricValue};

/// One canned alert rule keyed by (kind, side, severity)
struct BandRule {
    alert_type: &'static str,
    severity: AlertSeverity,
    title: &'static str,
    message: &'static str,
    action: &'static str,
    risk_note: Option<&'static str>,
}

const GLUCOSE_SPIKE: BandRule = BandRule {
    alert_type: "glucose_spike",
    severity: AlertSeverity::Critical,
    title: "Critical High Blood Glucose",
    message: "Blood glucose is far above the target range and needs prompt attention.",
    action: "Verify the reading, check for missed medication, and contact your care team promptly.",
    risk_note: Some("Sustained hyperglycemia increases the risk of diabetic complications"),
};

const GLUCOSE_HIGH: BandRule = BandRule {
    alert_type: "glucose_high",
    severity: AlertSeverity::Warning,
    title: "Elevated Blood Glucose",
    message: "Blood glucose is above the normal postprandial range.",
    action: "Favor low glycemic index foods and recheck after your next meal.",
    risk_note: Some("Repeated elevated readings suggest reduced glycemic control"),
};

const GLUCOSE_LOW: BandRule = BandRule {
    alert_type: "glucose_low",
    severity: AlertSeverity::Warning,
    title: "Low Blood Glucose",
    message: "Blood glucose has dropped below the normal range.",
    action: "Take fast-acting carbohydrates and recheck in 15 minutes.",
    risk_note: Some("Mild hypoglycemia can progress quickly without intake"),
};

const GLUCOSE_SEVERE_LOW: BandRule = BandRule {
    alert_type: "glucose_severe_low",
    severity: AlertSeverity::Critical,
    title: "Severely Low Blood Glucose",
    message: "Blood glucose is at a clinically significant low level.",
    action: "Treat immediately with fast-acting glucose and seek help if symptoms persist.",
    risk_note: Some("Severe hypoglycemia carries a risk of impaired consciousness"),
};

const BLOOD_PRESSURE_CRISIS: BandRule = BandRule {
    alert_type: "blood_pressure_crisis",
    severity: AlertSeverity::Critical,
    title: "Hypertensive Crisis",
    message: "One or both blood pressure components are in the crisis range.",
    action: "Rest, re-measure within five minutes, and seek urgent care if still elevated.",
    risk_note: Some("Crisis-range pressure can cause acute organ damage"),
};

const BLOOD_PRESSURE_HIGH: BandRule = BandRule {
    alert_type: "blood_pressure_high",
    severity: AlertSeverity::Warning,
    title: "Elevated Blood Pressure",
    message: "Blood pressure is in the stage 2 hypertension range.",
    action: "Reduce sodium intake and discuss the trend with your care provider.",
    risk_note: Some("Sustained stage 2 readings warrant medical review"),
};

const HEART_RATE_SEVERE_HIGH: BandRule = BandRule {
    alert_type: "heart_rate_severe_high",
    severity: AlertSeverity::Critical,
    title: "Severe Resting Tachycardia",
    message: "Resting heart rate is far above the expected range.",
    action: "Stop activity, rest, and seek medical attention if the rate stays elevated.",
    risk_note: Some("Marked resting tachycardia can signal an acute condition"),
};

const HEART_RATE_HIGH: BandRule = BandRule {
    alert_type: "heart_rate_high",
    severity: AlertSeverity::Warning,
    title: "Elevated Resting Heart Rate",
    message: "Resting heart rate is above the expected range.",
    action: "Rest and re-measure; note any caffeine, stress, or illness.",
    risk_note: None,
};

const HEART_RATE_LOW: BandRule = BandRule {
    alert_type: "heart_rate_low",
    severity: AlertSeverity::Warning,
    title: "Low Resting Heart Rate",
    message: "Resting heart rate is below the expected range.",
    action: "Re-measure while seated; mention it at your next visit if it persists.",
    risk_note: None,
};

const HEART_RATE_SEVERE_LOW: BandRule = BandRule {
    alert_type: "heart_rate_severe_low",
    severity: AlertSeverity::Critical,
    title: "Severe Bradycardia",
    message: "Resting heart rate is far below the expected range.",
    action: "Seek medical attention, especially with dizziness or fainting.",
    risk_note: Some("Marked bradycardia can impair circulation"),
};

const CHOLESTEROL_HIGH: BandRule = BandRule {
    alert_type: "cholesterol_high",
    severity: AlertSeverity::Critical,
    title: "High Total Cholesterol",
    message: "Total cholesterol is in the high classification.",
    action: "Schedule a lipid panel review with your care provider.",
    risk_note: Some("High total cholesterol raises long-term cardiovascular risk"),
};

const CHOLESTEROL_BORDERLINE: BandRule = BandRule {
    alert_type: "cholesterol_borderline",
    severity: AlertSeverity::Warning,
    title: "Borderline High Cholesterol",
    message: "Total cholesterol is in the borderline high classification.",
    action: "Favor unsaturated fats and plan a follow-up panel.",
    risk_note: None,
};

const TEMPERATURE_HIGH_FEVER: BandRule = BandRule {
    alert_type: "temperature_high_fever",
    severity: AlertSeverity::Critical,
    title: "High Fever",
    message: "Body temperature indicates a high fever.",
    action: "Use fever reduction measures and seek care if it does not respond.",
    risk_note: Some("High fever may indicate a serious infection"),
};

const TEMPERATURE_FEVER: BandRule = BandRule {
    alert_type: "temperature_fever",
    severity: AlertSeverity::Warning,
    title: "Fever Detected",
    message: "Body temperature is above the fever threshold.",
    action: "Hydrate, rest, and monitor the trend.",
    risk_note: None,
};

const TEMPERATURE_LOW: BandRule = BandRule {
    alert_type: "temperature_low",
    severity: AlertSeverity::Warning,
    title: "Below-Normal Body Temperature",
    message: "Body temperature is below the normal core range.",
    action: "Warm up and re-measure with a reliable thermometer.",
    risk_note: None,
};

const TEMPERATURE_HYPOTHERMIA: BandRule = BandRule {
    alert_type: "temperature_hypothermia",
    severity: AlertSeverity::Critical,
    title: "Hypothermia Risk",
    message: "Body temperature is at a hypothermic level.",
    action: "Apply active warming and seek urgent medical attention.",
    risk_note: Some("Core temperatures this low are a medical emergency"),
};

const WEIGHT_SEVERE_HIGH: BandRule = BandRule {
    alert_type: "weight_severe_high",
    severity: AlertSeverity::Critical,
    title: "Weight Above Review Range",
    message: "Recorded weight is above the plausible follow-up range.",
    action: "Confirm the scale reading and review the entry with your care provider.",
    risk_note: Some("Out-of-range values may reflect an entry error"),
};

const WEIGHT_HIGH: BandRule = BandRule {
    alert_type: "weight_high",
    severity: AlertSeverity::Warning,
    title: "Weight Above Watch Range",
    message: "Recorded weight is above the configured watch range.",
    action: "Track weekly trends rather than single readings.",
    risk_note: None,
};

const WEIGHT_LOW: BandRule = BandRule {
    alert_type: "weight_low",
    severity: AlertSeverity::Warning,
    title: "Weight Below Watch Range",
    message: "Recorded weight is below the configured watch range.",
    action: "Track weekly trends and discuss unintended loss with your provider.",
    risk_note: None,
};

const WEIGHT_SEVERE_LOW: BandRule = BandRule {
    alert_type: "weight_severe_low",
    severity: AlertSeverity::Critical,
    title: "Weight Below Review Range",
    message: "Recorded weight is below the plausible follow-up range.",
    action: "Confirm the scale reading and review the entry with your care provider.",
    risk_note: Some("Out-of-range values may reflect an entry error"),
};

/// Build the alert record for one fired band rule
fn breach(reading: &BiometricReading, rule: &BandRule, measured: f64, threshold: f64) -> Alert {
    Alert::threshold_breach(
        reading.user_id,
        rule.alert_type,
        rule.severity,
        rule.title,
        rule.message,
        AlertContext {
            measured_value: measured,
            threshold_value: threshold,
            unit: reading.kind().canonical_unit().to_owned(),
            risk_note: rule.risk_note.map(str::to_owned),
        },
        rule.action,
        reading.id,
    )
}

/// Evaluates single biometric readings against the configured threshold bands
///
/// Pure over its inputs: evaluation returns the alert list and performs no
/// persistence. Callers own the write path.
pub struct AlertEvaluator {
    thresholds: BiometricThresholdsConfig,
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEvaluator {
    /// Create an evaluator backed by the global rules configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: RulesConfig::global().thresholds.clone(),
        }
    }

    /// Create an evaluator with explicit threshold bands
    #[must_use]
    pub fn with_config(thresholds: BiometricThresholdsConfig) -> Self {
        Self { thresholds }
    }

    /// Evaluate one reading against its kind's bands
    ///
    /// Returns zero or more alerts; at most one per side per kind. Missing
    /// value components yield no alert for their checks without aborting the
    /// remaining comparisons.
    #[must_use]
    pub fn evaluate(&self, reading: &BiometricReading) -> Vec<Alert> {
        let mut alerts = Vec::new();

        match reading.value {
            BiometricValue::Glucose { glucose_mg_dl } => {
                self.evaluate_glucose(reading, glucose_mg_dl, &mut alerts);
            }
            BiometricValue::BloodPressure {
                systolic_mmhg,
                diastolic_mmhg,
            } => {
                self.evaluate_blood_pressure(reading, systolic_mmhg, diastolic_mmhg, &mut alerts);
            }
            BiometricValue::HeartRate { heart_rate_bpm } => {
                self.evaluate_heart_rate(reading, heart_rate_bpm, &mut alerts);
            }
            BiometricValue::Cholesterol { total_mg_dl, .. } => {
                self.evaluate_cholesterol(reading, total_mg_dl, &mut alerts);
            }
            BiometricValue::Temperature {
                temperature_celsius,
            } => {
                self.evaluate_temperature(reading, temperature_celsius, &mut alerts);
            }
            BiometricValue::Weight { weight_kg } => {
                self.evaluate_weight(reading, weight_kg, &mut alerts);
            }
        }

        if !alerts.is_empty() {
            debug!(
                user_id = %reading.user_id,
                kind = ?reading.kind(),
                alert_count = alerts.len(),
                "threshold breach detected"
            );
        }

        alerts
    }

    fn evaluate_glucose(
        &self,
        reading: &BiometricReading,
        value: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let Some(glucose) = value else { return };
        let bands = &self.thresholds.glucose;

        if glucose >= bands.critical_high_mg_dl {
            alerts.push(breach(
                reading,
                &GLUCOSE_SPIKE,
                glucose,
                bands.critical_high_mg_dl,
            ));
        } else if glucose >= bands.warning_high_mg_dl {
            alerts.push(breach(
                reading,
                &GLUCOSE_HIGH,
                glucose,
                bands.warning_high_mg_dl,
            ));
        }

        if glucose <= bands.critical_low_mg_dl {
            alerts.push(breach(
                reading,
                &GLUCOSE_SEVERE_LOW,
                glucose,
                bands.critical_low_mg_dl,
            ));
        } else if glucose <= bands.warning_low_mg_dl {
            alerts.push(breach(
                reading,
                &GLUCOSE_LOW,
                glucose,
                bands.warning_low_mg_dl,
            ));
        }
    }

    fn evaluate_blood_pressure(
        &self,
        reading: &BiometricReading,
        systolic: Option<f64>,
        diastolic: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let bands = &self.thresholds.blood_pressure;

        // OR semantics over the pair; a missing component simply cannot fire.
        // Systolic wins the context slot when both components breach.
        let breached = |sys_bound: f64, dia_bound: f64| -> Option<(f64, f64)> {
            if let Some(sys) = systolic {
                if sys >= sys_bound {
                    return Some((sys, sys_bound));
                }
            }
            if let Some(dia) = diastolic {
                if dia >= dia_bound {
                    return Some((dia, dia_bound));
                }
            }
            None
        };

        if let Some((measured, threshold)) = breached(
            bands.critical_systolic_mmhg,
            bands.critical_diastolic_mmhg,
        ) {
            alerts.push(breach(reading, &BLOOD_PRESSURE_CRISIS, measured, threshold));
        } else if let Some((measured, threshold)) =
            breached(bands.warning_systolic_mmhg, bands.warning_diastolic_mmhg)
        {
            alerts.push(breach(reading, &BLOOD_PRESSURE_HIGH, measured, threshold));
        }
    }

    fn evaluate_heart_rate(
        &self,
        reading: &BiometricReading,
        value: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let Some(rate) = value else { return };
        let bands = &self.thresholds.heart_rate;

        if rate >= bands.critical_high_bpm {
            alerts.push(breach(
                reading,
                &HEART_RATE_SEVERE_HIGH,
                rate,
                bands.critical_high_bpm,
            ));
        } else if rate >= bands.warning_high_bpm {
            alerts.push(breach(
                reading,
                &HEART_RATE_HIGH,
                rate,
                bands.warning_high_bpm,
            ));
        }

        if rate <= bands.critical_low_bpm {
            alerts.push(breach(
                reading,
                &HEART_RATE_SEVERE_LOW,
                rate,
                bands.critical_low_bpm,
            ));
        } else if rate <= bands.warning_low_bpm {
            alerts.push(breach(reading, &HEART_RATE_LOW, rate, bands.warning_low_bpm));
        }
    }

    fn evaluate_cholesterol(
        &self,
        reading: &BiometricReading,
        total: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let Some(total) = total else { return };
        let bands = &self.thresholds.cholesterol;

        // High side only; there is no low cholesterol alert band
        if total >= bands.critical_total_mg_dl {
            alerts.push(breach(
                reading,
                &CHOLESTEROL_HIGH,
                total,
                bands.critical_total_mg_dl,
            ));
        } else if total >= bands.warning_total_mg_dl {
            alerts.push(breach(
                reading,
                &CHOLESTEROL_BORDERLINE,
                total,
                bands.warning_total_mg_dl,
            ));
        }
    }

    fn evaluate_temperature(
        &self,
        reading: &BiometricReading,
        value: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let Some(temp) = value else { return };
        let bands = &self.thresholds.temperature;

        if temp >= bands.critical_high_celsius {
            alerts.push(breach(
                reading,
                &TEMPERATURE_HIGH_FEVER,
                temp,
                bands.critical_high_celsius,
            ));
        } else if temp >= bands.warning_high_celsius {
            alerts.push(breach(
                reading,
                &TEMPERATURE_FEVER,
                temp,
                bands.warning_high_celsius,
            ));
        }

        if temp <= bands.critical_low_celsius {
            alerts.push(breach(
                reading,
                &TEMPERATURE_HYPOTHERMIA,
                temp,
                bands.critical_low_celsius,
            ));
        } else if temp <= bands.warning_low_celsius {
            alerts.push(breach(
                reading,
                &TEMPERATURE_LOW,
                temp,
                bands.warning_low_celsius,
            ));
        }
    }

    fn evaluate_weight(
        &self,
        reading: &BiometricReading,
        value: Option<f64>,
        alerts: &mut Vec<Alert>,
    ) {
        let Some(weight) = value else { return };
        let bands = &self.thresholds.weight;

        if weight >= bands.critical_high_kg {
            alerts.push(breach(
                reading,
                &WEIGHT_SEVERE_HIGH,
                weight,
                bands.critical_high_kg,
            ));
        } else if weight >= bands.warning_high_kg {
            alerts.push(breach(reading, &WEIGHT_HIGH, weight, bands.warning_high_kg));
        }

        if weight <= bands.critical_low_kg {
            alerts.push(breach(
                reading,
                &WEIGHT_SEVERE_LOW,
                weight,
                bands.critical_low_kg,
            ));
        } else if weight <= bands.warning_low_kg {
            alerts.push(breach(reading, &WEIGHT_LOW, weight, bands.warning_low_kg));
        }
    }
}
