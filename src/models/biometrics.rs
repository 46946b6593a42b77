// ABOUTME: Biometric reading models for clinical threshold evaluation
// ABOUTME: BiometricReading, BiometricValue, and BiometricKind definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use super::de;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of biometric measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiometricKind {
    /// Blood glucose concentration
    Glucose,
    /// Systolic/diastolic blood pressure pair
    BloodPressure,
    /// Resting heart rate
    HeartRate,
    /// Blood cholesterol panel
    Cholesterol,
    /// Body temperature
    Temperature,
    /// Body weight
    Weight,
}

impl BiometricKind {
    /// Canonical measurement unit for this kind
    ///
    /// Every alert generated from a reading of this kind carries this unit in
    /// its context block.
    #[must_use]
    pub const fn canonical_unit(self) -> &'static str {
        match self {
            Self::Glucose | Self::Cholesterol => "mg/dL",
            Self::BloodPressure => "mmHg",
            Self::HeartRate => "bpm",
            Self::Temperature => "°C",
            Self::Weight => "kg",
        }
    }
}

/// Measured value payload, tagged by biometric kind
///
/// Individual numeric fields are optional: ingestion collaborators may
/// deliver partial records, and an absent value skips the affected threshold
/// check instead of failing the whole reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BiometricValue {
    /// Blood glucose in mg/dL
    Glucose {
        /// Measured glucose concentration
        #[serde(default, deserialize_with = "de::lenient_f64")]
        glucose_mg_dl: Option<f64>,
    },
    /// Blood pressure pair in mmHg
    BloodPressure {
        /// Systolic pressure
        #[serde(default, deserialize_with = "de::lenient_f64")]
        systolic_mmhg: Option<f64>,
        /// Diastolic pressure
        #[serde(default, deserialize_with = "de::lenient_f64")]
        diastolic_mmhg: Option<f64>,
    },
    /// Heart rate in beats per minute
    HeartRate {
        /// Measured heart rate
        #[serde(default, deserialize_with = "de::lenient_f64")]
        heart_rate_bpm: Option<f64>,
    },
    /// Cholesterol panel in mg/dL
    Cholesterol {
        /// Total cholesterol
        #[serde(default, deserialize_with = "de::lenient_f64")]
        total_mg_dl: Option<f64>,
        /// LDL fraction, when the panel includes it
        #[serde(default, deserialize_with = "de::lenient_f64")]
        ldl_mg_dl: Option<f64>,
    },
    /// Body temperature in °C
    Temperature {
        /// Measured core temperature
        #[serde(default, deserialize_with = "de::lenient_f64")]
        temperature_celsius: Option<f64>,
    },
    /// Body weight in kg
    Weight {
        /// Measured weight
        #[serde(default, deserialize_with = "de::lenient_f64")]
        weight_kg: Option<f64>,
    },
}

impl BiometricValue {
    /// The biometric kind this value belongs to
    #[must_use]
    pub const fn kind(&self) -> BiometricKind {
        match self {
            Self::Glucose { .. } => BiometricKind::Glucose,
            Self::BloodPressure { .. } => BiometricKind::BloodPressure,
            Self::HeartRate { .. } => BiometricKind::HeartRate,
            Self::Cholesterol { .. } => BiometricKind::Cholesterol,
            Self::Temperature { .. } => BiometricKind::Temperature,
            Self::Weight { .. } => BiometricKind::Weight,
        }
    }
}

/// One immutable biometric reading produced by manual entry or device sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricReading {
    /// Unique identifier for this reading
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Kind tag plus measured value payload
    #[serde(flatten)]
    pub value: BiometricValue,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
}

impl BiometricReading {
    /// Create a reading with a fresh identifier
    #[must_use]
    pub fn new(user_id: Uuid, value: BiometricValue, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            value,
            recorded_at,
        }
    }

    /// Convenience constructor for a glucose reading
    #[must_use]
    pub fn glucose(user_id: Uuid, glucose_mg_dl: f64, recorded_at: DateTime<Utc>) -> Self {
        Self::new(
            user_id,
            BiometricValue::Glucose {
                glucose_mg_dl: Some(glucose_mg_dl),
            },
            recorded_at,
        )
    }

    /// Convenience constructor for a blood pressure reading
    #[must_use]
    pub fn blood_pressure(
        user_id: Uuid,
        systolic_mmhg: f64,
        diastolic_mmhg: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            user_id,
            BiometricValue::BloodPressure {
                systolic_mmhg: Some(systolic_mmhg),
                diastolic_mmhg: Some(diastolic_mmhg),
            },
            recorded_at,
        )
    }

    /// Convenience constructor for a heart rate reading
    #[must_use]
    pub fn heart_rate(user_id: Uuid, heart_rate_bpm: f64, recorded_at: DateTime<Utc>) -> Self {
        Self::new(
            user_id,
            BiometricValue::HeartRate {
                heart_rate_bpm: Some(heart_rate_bpm),
            },
            recorded_at,
        )
    }

    /// The biometric kind of this reading
    #[must_use]
    pub const fn kind(&self) -> BiometricKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_serializes_with_kind_tag() {
        let reading = BiometricReading::glucose(Uuid::new_v4(), 185.0, Utc::now());
        let json = serde_json::to_value(&reading).unwrap();

        assert_eq!(json["kind"], "glucose");
        assert_eq!(json["value"]["glucose_mg_dl"], 185.0);
    }

    #[test]
    fn test_partial_payload_deserializes_to_absent_value() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "kind": "glucose",
            "value": {},
            "recorded_at": Utc::now(),
        });

        let reading: BiometricReading = serde_json::from_value(json).unwrap();
        match reading.value {
            BiometricValue::Glucose { glucose_mg_dl } => assert!(glucose_mg_dl.is_none()),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_numeric_value_becomes_absent() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "kind": "blood_pressure",
            "value": { "systolic_mmhg": "not a number", "diastolic_mmhg": 125 },
            "recorded_at": Utc::now(),
        });

        let reading: BiometricReading = serde_json::from_value(json).unwrap();
        match reading.value {
            BiometricValue::BloodPressure {
                systolic_mmhg,
                diastolic_mmhg,
            } => {
                assert!(systolic_mmhg.is_none());
                assert_eq!(diastolic_mmhg, Some(125.0));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_canonical_units_match_kind() {
        assert_eq!(BiometricKind::Glucose.canonical_unit(), "mg/dL");
        assert_eq!(BiometricKind::BloodPressure.canonical_unit(), "mmHg");
        assert_eq!(BiometricKind::Weight.canonical_unit(), "kg");
    }
}
