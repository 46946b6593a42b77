// ABOUTME: Biometric threshold configuration for acute alert evaluation
// ABOUTME: Configures per-kind critical/warning bands and daily intake limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Biometric threshold configuration.
//!
//! Each biometric kind carries its own band struct so the defaults stay
//! auditable next to their clinical source. Values mirror
//! [`crate::evaluation::clinical_constants`] and may be overridden through
//! `VITALIS_*` environment variables at load time.
//!
//! # Clinical References
//!
//! - Glucose: ADA Standards of Care (2024) DOI: 10.2337/dc24-S006
//! - Blood pressure: ACC/AHA hypertension guideline (2017) DOI: 10.1161/HYP.0000000000000065
//! - Cholesterol: NCEP ATP III classification

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::evaluation::clinical_constants::{
    blood_pressure, cholesterol, daily_intake, glucose, heart_rate, temperature, weight,
};

/// Threshold bands for every supported biometric kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiometricThresholdsConfig {
    /// Blood glucose bands (mg/dL)
    pub glucose: GlucoseThresholds,
    /// Blood pressure bands (mmHg), high side only
    pub blood_pressure: BloodPressureThresholds,
    /// Resting heart rate bands (bpm)
    pub heart_rate: HeartRateThresholds,
    /// Total cholesterol bands (mg/dL), high side only
    pub cholesterol: CholesterolThresholds,
    /// Body temperature bands (°C)
    pub temperature: TemperatureThresholds,
    /// Body weight plausibility bands (kg)
    pub weight: WeightThresholds,
}

impl BiometricThresholdsConfig {
    /// Validate band ordering for every biometric kind
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when any kind's bands are not
    /// strictly ordered (critical outside warning on each side).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.glucose.validate()?;
        self.blood_pressure.validate()?;
        self.heart_rate.validate()?;
        self.cholesterol.validate()?;
        self.temperature.validate()?;
        self.weight.validate()?;
        Ok(())
    }
}

/// Blood glucose alert bands (mg/dL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlucoseThresholds {
    /// Critical hyperglycemia bound: 180.0
    pub critical_high_mg_dl: f64,
    /// Elevated glucose bound: 140.0
    pub warning_high_mg_dl: f64,
    /// Low glucose bound: 70.0
    pub warning_low_mg_dl: f64,
    /// Clinically significant hypoglycemia bound: 54.0
    pub critical_low_mg_dl: f64,
}

impl GlucoseThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_high_mg_dl <= self.warning_high_mg_dl {
            return Err(ConfigError::InvalidRange(
                "glucose critical_high must exceed warning_high",
            ));
        }
        if self.warning_high_mg_dl <= self.warning_low_mg_dl {
            return Err(ConfigError::InvalidRange(
                "glucose warning_high must exceed warning_low",
            ));
        }
        if self.warning_low_mg_dl <= self.critical_low_mg_dl {
            return Err(ConfigError::InvalidRange(
                "glucose warning_low must exceed critical_low",
            ));
        }
        Ok(())
    }
}

/// Blood pressure alert bands (mmHg)
///
/// Only the high side is monitored. The joint check fires when either
/// component crosses its bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodPressureThresholds {
    /// Hypertensive crisis systolic bound: 180.0
    pub critical_systolic_mmhg: f64,
    /// Hypertensive crisis diastolic bound: 120.0
    pub critical_diastolic_mmhg: f64,
    /// Stage 2 hypertension systolic bound: 140.0
    pub warning_systolic_mmhg: f64,
    /// Stage 2 hypertension diastolic bound: 90.0
    pub warning_diastolic_mmhg: f64,
}

impl BloodPressureThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_systolic_mmhg <= self.warning_systolic_mmhg {
            return Err(ConfigError::InvalidRange(
                "systolic critical bound must exceed warning bound",
            ));
        }
        if self.critical_diastolic_mmhg <= self.warning_diastolic_mmhg {
            return Err(ConfigError::InvalidRange(
                "diastolic critical bound must exceed warning bound",
            ));
        }
        Ok(())
    }
}

/// Resting heart rate alert bands (bpm)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateThresholds {
    /// Severe tachycardia bound: 150.0
    pub critical_high_bpm: f64,
    /// Tachycardia bound: 120.0
    pub warning_high_bpm: f64,
    /// Bradycardia bound: 50.0
    pub warning_low_bpm: f64,
    /// Severe bradycardia bound: 40.0
    pub critical_low_bpm: f64,
}

impl HeartRateThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_high_bpm <= self.warning_high_bpm {
            return Err(ConfigError::InvalidRange(
                "heart rate critical_high must exceed warning_high",
            ));
        }
        if self.warning_high_bpm <= self.warning_low_bpm {
            return Err(ConfigError::InvalidRange(
                "heart rate warning_high must exceed warning_low",
            ));
        }
        if self.warning_low_bpm <= self.critical_low_bpm {
            return Err(ConfigError::InvalidRange(
                "heart rate warning_low must exceed critical_low",
            ));
        }
        Ok(())
    }
}

/// Total cholesterol alert bands (mg/dL), high side only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CholesterolThresholds {
    /// High total cholesterol bound: 240.0
    pub critical_total_mg_dl: f64,
    /// Borderline high bound: 200.0
    pub warning_total_mg_dl: f64,
}

impl CholesterolThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_total_mg_dl <= self.warning_total_mg_dl {
            return Err(ConfigError::InvalidRange(
                "cholesterol critical bound must exceed warning bound",
            ));
        }
        Ok(())
    }
}

/// Body temperature alert bands (°C)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    /// High fever bound: 39.4
    pub critical_high_celsius: f64,
    /// Fever bound: 38.0
    pub warning_high_celsius: f64,
    /// Below-normal bound: 36.0
    pub warning_low_celsius: f64,
    /// Hypothermia bound: 35.0
    pub critical_low_celsius: f64,
}

impl TemperatureThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_high_celsius <= self.warning_high_celsius {
            return Err(ConfigError::InvalidRange(
                "temperature critical_high must exceed warning_high",
            ));
        }
        if self.warning_high_celsius <= self.warning_low_celsius {
            return Err(ConfigError::InvalidRange(
                "temperature warning_high must exceed warning_low",
            ));
        }
        if self.warning_low_celsius <= self.critical_low_celsius {
            return Err(ConfigError::InvalidRange(
                "temperature warning_low must exceed critical_low",
            ));
        }
        Ok(())
    }
}

/// Body weight plausibility bands (kg)
///
/// Readings outside these bands warrant follow-up rather than diagnosis,
/// so the band doubles as a sensor sanity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightThresholds {
    /// Upper follow-up bound: 160.0
    pub critical_high_kg: f64,
    /// Upper watch bound: 120.0
    pub warning_high_kg: f64,
    /// Lower watch bound: 50.0
    pub warning_low_kg: f64,
    /// Lower follow-up bound: 40.0
    pub critical_low_kg: f64,
}

impl WeightThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_high_kg <= self.warning_high_kg {
            return Err(ConfigError::InvalidRange(
                "weight critical_high must exceed warning_high",
            ));
        }
        if self.warning_high_kg <= self.warning_low_kg {
            return Err(ConfigError::InvalidRange(
                "weight warning_high must exceed warning_low",
            ));
        }
        if self.warning_low_kg <= self.critical_low_kg {
            return Err(ConfigError::InvalidRange(
                "weight warning_low must exceed critical_low",
            ));
        }
        Ok(())
    }
}

/// Cumulative daily intake alert thresholds (kcal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyIntakeConfig {
    /// Informational intake threshold: 2000.0
    pub info_calories: f64,
    /// Warning intake threshold: 2500.0
    pub warning_calories: f64,
}

impl DailyIntakeConfig {
    /// Validate that the warning threshold sits above the info threshold
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when the thresholds are not
    /// positive and strictly ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.info_calories <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "daily intake info threshold must be positive",
            ));
        }
        if self.warning_calories <= self.info_calories {
            return Err(ConfigError::InvalidRange(
                "daily intake warning threshold must exceed info threshold",
            ));
        }
        Ok(())
    }
}

impl Default for GlucoseThresholds {
    fn default() -> Self {
        Self {
            critical_high_mg_dl: glucose::CRITICAL_HIGH_MG_DL,
            warning_high_mg_dl: glucose::WARNING_HIGH_MG_DL,
            warning_low_mg_dl: glucose::WARNING_LOW_MG_DL,
            critical_low_mg_dl: glucose::CRITICAL_LOW_MG_DL,
        }
    }
}

impl Default for BloodPressureThresholds {
    fn default() -> Self {
        Self {
            critical_systolic_mmhg: blood_pressure::CRITICAL_SYSTOLIC_MMHG,
            critical_diastolic_mmhg: blood_pressure::CRITICAL_DIASTOLIC_MMHG,
            warning_systolic_mmhg: blood_pressure::WARNING_SYSTOLIC_MMHG,
            warning_diastolic_mmhg: blood_pressure::WARNING_DIASTOLIC_MMHG,
        }
    }
}

impl Default for HeartRateThresholds {
    fn default() -> Self {
        Self {
            critical_high_bpm: heart_rate::CRITICAL_HIGH_BPM,
            warning_high_bpm: heart_rate::WARNING_HIGH_BPM,
            warning_low_bpm: heart_rate::WARNING_LOW_BPM,
            critical_low_bpm: heart_rate::CRITICAL_LOW_BPM,
        }
    }
}

impl Default for CholesterolThresholds {
    fn default() -> Self {
        Self {
            critical_total_mg_dl: cholesterol::CRITICAL_HIGH_TOTAL_MG_DL,
            warning_total_mg_dl: cholesterol::WARNING_HIGH_TOTAL_MG_DL,
        }
    }
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            critical_high_celsius: temperature::CRITICAL_HIGH_CELSIUS,
            warning_high_celsius: temperature::WARNING_HIGH_CELSIUS,
            warning_low_celsius: temperature::WARNING_LOW_CELSIUS,
            critical_low_celsius: temperature::CRITICAL_LOW_CELSIUS,
        }
    }
}

impl Default for WeightThresholds {
    fn default() -> Self {
        Self {
            critical_high_kg: weight::CRITICAL_HIGH_KG,
            warning_high_kg: weight::WARNING_HIGH_KG,
            warning_low_kg: weight::WARNING_LOW_KG,
            critical_low_kg: weight::CRITICAL_LOW_KG,
        }
    }
}

impl Default for DailyIntakeConfig {
    fn default() -> Self {
        Self {
            info_calories: daily_intake::INFO_THRESHOLD_KCAL,
            warning_calories: daily_intake::WARNING_THRESHOLD_KCAL,
        }
    }
}
