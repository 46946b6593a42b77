// ABOUTME: Dietary guideline configuration for meal compliance scoring
// ABOUTME: Configures WHO/AHA/ADA limit blocks and the scoring weight table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Dietary guideline configuration.
//!
//! Three independent limit blocks drive the compliance scorer: a general
//! population block (WHO style), a cardiovascular block (AHA style) applied
//! when the profile carries cardiovascular risk conditions, and a diabetes
//! block (ADA style) applied when the profile includes diabetes. The scoring
//! weights turn the resulting findings into a 0-100 score.
//!
//! # Scientific References
//!
//! - WHO sodium guideline (2012): <https://www.who.int/publications/i/item/9789241504836>
//! - WHO sugars guideline (2015): <https://www.who.int/publications/i/item/9789241549028>
//! - AHA dietary fats advisory (2017) DOI: 10.1161/CIR.0000000000000510
//! - ADA Standards of Care, nutrition therapy DOI: 10.2337/dc24-S005

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::evaluation::clinical_constants::{
    ada_guidelines, aha_guidelines, scoring, who_guidelines,
};

/// All guideline blocks plus the scoring weight table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidelineConfig {
    /// General population limits, always applied
    pub who: WhoGuidelineConfig,
    /// Cardiovascular limits, applied for at-risk profiles
    pub aha: AhaGuidelineConfig,
    /// Diabetes limits, applied when the profile includes diabetes
    pub ada: AdaGuidelineConfig,
    /// Finding-to-score weight table
    pub scoring: ComplianceScoringConfig,
}

impl GuidelineConfig {
    /// Validate every guideline block and the scoring weights
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a block validator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.who.validate()?;
        self.aha.validate()?;
        self.ada.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

/// General population (WHO-style) limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoGuidelineConfig {
    /// Daily sodium limit (mg): 2000.0
    pub sodium_limit_mg: f64,
    /// Free sugar ceiling as percent of meal energy: 10.0
    pub free_sugar_max_percent_energy: f64,
    /// Minimum fiber (g) per extrapolated reference day: 25.0
    pub fiber_min_g_per_day: f64,
}

impl WhoGuidelineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sodium_limit_mg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "WHO sodium limit must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.free_sugar_max_percent_energy) {
            return Err(ConfigError::ValueOutOfRange(
                "WHO free sugar percent must be within 0-100",
            ));
        }
        if self.fiber_min_g_per_day <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "WHO fiber minimum must be positive",
            ));
        }
        Ok(())
    }
}

/// Cardiovascular (AHA-style) limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AhaGuidelineConfig {
    /// Ideal daily sodium limit (mg): 1500.0
    pub sodium_limit_mg: f64,
    /// Saturated fat ceiling as percent of meal energy: 6.0
    pub saturated_fat_max_percent_energy: f64,
    /// Daily dietary cholesterol limit (mg): 300.0
    pub dietary_cholesterol_limit_mg: f64,
    /// Added sugar ceiling as percent of meal energy: 6.0
    pub added_sugar_max_percent_energy: f64,
}

impl AhaGuidelineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sodium_limit_mg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "AHA sodium limit must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.saturated_fat_max_percent_energy) {
            return Err(ConfigError::ValueOutOfRange(
                "AHA saturated fat percent must be within 0-100",
            ));
        }
        if self.dietary_cholesterol_limit_mg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "AHA cholesterol limit must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.added_sugar_max_percent_energy) {
            return Err(ConfigError::ValueOutOfRange(
                "AHA added sugar percent must be within 0-100",
            ));
        }
        Ok(())
    }
}

/// Diabetes (ADA-style) limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaGuidelineConfig {
    /// Lower end of the per-meal carbohydrate band (g): 30.0
    pub carb_per_meal_min_g: f64,
    /// Upper end of the per-meal carbohydrate band (g): 75.0
    pub carb_per_meal_max_g: f64,
    /// Per-meal glycemic load limit: 20.0
    pub glycemic_load_limit: f64,
    /// Assumed glycemic index when the meal supplies none: 55.0
    pub default_glycemic_index: f64,
    /// Minimum fiber (g) per extrapolated reference day: 28.0
    pub fiber_min_g_per_day: f64,
}

impl AdaGuidelineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.carb_per_meal_min_g >= self.carb_per_meal_max_g {
            return Err(ConfigError::InvalidRange(
                "ADA carbohydrate band minimum must sit below the maximum",
            ));
        }
        if self.glycemic_load_limit <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ADA glycemic load limit must be positive",
            ));
        }
        if !(0.0..=110.0).contains(&self.default_glycemic_index) {
            return Err(ConfigError::ValueOutOfRange(
                "ADA default glycemic index must be within 0-110",
            ));
        }
        if self.fiber_min_g_per_day <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ADA fiber minimum must be positive",
            ));
        }
        Ok(())
    }
}

/// Weights that turn compliance findings into a 0-100 score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceScoringConfig {
    /// Reference daily energy intake (kcal) for fiber extrapolation: 2000.0
    pub reference_daily_calories: f64,
    /// Fraction of an upper limit where compliant becomes warning: 0.8
    pub warning_band_ratio: f64,
    /// Penalty per critical-severity violation: 15
    pub critical_violation_penalty: i32,
    /// Penalty per high-severity violation: 10
    pub high_violation_penalty: i32,
    /// Penalty per violation of any other severity: 5
    pub default_violation_penalty: i32,
    /// Penalty per warning finding: 3
    pub warning_penalty: i32,
    /// Bonus per compliant finding: 5
    pub compliant_bonus: i32,
    /// Minimum score classified compliant: 80
    pub compliant_status_min: u8,
    /// Minimum score classified acceptable: 60
    pub acceptable_status_min: u8,
}

impl ComplianceScoringConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_daily_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "reference daily calories must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.warning_band_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "warning band ratio must be within [0, 1)",
            ));
        }
        if self.critical_violation_penalty < self.high_violation_penalty
            || self.high_violation_penalty < self.default_violation_penalty
        {
            return Err(ConfigError::InvalidWeights(
                "violation penalties must not increase as severity drops",
            ));
        }
        if self.default_violation_penalty <= 0 || self.warning_penalty <= 0 {
            return Err(ConfigError::InvalidWeights(
                "violation and warning penalties must be positive",
            ));
        }
        if self.compliant_bonus < 0 {
            return Err(ConfigError::InvalidWeights(
                "compliant bonus must not be negative",
            ));
        }
        if self.compliant_status_min <= self.acceptable_status_min {
            return Err(ConfigError::InvalidRange(
                "compliant status floor must exceed acceptable status floor",
            ));
        }
        Ok(())
    }
}

impl Default for WhoGuidelineConfig {
    fn default() -> Self {
        Self {
            sodium_limit_mg: who_guidelines::SODIUM_LIMIT_MG,
            free_sugar_max_percent_energy: who_guidelines::FREE_SUGAR_MAX_PERCENT_ENERGY,
            fiber_min_g_per_day: who_guidelines::FIBER_MIN_G_PER_REFERENCE_DAY,
        }
    }
}

impl Default for AhaGuidelineConfig {
    fn default() -> Self {
        Self {
            sodium_limit_mg: aha_guidelines::SODIUM_LIMIT_MG,
            saturated_fat_max_percent_energy: aha_guidelines::SATURATED_FAT_MAX_PERCENT_ENERGY,
            dietary_cholesterol_limit_mg: aha_guidelines::DIETARY_CHOLESTEROL_LIMIT_MG,
            added_sugar_max_percent_energy: aha_guidelines::ADDED_SUGAR_MAX_PERCENT_ENERGY,
        }
    }
}

impl Default for AdaGuidelineConfig {
    fn default() -> Self {
        Self {
            carb_per_meal_min_g: ada_guidelines::CARB_PER_MEAL_MIN_G,
            carb_per_meal_max_g: ada_guidelines::CARB_PER_MEAL_MAX_G,
            glycemic_load_limit: ada_guidelines::GLYCEMIC_LOAD_LIMIT,
            default_glycemic_index: ada_guidelines::DEFAULT_GLYCEMIC_INDEX,
            fiber_min_g_per_day: ada_guidelines::FIBER_MIN_G_PER_REFERENCE_DAY,
        }
    }
}

impl Default for ComplianceScoringConfig {
    fn default() -> Self {
        Self {
            reference_daily_calories: scoring::REFERENCE_DAILY_KCAL,
            warning_band_ratio: scoring::WARNING_BAND_RATIO,
            critical_violation_penalty: scoring::CRITICAL_VIOLATION_PENALTY,
            high_violation_penalty: scoring::HIGH_VIOLATION_PENALTY,
            default_violation_penalty: scoring::DEFAULT_VIOLATION_PENALTY,
            warning_penalty: scoring::WARNING_PENALTY,
            compliant_bonus: scoring::COMPLIANT_BONUS,
            compliant_status_min: scoring::COMPLIANT_STATUS_MIN,
            acceptable_status_min: scoring::ACCEPTABLE_STATUS_MIN,
        }
    }
}
