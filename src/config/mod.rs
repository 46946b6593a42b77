// ABOUTME: Rules configuration module for threshold, guideline, and engine settings
// ABOUTME: Orchestrates domain-specific configs with env overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Rules Configuration Module
//!
//! Provides type-safe, load-time validated configuration for every rule set
//! the evaluation pipeline applies.
//!
//! # Module Structure
//!
//! Configuration is organized into domain-specific modules:
//! - `thresholds` - Per-kind biometric alert bands and daily intake limits
//! - `guidelines` - WHO/AHA/ADA compliance blocks and scoring weights
//! - `recommendation` - Signal triggers, suitability weights, and food lists
//!
//! The assembled [`RulesConfig`] is loaded once per process: defaults come
//! from [`crate::evaluation::clinical_constants`], `VITALIS_*` environment
//! variables may override individual values, and cross-field validation runs
//! before the config is published through [`RulesConfig::global`].

pub mod error;
pub mod guidelines;
pub mod recommendation;
pub mod thresholds;

pub use error::ConfigError;
pub use guidelines::{
    AdaGuidelineConfig, AhaGuidelineConfig, ComplianceScoringConfig, GuidelineConfig,
    WhoGuidelineConfig,
};
pub use recommendation::{
    CandidateRankingConfig, FoodNameLists, RecommendationConfig, RecommendationLimitsConfig,
    RecommendationTriggersConfig, SuitabilityWeightsConfig,
};
pub use thresholds::{
    BiometricThresholdsConfig, BloodPressureThresholds, CholesterolThresholds, DailyIntakeConfig,
    GlucoseThresholds, HeartRateThresholds, TemperatureThresholds, WeightThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Global configuration singleton
static RULES_CONFIG: OnceLock<RulesConfig<true>> = OnceLock::new();

/// Main rules configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig<const VALIDATED: bool = false> {
    /// Biometric alert bands per kind
    pub thresholds: BiometricThresholdsConfig,
    /// Cumulative daily intake thresholds
    pub daily_intake: DailyIntakeConfig,
    /// Guideline compliance blocks and scoring weights
    pub guidelines: GuidelineConfig,
    /// Recommendation engine tunables
    pub recommendation: RecommendationConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl RulesConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RULES_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load rules config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparseable
    /// value or the assembled configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.daily_intake.validate()?;
        self.guidelines.validate()?;
        self.recommendation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    // Long function: systematic env var parsing for every rule subsystem
    #[allow(clippy::too_many_lines)]
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Glucose band overrides
        Self::apply_env_var(
            "VITALIS_GLUCOSE_CRITICAL_HIGH",
            &mut self.thresholds.glucose.critical_high_mg_dl,
        )?;
        Self::apply_env_var(
            "VITALIS_GLUCOSE_WARNING_HIGH",
            &mut self.thresholds.glucose.warning_high_mg_dl,
        )?;
        Self::apply_env_var(
            "VITALIS_GLUCOSE_WARNING_LOW",
            &mut self.thresholds.glucose.warning_low_mg_dl,
        )?;
        Self::apply_env_var(
            "VITALIS_GLUCOSE_CRITICAL_LOW",
            &mut self.thresholds.glucose.critical_low_mg_dl,
        )?;

        // Blood pressure band overrides
        Self::apply_env_var(
            "VITALIS_BP_CRITICAL_SYSTOLIC",
            &mut self.thresholds.blood_pressure.critical_systolic_mmhg,
        )?;
        Self::apply_env_var(
            "VITALIS_BP_CRITICAL_DIASTOLIC",
            &mut self.thresholds.blood_pressure.critical_diastolic_mmhg,
        )?;
        Self::apply_env_var(
            "VITALIS_BP_WARNING_SYSTOLIC",
            &mut self.thresholds.blood_pressure.warning_systolic_mmhg,
        )?;
        Self::apply_env_var(
            "VITALIS_BP_WARNING_DIASTOLIC",
            &mut self.thresholds.blood_pressure.warning_diastolic_mmhg,
        )?;

        // Heart rate band overrides
        Self::apply_env_var(
            "VITALIS_HEART_RATE_CRITICAL_HIGH",
            &mut self.thresholds.heart_rate.critical_high_bpm,
        )?;
        Self::apply_env_var(
            "VITALIS_HEART_RATE_WARNING_HIGH",
            &mut self.thresholds.heart_rate.warning_high_bpm,
        )?;
        Self::apply_env_var(
            "VITALIS_HEART_RATE_WARNING_LOW",
            &mut self.thresholds.heart_rate.warning_low_bpm,
        )?;
        Self::apply_env_var(
            "VITALIS_HEART_RATE_CRITICAL_LOW",
            &mut self.thresholds.heart_rate.critical_low_bpm,
        )?;

        // Cholesterol band overrides
        Self::apply_env_var(
            "VITALIS_CHOLESTEROL_CRITICAL",
            &mut self.thresholds.cholesterol.critical_total_mg_dl,
        )?;
        Self::apply_env_var(
            "VITALIS_CHOLESTEROL_WARNING",
            &mut self.thresholds.cholesterol.warning_total_mg_dl,
        )?;

        // Temperature band overrides
        Self::apply_env_var(
            "VITALIS_TEMPERATURE_CRITICAL_HIGH",
            &mut self.thresholds.temperature.critical_high_celsius,
        )?;
        Self::apply_env_var(
            "VITALIS_TEMPERATURE_WARNING_HIGH",
            &mut self.thresholds.temperature.warning_high_celsius,
        )?;
        Self::apply_env_var(
            "VITALIS_TEMPERATURE_WARNING_LOW",
            &mut self.thresholds.temperature.warning_low_celsius,
        )?;
        Self::apply_env_var(
            "VITALIS_TEMPERATURE_CRITICAL_LOW",
            &mut self.thresholds.temperature.critical_low_celsius,
        )?;

        // Weight band overrides
        Self::apply_env_var(
            "VITALIS_WEIGHT_CRITICAL_HIGH",
            &mut self.thresholds.weight.critical_high_kg,
        )?;
        Self::apply_env_var(
            "VITALIS_WEIGHT_WARNING_HIGH",
            &mut self.thresholds.weight.warning_high_kg,
        )?;
        Self::apply_env_var(
            "VITALIS_WEIGHT_WARNING_LOW",
            &mut self.thresholds.weight.warning_low_kg,
        )?;
        Self::apply_env_var(
            "VITALIS_WEIGHT_CRITICAL_LOW",
            &mut self.thresholds.weight.critical_low_kg,
        )?;

        // Daily intake overrides
        Self::apply_env_var(
            "VITALIS_DAILY_INTAKE_INFO_CALORIES",
            &mut self.daily_intake.info_calories,
        )?;
        Self::apply_env_var(
            "VITALIS_DAILY_INTAKE_WARNING_CALORIES",
            &mut self.daily_intake.warning_calories,
        )?;

        // Guideline limit overrides
        Self::apply_env_var(
            "VITALIS_WHO_SODIUM_LIMIT",
            &mut self.guidelines.who.sodium_limit_mg,
        )?;
        Self::apply_env_var(
            "VITALIS_AHA_SODIUM_LIMIT",
            &mut self.guidelines.aha.sodium_limit_mg,
        )?;
        Self::apply_env_var(
            "VITALIS_ADA_GLYCEMIC_LOAD_LIMIT",
            &mut self.guidelines.ada.glycemic_load_limit,
        )?;
        Self::apply_env_var(
            "VITALIS_SCORING_WARNING_BAND_RATIO",
            &mut self.guidelines.scoring.warning_band_ratio,
        )?;

        // Recommendation trigger overrides
        Self::apply_env_var(
            "VITALIS_RECOMMENDATION_GLUCOSE_TRIGGER",
            &mut self.recommendation.triggers.glucose_trigger_mg_dl,
        )?;
        Self::apply_env_var(
            "VITALIS_RECOMMENDATION_SYSTOLIC_TRIGGER",
            &mut self.recommendation.triggers.systolic_trigger_mmhg,
        )?;
        Self::apply_env_var(
            "VITALIS_RECOMMENDATION_DIASTOLIC_TRIGGER",
            &mut self.recommendation.triggers.diastolic_trigger_mmhg,
        )?;
        Self::apply_env_var(
            "VITALIS_RECOMMENDATION_SIGNAL_WINDOW_DAYS",
            &mut self.recommendation.triggers.signal_window_days,
        )?;
        Self::apply_env_var(
            "VITALIS_RECOMMENDATION_MAX_SUGGESTIONS",
            &mut self.recommendation.limits.max_food_suggestions,
        )?;

        Ok(self)
    }
}

impl Default for RulesConfig<true> {
    fn default() -> Self {
        Self {
            thresholds: BiometricThresholdsConfig::default(),
            daily_intake: DailyIntakeConfig::default(),
            guidelines: GuidelineConfig::default(),
            recommendation: RecommendationConfig::default(),
            _phantom: PhantomData,
        }
    }
}

/// Initialize the global rules configuration
///
/// # Errors
///
/// Returns an error if an environment override fails to parse or the
/// assembled configuration fails validation.
pub fn init_configs() -> Result<(), ConfigError> {
    let config = RulesConfig::load()?;

    debug!(
        glucose_critical_high = config.thresholds.glucose.critical_high_mg_dl,
        who_sodium_limit = config.guidelines.who.sodium_limit_mg,
        "rules configuration loaded"
    );

    // Publish the loaded config; a racing global() call may have won, which
    // is harmless because both sides loaded from the same environment
    let _ = RULES_CONFIG.set(config);

    info!("Rules configuration initialized successfully");
    Ok(())
}
