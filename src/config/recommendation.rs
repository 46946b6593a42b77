// ABOUTME: Recommendation engine configuration for triggers, ranking, and food lists
// ABOUTME: Configures signal thresholds, suitability weights, and candidate filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Recommendation engine configuration.
//!
//! Groups the tunable inputs of the recommendation engine: which biometric
//! signals fire rule bundles, how catalog foods are scored for suitability,
//! the name lists those scores match against, and how meal candidates are
//! filtered and ranked against the day's nutrition so far.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::evaluation::clinical_constants::{candidate_ranking, recommendation, suitability};

/// All recommendation engine tunables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Biometric signal thresholds that fire rule bundles
    pub triggers: RecommendationTriggersConfig,
    /// Food suitability scoring weights
    pub suitability: SuitabilityWeightsConfig,
    /// Output and sampling limits
    pub limits: RecommendationLimitsConfig,
    /// Name lists matched against catalog food names
    pub food_lists: FoodNameLists,
    /// Meal candidate filtering and ranking rules
    pub candidate_ranking: CandidateRankingConfig,
}

impl RecommendationConfig {
    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a sub-config validator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.triggers.validate()?;
        self.suitability.validate()?;
        self.limits.validate()?;
        self.food_lists.validate()?;
        self.candidate_ranking.validate()?;
        Ok(())
    }
}

/// Biometric signal thresholds that fire recommendation bundles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTriggersConfig {
    /// Latest glucose above this (mg/dL) fires the glucose bundle: 140.0
    pub glucose_trigger_mg_dl: f64,
    /// Latest systolic at or above this (mmHg) fires the pressure bundle: 140.0
    pub systolic_trigger_mmhg: f64,
    /// Latest diastolic at or above this (mmHg) fires the pressure bundle: 90.0
    pub diastolic_trigger_mmhg: f64,
    /// Readings older than this many days carry no signal: 7
    pub signal_window_days: i64,
}

impl RecommendationTriggersConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.glucose_trigger_mg_dl <= 0.0
            || self.systolic_trigger_mmhg <= 0.0
            || self.diastolic_trigger_mmhg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation triggers must be positive",
            ));
        }
        if self.signal_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "signal window must cover at least one day",
            ));
        }
        Ok(())
    }
}

/// Food suitability scoring weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitabilityWeightsConfig {
    /// Every catalog item starts here: 1.0
    pub base_score: f64,
    /// Bonus for matching a favored name list: 0.2
    pub favor_adjustment: f64,
    /// Penalty for matching an avoid name list: 0.3
    pub avoid_adjustment: f64,
    /// Scores never fall below this floor: 0.0
    pub min_score: f64,
}

impl SuitabilityWeightsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.favor_adjustment < 0.0 || self.avoid_adjustment < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "suitability adjustments must not be negative",
            ));
        }
        if self.base_score < self.min_score {
            return Err(ConfigError::InvalidWeights(
                "suitability base score must not sit below the floor",
            ));
        }
        Ok(())
    }
}

/// Output and sampling limits for the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimitsConfig {
    /// Catalog items scored per suitability pass: 20
    pub max_catalog_sample: usize,
    /// Food suggestions returned per request: 5
    pub max_food_suggestions: usize,
    /// Meal candidates returned per request: 5
    pub max_meal_candidates: usize,
    /// Fixed confidence attached to ingredient swaps: 0.85
    pub swap_confidence: f64,
}

impl RecommendationLimitsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_catalog_sample == 0
            || self.max_food_suggestions == 0
            || self.max_meal_candidates == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation limits must be at least one",
            ));
        }
        if !(0.0..=1.0).contains(&self.swap_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "swap confidence must be within 0-1",
            ));
        }
        Ok(())
    }
}

/// Name lists matched case-insensitively as substrings of catalog food names
///
/// Tokens stay specific enough to avoid accidental hits ("oatmeal" rather
/// than "oat", which would also match "toast").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodNameLists {
    /// Favored under an elevated glucose signal
    pub low_glycemic: Vec<String>,
    /// Avoided under an elevated glucose signal
    pub high_glycemic: Vec<String>,
    /// Favored under an elevated blood pressure signal
    pub low_sodium: Vec<String>,
    /// Avoided under an elevated blood pressure signal
    pub high_sodium: Vec<String>,
}

impl FoodNameLists {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.low_glycemic.is_empty()
            || self.high_glycemic.is_empty()
            || self.low_sodium.is_empty()
            || self.high_sodium.is_empty()
        {
            return Err(ConfigError::MissingField(
                "food name lists must not be empty",
            ));
        }
        Ok(())
    }
}

/// Meal candidate filtering and ranking rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRankingConfig {
    /// Candidate scores live on a 0 to this scale: 10.0
    pub max_score: f64,
    /// Base score assumed when the catalog entry carries no rating: 5.0
    pub default_health_score: f64,
    /// Day's carbohydrates beyond this (g) penalize carb-heavy picks: 200.0
    pub carbs_so_far_penalty_threshold_g: f64,
    /// Penalty divisor applied to a candidate's carbohydrate grams: 50.0
    pub carbs_penalty_divisor: f64,
    /// Day's protein below this (g) rewards protein-rich picks: 50.0
    pub protein_so_far_bonus_threshold_g: f64,
    /// Bonus divisor applied to a candidate's protein grams: 20.0
    pub protein_bonus_divisor: f64,
    /// Diabetes filter: candidate sugar stays below this (g): 20.0
    pub diabetes_sugar_limit_g: f64,
    /// Diabetes filter: candidate fiber exceeds this (g): 3.0
    pub diabetes_fiber_min_g: f64,
    /// Hypertension filter: candidate sodium stays below this (mg): 500.0
    pub hypertension_sodium_limit_mg: f64,
    /// High cholesterol filter: candidate fat stays below this (g): 15.0
    pub high_cholesterol_fat_limit_g: f64,
}

impl CandidateRankingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "candidate max score must be positive",
            ));
        }
        if !(0.0..=self.max_score).contains(&self.default_health_score) {
            return Err(ConfigError::ValueOutOfRange(
                "default health score must sit within the candidate scale",
            ));
        }
        if self.carbs_penalty_divisor <= 0.0 || self.protein_bonus_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "candidate ranking divisors must be positive",
            ));
        }
        Ok(())
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl Default for RecommendationTriggersConfig {
    fn default() -> Self {
        Self {
            glucose_trigger_mg_dl: recommendation::GLUCOSE_TRIGGER_MG_DL,
            systolic_trigger_mmhg: recommendation::SYSTOLIC_TRIGGER_MMHG,
            diastolic_trigger_mmhg: recommendation::DIASTOLIC_TRIGGER_MMHG,
            signal_window_days: recommendation::SIGNAL_WINDOW_DAYS,
        }
    }
}

impl Default for SuitabilityWeightsConfig {
    fn default() -> Self {
        Self {
            base_score: suitability::BASE_SCORE,
            favor_adjustment: suitability::FAVOR_ADJUSTMENT,
            avoid_adjustment: suitability::AVOID_ADJUSTMENT,
            min_score: suitability::MIN_SCORE,
        }
    }
}

impl Default for RecommendationLimitsConfig {
    fn default() -> Self {
        Self {
            max_catalog_sample: recommendation::MAX_CATALOG_SAMPLE,
            max_food_suggestions: recommendation::MAX_FOOD_SUGGESTIONS,
            max_meal_candidates: recommendation::MAX_MEAL_CANDIDATES,
            swap_confidence: recommendation::SWAP_CONFIDENCE,
        }
    }
}

impl Default for FoodNameLists {
    fn default() -> Self {
        Self {
            low_glycemic: owned_list(&[
                "oatmeal",
                "oats",
                "lentil",
                "bean",
                "quinoa",
                "greek yogurt",
                "berries",
                "apple",
                "leafy",
                "vegetable",
            ]),
            high_glycemic: owned_list(&[
                "white rice",
                "white bread",
                "potato",
                "cornflake",
                "soda",
                "candy",
                "pastry",
                "smoothie",
            ]),
            low_sodium: owned_list(&[
                "banana",
                "apple",
                "oatmeal",
                "berries",
                "greek yogurt",
                "unsalted",
                "smoothie",
            ]),
            high_sodium: owned_list(&[
                "bacon",
                "ham",
                "sausage",
                "soup",
                "pickle",
                "soy sauce",
                "chips",
                "instant noodle",
            ]),
        }
    }
}

impl Default for CandidateRankingConfig {
    fn default() -> Self {
        Self {
            max_score: candidate_ranking::MAX_SCORE,
            default_health_score: candidate_ranking::DEFAULT_HEALTH_SCORE,
            carbs_so_far_penalty_threshold_g: candidate_ranking::CARBS_SO_FAR_PENALTY_THRESHOLD_G,
            carbs_penalty_divisor: candidate_ranking::CARBS_PENALTY_DIVISOR,
            protein_so_far_bonus_threshold_g: candidate_ranking::PROTEIN_SO_FAR_BONUS_THRESHOLD_G,
            protein_bonus_divisor: candidate_ranking::PROTEIN_BONUS_DIVISOR,
            diabetes_sugar_limit_g: candidate_ranking::DIABETES_SUGAR_LIMIT_G,
            diabetes_fiber_min_g: candidate_ranking::DIABETES_FIBER_MIN_G,
            hypertension_sodium_limit_mg: candidate_ranking::HYPERTENSION_SODIUM_LIMIT_MG,
            high_cholesterol_fat_limit_g: candidate_ranking::HIGH_CHOLESTEROL_FAT_LIMIT_G,
        }
    }
}
