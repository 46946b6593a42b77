// ABOUTME: Recommendation engine firing condition and biometric-trend rule bundles
// ABOUTME: Ranks catalog foods by suitability, scores meal candidates, and suggests ingredient swaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Dietary recommendation generation.
//!
//! Recommendations come from two rule families evaluated over a read-only
//! snapshot: biometric trend rules (latest glucose and blood pressure inside
//! a bounded recency window) and declared-condition rules (diabetes,
//! hypertension, obesity). Fired bundles are deduplicated by their
//! (type, title) pair with the earlier bundle winning, then stably sorted by
//! descending priority rank. Food suggestions rank a bounded catalog sample
//! by a suitability heuristic driven by the active risk signals.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::{RecommendationConfig, RulesConfig};
use crate::models::{
    BiometricReading, BiometricValue, DailyNutritionTotals, FoodCatalogEntry, FoodSuggestion,
    HealthCondition, IngredientSwap, MealCandidate, MealType, Recommendation,
    RecommendationPriority, RecommendationResponse, SuggestedAction, UserHealthProfile,
};

/// Fallback description for catalog foods without a canned entry
const GENERIC_FOOD_DESCRIPTION: &str = "A balanced option for most meal plans";

/// Canned description for a catalog food, looked up by exact lowercase name
fn catalog_description(name: &str) -> Option<&'static str> {
    let description = match name.to_lowercase().as_str() {
        "oatmeal with berries" => "Slow-release oats with antioxidant-rich berries",
        "scrambled eggs with toast" => "Protein-forward breakfast with whole grain toast",
        "smoothie bowl" => "Fruit-forward bowl; watch the natural sugar content",
        "avocado toast" => "Heart-healthy fats on whole grain bread",
        "grilled chicken salad" => "Lean protein over fresh greens",
        "brown rice bowl with veggies" => "Whole grain base with fiber-rich vegetables",
        "lentil soup" => "Plant protein and fiber in one warming bowl",
        "baked salmon with vegetables" => "Omega-3 rich fish with non-starchy vegetables",
        "vegetable stir-fry" => "Colorful vegetables; mind the sauce sodium",
        "apple with almond butter" => "Fiber plus healthy fat for steady energy",
        "greek yogurt" => "High-protein, low-sugar dairy pick",
        _ => return None,
    };
    Some(description)
}

/// Fixed ingredient swap table: (current, suggested, benefit)
const SWAP_TABLE: &[(&str, &str, &str)] = &[
    ("white rice", "brown rice", "Higher fiber, lower glycemic index"),
    ("white bread", "whole wheat bread", "More fiber, better for blood sugar"),
    (
        "regular milk",
        "unsweetened almond milk",
        "Lower calories and sugar for diabetics",
    ),
    ("butter", "olive oil", "Healthier fats for cholesterol"),
    ("sugar", "stevia or monk fruit", "Zero calories, no blood sugar impact"),
    ("fried foods", "baked or grilled", "Reduces saturated fat intake"),
];

/// Active biometric risk signals extracted from recent readings
#[derive(Debug, Clone, Copy, Default)]
struct RiskSignals {
    high_glucose: bool,
    high_blood_pressure: bool,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates recommendation bundles, food suggestions, and candidate rankings
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine backed by the global rules configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RulesConfig::global().recommendation.clone(),
        }
    }

    /// Create an engine with explicit recommendation rules
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Produce prioritized recommendations and ranked food suggestions
    ///
    /// Pure over its snapshot arguments; dependency failures are the
    /// caller's concern and map to a degraded empty response there.
    #[must_use]
    pub fn recommend_from_snapshot(
        &self,
        profile: &UserHealthProfile,
        readings: &[BiometricReading],
        catalog: &[FoodCatalogEntry],
        meal_type: MealType,
    ) -> RecommendationResponse {
        let signals = self.extract_signals(readings, Utc::now());
        let recommendations = self.build_recommendations(profile, signals);
        let suggestions = self.rank_food_suggestions(catalog, meal_type, signals);

        debug!(
            user_id = %profile.user_id,
            high_glucose = signals.high_glucose,
            high_blood_pressure = signals.high_blood_pressure,
            recommendation_count = recommendations.len(),
            suggestion_count = suggestions.len(),
            "recommendations generated"
        );

        RecommendationResponse {
            recommendations,
            suggestions,
            error_code: None,
        }
    }

    /// Derive risk signals from the latest valued reading of each kind
    ///
    /// Only readings inside the recency window count. A reading whose value
    /// component is missing cannot carry a signal and is passed over in
    /// favor of the latest one that can.
    fn extract_signals(&self, readings: &[BiometricReading], now: DateTime<Utc>) -> RiskSignals {
        let triggers = &self.config.triggers;
        let in_window =
            |reading: &&BiometricReading| (now - reading.recorded_at).num_days() <= triggers.signal_window_days;

        let latest_glucose = readings
            .iter()
            .filter(in_window)
            .filter_map(|reading| match reading.value {
                BiometricValue::Glucose { glucose_mg_dl } => {
                    glucose_mg_dl.map(|value| (reading.recorded_at, value))
                }
                _ => None,
            })
            .max_by_key(|(recorded_at, _)| *recorded_at)
            .map(|(_, value)| value);

        let latest_pressure = readings
            .iter()
            .filter(in_window)
            .filter_map(|reading| match reading.value {
                BiometricValue::BloodPressure {
                    systolic_mmhg,
                    diastolic_mmhg,
                } if systolic_mmhg.is_some() || diastolic_mmhg.is_some() => {
                    Some((reading.recorded_at, systolic_mmhg, diastolic_mmhg))
                }
                _ => None,
            })
            .max_by_key(|(recorded_at, ..)| *recorded_at)
            .map(|(_, systolic, diastolic)| (systolic, diastolic));

        RiskSignals {
            high_glucose: latest_glucose.is_some_and(|value| value > triggers.glucose_trigger_mg_dl),
            high_blood_pressure: latest_pressure.is_some_and(|(systolic, diastolic)| {
                systolic.is_some_and(|value| value >= triggers.systolic_trigger_mmhg)
                    || diastolic.is_some_and(|value| value >= triggers.diastolic_trigger_mmhg)
            }),
        }
    }

    /// Fire, deduplicate, and order recommendation bundles
    fn build_recommendations(
        &self,
        profile: &UserHealthProfile,
        signals: RiskSignals,
    ) -> Vec<Recommendation> {
        let mut fired = Vec::new();

        // Trend rules fire before condition rules so their higher-priority
        // bundles win the (type, title) deduplication.
        if signals.high_glucose {
            fired.push(glucose_signal_bundle());
        }
        if signals.high_blood_pressure {
            fired.push(blood_pressure_signal_bundle());
        }
        for condition in &profile.conditions {
            match condition {
                HealthCondition::Diabetes => fired.push(diabetes_bundle()),
                HealthCondition::Hypertension => fired.push(hypertension_bundle()),
                HealthCondition::Obesity => fired.push(obesity_bundle()),
                _ => {}
            }
        }

        let mut seen: Vec<(String, String)> = Vec::new();
        let mut deduped = Vec::new();
        for recommendation in fired {
            let key = recommendation.dedup_key();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            deduped.push(recommendation);
        }

        // Stable sort keeps firing order among equal priorities.
        deduped.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        deduped
    }

    /// Rank a bounded catalog sample by suitability under the active signals
    fn rank_food_suggestions(
        &self,
        catalog: &[FoodCatalogEntry],
        meal_type: MealType,
        signals: RiskSignals,
    ) -> Vec<FoodSuggestion> {
        let limits = &self.config.limits;

        let mut scored: Vec<(&FoodCatalogEntry, f64)> = catalog
            .iter()
            .filter(|entry| entry.meal_type.is_none_or(|slot| slot == meal_type))
            .take(limits.max_catalog_sample)
            .map(|entry| (entry, self.suitability_for(entry, signals)))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(limits.max_food_suggestions)
            .map(|(entry, suitability)| FoodSuggestion {
                name: entry.name.clone(),
                suitability: round_hundredth(suitability),
                description: catalog_description(&entry.name)
                    .unwrap_or(GENERIC_FOOD_DESCRIPTION)
                    .to_owned(),
                calories: entry.calories,
                carbs_g: entry.carbs_g,
                sugar_g: entry.sugar_g,
                fiber_g: entry.fiber_g,
                sodium_mg: entry.sodium_mg,
            })
            .collect()
    }

    /// Suitability heuristic over name-list matches, floored at the minimum
    fn suitability_for(&self, entry: &FoodCatalogEntry, signals: RiskSignals) -> f64 {
        let weights = &self.config.suitability;
        let lists = &self.config.food_lists;
        let name = entry.name.to_lowercase();
        let mut score = weights.base_score;

        if signals.high_glucose {
            if matches_any(&name, &lists.low_glycemic) {
                score += weights.favor_adjustment;
            }
            if matches_any(&name, &lists.high_glycemic) {
                score -= weights.avoid_adjustment;
            }
        }
        if signals.high_blood_pressure {
            if matches_any(&name, &lists.low_sodium) {
                score += weights.favor_adjustment;
            }
            if matches_any(&name, &lists.high_sodium) {
                score -= weights.avoid_adjustment;
            }
        }

        score.max(weights.min_score)
    }

    /// Score and rank catalog entries as candidates for one meal slot
    ///
    /// Starts from the catalog health score, then adjusts for the day so
    /// far when totals are supplied: a carb-heavy day penalizes carb-rich
    /// candidates, a protein-light day favors protein-rich ones. Condition
    /// filters narrow the pool cumulatively; if they leave nothing, the
    /// unfiltered slot pool is ranked instead so the caller always gets
    /// candidates when the slot has any.
    #[must_use]
    pub fn rank_meal_candidates(
        &self,
        catalog: &[FoodCatalogEntry],
        meal_type: MealType,
        profile: &UserHealthProfile,
        totals: Option<&DailyNutritionTotals>,
    ) -> Vec<MealCandidate> {
        let ranking = &self.config.candidate_ranking;

        let pool: Vec<&FoodCatalogEntry> = catalog
            .iter()
            .filter(|entry| entry.meal_type.is_none_or(|slot| slot == meal_type))
            .collect();

        let mut filtered: Vec<&FoodCatalogEntry> = pool
            .iter()
            .copied()
            .filter(|entry| {
                if profile.has_condition(HealthCondition::Diabetes)
                    && (entry.sugar_g >= ranking.diabetes_sugar_limit_g
                        || entry.fiber_g <= ranking.diabetes_fiber_min_g)
                {
                    return false;
                }
                if profile.has_condition(HealthCondition::Hypertension)
                    && entry.sodium_mg >= ranking.hypertension_sodium_limit_mg
                {
                    return false;
                }
                if profile.has_condition(HealthCondition::HighCholesterol)
                    && entry.fat_g >= ranking.high_cholesterol_fat_limit_g
                {
                    return false;
                }
                true
            })
            .collect();
        if filtered.is_empty() {
            filtered = pool;
        }

        let mut scored: Vec<(&FoodCatalogEntry, f64)> = filtered
            .into_iter()
            .map(|entry| {
                let mut score = entry.health_score.unwrap_or(ranking.default_health_score);
                if let Some(totals) = totals {
                    if totals.carbs_g > ranking.carbs_so_far_penalty_threshold_g {
                        score -= entry.carbs_g / ranking.carbs_penalty_divisor;
                    }
                    if totals.protein_g < ranking.protein_so_far_bonus_threshold_g {
                        score += entry.protein_g / ranking.protein_bonus_divisor;
                    }
                }
                (entry, round_tenth(score.clamp(0.0, ranking.max_score)))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let candidates: Vec<MealCandidate> = scored
            .into_iter()
            .take(self.config.limits.max_meal_candidates)
            .map(|(entry, score)| MealCandidate {
                name: entry.name.clone(),
                score,
                description: catalog_description(&entry.name).map(str::to_owned),
                calories: entry.calories,
                protein_g: entry.protein_g,
                carbs_g: entry.carbs_g,
                fat_g: entry.fat_g,
                fiber_g: entry.fiber_g,
                sugar_g: entry.sugar_g,
                sodium_mg: entry.sodium_mg,
            })
            .collect();

        debug!(
            user_id = %profile.user_id,
            meal_type = ?meal_type,
            candidate_count = candidates.len(),
            "meal candidates ranked"
        );

        candidates
    }

    /// Look up a healthier substitute for an ingredient, if the table has one
    #[must_use]
    pub fn suggest_ingredient_swap(&self, ingredient: &str) -> Option<IngredientSwap> {
        let normalized = ingredient.trim().to_lowercase();
        SWAP_TABLE
            .iter()
            .find(|(current, _, _)| *current == normalized)
            .map(|&(current, suggested, benefit)| IngredientSwap {
                current: current.to_owned(),
                suggested: suggested.to_owned(),
                benefit: benefit.to_owned(),
                confidence: self.config.limits.swap_confidence,
            })
    }
}

fn matches_any(name: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| name.contains(needle.as_str()))
}

fn glucose_signal_bundle() -> Recommendation {
    Recommendation {
        rec_type: "glucose_management".to_owned(),
        priority: RecommendationPriority::High,
        title: "Blood Sugar Management".to_owned(),
        description: "Recent glucose readings are above the target range. Focus on foods that steady blood sugar.".to_owned(),
        suggestions: vec![
            SuggestedAction::new(
                "Choose low glycemic index foods such as oatmeal, lentils, or Greek yogurt",
                "Low glycemic index foods release glucose gradually",
                "Steadier blood sugar between meals",
            ),
            SuggestedAction::new(
                "Pair carbohydrates with protein or healthy fat",
                "Protein and fat slow carbohydrate absorption",
                "Smaller post-meal glucose spikes",
            ),
            SuggestedAction::new(
                "Take a short walk after eating",
                "Muscle activity draws down circulating glucose",
                "Lower post-meal peaks",
            ),
        ],
    }
}

fn blood_pressure_signal_bundle() -> Recommendation {
    Recommendation {
        rec_type: "blood_pressure".to_owned(),
        priority: RecommendationPriority::High,
        title: "Blood Pressure Management".to_owned(),
        description: "Recent blood pressure readings are elevated. Cutting sodium is the fastest dietary lever.".to_owned(),
        suggestions: vec![
            SuggestedAction::new(
                "Keep sodium under 1500 mg per day",
                "Sodium drives fluid retention and vascular pressure",
                "Measurable reduction in systolic pressure",
            ),
            SuggestedAction::new(
                "Fill half the plate with vegetables and fruit",
                "Potassium-rich produce offsets dietary sodium",
                "Supports healthy blood pressure",
            ),
            SuggestedAction::new(
                "Limit processed and restaurant foods",
                "Most dietary sodium comes from prepared foods",
                "Less hidden sodium intake",
            ),
        ],
    }
}

fn diabetes_bundle() -> Recommendation {
    Recommendation {
        rec_type: "glucose_management".to_owned(),
        priority: RecommendationPriority::Medium,
        title: "Blood Sugar Management".to_owned(),
        description: "Managing diabetes starts with consistent carbohydrate choices at every meal."
            .to_owned(),
        suggestions: vec![
            SuggestedAction::new(
                "Keep carbohydrates between 30 and 75 g per meal",
                "Consistent portions prevent large glucose swings",
                "More predictable readings",
            ),
            SuggestedAction::new(
                "Favor high-fiber foods at each meal",
                "Fiber slows glucose absorption",
                "Lower glycemic load per meal",
            ),
            SuggestedAction::new(
                "Limit sugary drinks and desserts",
                "Liquid sugar reaches the bloodstream fastest",
                "Fewer sharp glucose spikes",
            ),
        ],
    }
}

fn hypertension_bundle() -> Recommendation {
    Recommendation {
        rec_type: "blood_pressure".to_owned(),
        priority: RecommendationPriority::Medium,
        title: "Blood Pressure Management".to_owned(),
        description: "A declared hypertension condition calls for a lower daily sodium ceiling."
            .to_owned(),
        suggestions: vec![
            SuggestedAction::new(
                "Cook at home with fresh ingredients",
                "Home cooking controls the salt that goes in",
                "Lower daily sodium intake",
            ),
            SuggestedAction::new(
                "Season with herbs, spices, or citrus instead of salt",
                "Flavor without sodium keeps meals satisfying",
                "Easier adherence to the sodium ceiling",
            ),
            SuggestedAction::new(
                "Choose unsalted nuts and snacks",
                "Snack foods are a major hidden sodium source",
                "Fewer sodium spikes between meals",
            ),
        ],
    }
}

fn obesity_bundle() -> Recommendation {
    Recommendation {
        rec_type: "weight_management".to_owned(),
        priority: RecommendationPriority::Medium,
        title: "Weight Management".to_owned(),
        description: "Gradual calorie control with filling foods is the most sustainable approach."
            .to_owned(),
        suggestions: vec![
            SuggestedAction::new(
                "Build meals around lean protein and vegetables",
                "Protein and fiber satisfy on fewer calories",
                "Easier calorie control without hunger",
            ),
            SuggestedAction::new(
                "Watch portion sizes of calorie-dense foods",
                "Small portions of dense foods add up quickly",
                "Steady, sustainable weight change",
            ),
            SuggestedAction::new(
                "Keep a consistent meal schedule",
                "Regular meals curb impulsive snacking",
                "Fewer unplanned calories",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn profile_with(conditions: &[HealthCondition]) -> UserHealthProfile {
        let mut profile = UserHealthProfile::without_conditions(Uuid::new_v4());
        profile.conditions = conditions.to_vec();
        profile
    }

    fn entry(name: &str) -> FoodCatalogEntry {
        FoodCatalogEntry {
            name: name.to_owned(),
            ..FoodCatalogEntry::default()
        }
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::with_config(RecommendationConfig::default())
    }

    #[test]
    fn test_high_glucose_fires_management_bundle() {
        let profile = profile_with(&[]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            160.0,
            Utc::now() - Duration::days(1),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        assert_eq!(response.recommendations.len(), 1);
        let rec = &response.recommendations[0];
        assert_eq!(rec.rec_type, "glucose_management");
        assert_eq!(rec.priority, RecommendationPriority::High);
        assert!(!rec.suggestions.is_empty());
        assert!(response.error_code.is_none());
    }

    #[test]
    fn test_glucose_at_trigger_stays_quiet() {
        let profile = profile_with(&[]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            140.0,
            Utc::now() - Duration::days(1),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_stale_readings_outside_window_are_ignored() {
        let profile = profile_with(&[]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            200.0,
            Utc::now() - Duration::days(10),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_newer_normal_reading_overrides_older_spike() {
        let profile = profile_with(&[]);
        let readings = vec![
            BiometricReading::glucose(profile.user_id, 190.0, Utc::now() - Duration::days(3)),
            BiometricReading::glucose(profile.user_id, 110.0, Utc::now() - Duration::days(1)),
        ];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_condition_bundle_dedups_against_signal_bundle() {
        let profile = profile_with(&[HealthCondition::Diabetes]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            180.0,
            Utc::now() - Duration::days(1),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        let glucose_bundles: Vec<_> = response
            .recommendations
            .iter()
            .filter(|r| r.rec_type == "glucose_management")
            .collect();
        assert_eq!(glucose_bundles.len(), 1);
        // The trend-fired bundle fires first and keeps its higher priority.
        assert_eq!(glucose_bundles[0].priority, RecommendationPriority::High);
    }

    #[test]
    fn test_recommendations_sort_by_priority_with_stable_ties() {
        let profile = profile_with(&[HealthCondition::Obesity, HealthCondition::Hypertension]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            170.0,
            Utc::now() - Duration::days(2),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Dinner);

        let types: Vec<&str> = response
            .recommendations
            .iter()
            .map(|r| r.rec_type.as_str())
            .collect();
        // High-priority trend bundle first, then the two Medium condition
        // bundles in declared order.
        assert_eq!(
            types,
            vec!["glucose_management", "weight_management", "blood_pressure"]
        );
    }

    #[test]
    fn test_suitability_favors_low_glycemic_under_high_glucose() {
        let profile = profile_with(&[]);
        let readings = vec![BiometricReading::glucose(
            profile.user_id,
            190.0,
            Utc::now() - Duration::days(1),
        )];
        let catalog = vec![
            entry("White rice"),
            entry("Oatmeal with berries"),
            entry("Grilled chicken salad"),
        ];

        let response = engine().recommend_from_snapshot(&profile,&readings, &catalog, MealType::Lunch);

        assert_eq!(response.suggestions.len(), 3);
        assert_eq!(response.suggestions[0].name, "Oatmeal with berries");
        assert!((response.suggestions[0].suitability - 1.2).abs() < 1e-9);
        assert_eq!(response.suggestions[2].name, "White rice");
        assert!((response.suggestions[2].suitability - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_suitability_never_drops_below_floor() {
        let mut config = RecommendationConfig::default();
        config.suitability.avoid_adjustment = 1.5;
        let engine = RecommendationEngine::with_config(config);

        let profile = profile_with(&[]);
        let readings = vec![
            BiometricReading::glucose(profile.user_id, 200.0, Utc::now() - Duration::days(1)),
            BiometricReading::blood_pressure(
                profile.user_id,
                150.0,
                95.0,
                Utc::now() - Duration::days(1),
            ),
        ];
        // Matches both avoid lists: white rice (glycemic) and soup (sodium).
        let catalog = vec![entry("White rice soup")];

        let response = engine.recommend_from_snapshot(&profile,&readings, &catalog, MealType::Dinner);

        assert!((response.suggestions[0].suitability - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_diastolic_component_alone_raises_pressure_signal() {
        let profile = profile_with(&[]);
        let readings = vec![BiometricReading::new(
            profile.user_id,
            BiometricValue::BloodPressure {
                systolic_mmhg: None,
                diastolic_mmhg: Some(95.0),
            },
            Utc::now() - Duration::days(1),
        )];

        let response = engine().recommend_from_snapshot(&profile,&readings, &[], MealType::Lunch);

        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].rec_type, "blood_pressure");
    }

    #[test]
    fn test_meal_slot_filter_keeps_untagged_entries() {
        let profile = profile_with(&[]);
        let mut tagged = entry("Baked salmon with vegetables");
        tagged.meal_type = Some(MealType::Dinner);
        let mut breakfast = entry("Oatmeal with berries");
        breakfast.meal_type = Some(MealType::Breakfast);
        let catalog = vec![tagged, breakfast, entry("Greek yogurt")];

        let response = engine().recommend_from_snapshot(&profile,&[], &catalog, MealType::Breakfast);

        let names: Vec<&str> = response
            .suggestions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Oatmeal with berries", "Greek yogurt"]);
    }

    #[test]
    fn test_unknown_food_gets_generic_description() {
        let profile = profile_with(&[]);
        let catalog = vec![entry("Mystery casserole")];

        let response = engine().recommend_from_snapshot(&profile,&[], &catalog, MealType::Dinner);

        assert_eq!(response.suggestions[0].description, GENERIC_FOOD_DESCRIPTION);
    }

    #[test]
    fn test_candidates_rank_by_health_score() {
        let profile = profile_with(&[]);
        let mut salmon = entry("Baked salmon with vegetables");
        salmon.health_score = Some(9.2);
        let mut eggs = entry("Scrambled eggs with toast");
        eggs.health_score = Some(7.2);
        let unrated = entry("Mystery casserole");

        let candidates = engine().rank_meal_candidates(
            &[eggs, unrated, salmon],
            MealType::Dinner,
            &profile,
            None,
        );

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Baked salmon with vegetables",
                "Scrambled eggs with toast",
                "Mystery casserole"
            ]
        );
        // Unrated entries fall back to the default base score.
        assert!((candidates[2].score - 5.0).abs() < 1e-9);
        assert!(candidates[0].description.is_some());
        assert!(candidates[2].description.is_none());
    }

    #[test]
    fn test_condition_filters_fall_back_to_slot_pool_when_empty() {
        let profile = profile_with(&[HealthCondition::Diabetes]);
        let mut sugary = entry("Smoothie bowl");
        sugary.sugar_g = 28.0;
        sugary.fiber_g = 6.0;
        sugary.health_score = Some(7.8);

        let candidates =
            engine().rank_meal_candidates(&[sugary], MealType::Breakfast, &profile, None);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Smoothie bowl");
    }

    #[test]
    fn test_carb_heavy_day_penalizes_carb_rich_candidates() {
        let profile = profile_with(&[]);
        let mut rice_bowl = entry("Brown rice bowl with veggies");
        rice_bowl.health_score = Some(8.3);
        rice_bowl.carbs_g = 60.0;
        let totals = DailyNutritionTotals {
            carbs_g: 250.0,
            protein_g: 80.0,
            ..DailyNutritionTotals::default()
        };

        let candidates =
            engine().rank_meal_candidates(&[rice_bowl], MealType::Lunch, &profile, Some(&totals));

        // 8.3 - 60/50 = 7.1, rounded to one decimal.
        assert!((candidates[0].score - 7.1).abs() < 1e-9);
    }

    #[test]
    fn test_swap_lookup_normalizes_case_and_whitespace() {
        let swap = engine().suggest_ingredient_swap("  White Rice ").unwrap();
        assert_eq!(swap.suggested, "brown rice");
        assert!((swap.confidence - 0.85).abs() < f64::EPSILON);

        assert!(engine().suggest_ingredient_swap("quinoa").is_none());
    }
}
