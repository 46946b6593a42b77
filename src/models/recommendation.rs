// ABOUTME: Recommendation and food suggestion records produced by the recommendation engine
// ABOUTME: Recommendation, RecommendationPriority, FoodSuggestion, MealCandidate, and IngredientSwap definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use crate::errors::ErrorCode;
use serde::{Deserialize, Serialize};

/// Priority of a recommendation bundle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Nice to have
    Low,
    /// Worth acting on soon
    Medium,
    /// Should act promptly
    High,
    /// Requires immediate attention
    Critical,
}

impl RecommendationPriority {
    /// Numeric rank used for descending priority ordering
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// One concrete action or food swap inside a recommendation bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAction {
    /// What to do
    pub action: String,
    /// Why it applies to this user right now
    pub rationale: String,
    /// Expected health benefit
    pub benefit: String,
}

impl SuggestedAction {
    /// Build an action from its three text parts
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        rationale: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            rationale: rationale.into(),
            benefit: benefit.into(),
        }
    }
}

/// A prioritized dietary or lifestyle recommendation bundle
///
/// Deduplicated by the (`rec_type`, `title`) pair before final ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable machine-readable recommendation type
    #[serde(rename = "type")]
    pub rec_type: String,
    /// Bundle priority
    pub priority: RecommendationPriority,
    /// Short human-readable title, part of the deduplication key
    pub title: String,
    /// Longer explanation of the recommendation
    pub description: String,
    /// Ordered concrete actions
    pub suggestions: Vec<SuggestedAction>,
}

impl Recommendation {
    /// Deduplication key: (`rec_type`, `title`)
    #[must_use]
    pub fn dedup_key(&self) -> (String, String) {
        (self.rec_type.clone(), self.title.clone())
    }
}

/// A catalog food item ranked by suitability for the user's active signals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSuggestion {
    /// Catalog food name
    pub name: String,
    /// Heuristic suitability score, floored at zero
    pub suitability: f64,
    /// Canned human-readable description for this food
    pub description: String,
    /// Energy per serving in kcal
    pub calories: f64,
    /// Carbohydrates per serving in grams
    pub carbs_g: f64,
    /// Sugar per serving in grams
    pub sugar_g: f64,
    /// Fiber per serving in grams
    pub fiber_g: f64,
    /// Sodium per serving in mg
    pub sodium_mg: f64,
}

/// Recommendations plus food suggestions for one request
///
/// A dependency failure yields empty lists and a machine-readable error
/// code; callers treat that as "no recommendations available".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Deduplicated, priority-ordered recommendation bundles
    pub recommendations: Vec<Recommendation>,
    /// Top catalog foods ranked by suitability
    pub suggestions: Vec<FoodSuggestion>,
    /// Set when evaluation degraded to an empty result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl RecommendationResponse {
    /// Empty response carrying a degraded-path error indicator
    #[must_use]
    pub const fn degraded(code: ErrorCode) -> Self {
        Self {
            recommendations: Vec::new(),
            suggestions: Vec::new(),
            error_code: Some(code),
        }
    }
}

/// A catalog meal scored against the day's remaining nutritional needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCandidate {
    /// Catalog meal name
    pub name: String,
    /// Adjusted score on a 0-10 scale, one decimal
    pub score: f64,
    /// Catalog description, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Energy per serving in kcal
    pub calories: f64,
    /// Protein per serving in grams
    pub protein_g: f64,
    /// Carbohydrates per serving in grams
    pub carbs_g: f64,
    /// Fat per serving in grams
    pub fat_g: f64,
    /// Fiber per serving in grams
    pub fiber_g: f64,
    /// Sugar per serving in grams
    pub sugar_g: f64,
    /// Sodium per serving in mg
    pub sodium_mg: f64,
}

/// A healthier substitute for a single ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSwap {
    /// Ingredient the user asked about
    pub current: String,
    /// Suggested substitute
    pub suggested: String,
    /// Expected benefit of the swap
    pub benefit: String,
    /// Fixed confidence in the substitution
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ranks_descend_from_critical() {
        assert_eq!(RecommendationPriority::Critical.rank(), 4);
        assert_eq!(RecommendationPriority::High.rank(), 3);
        assert_eq!(RecommendationPriority::Medium.rank(), 2);
        assert_eq!(RecommendationPriority::Low.rank(), 1);
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = Recommendation {
            rec_type: "glucose_management".into(),
            priority: RecommendationPriority::High,
            title: "Manage Blood Sugar".into(),
            description: "Recent glucose readings are elevated".into(),
            suggestions: vec![],
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "glucose_management");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn test_degraded_response_is_empty_with_code() {
        let response = RecommendationResponse::degraded(ErrorCode::DataStoreUnavailable);
        assert!(response.recommendations.is_empty());
        assert!(response.suggestions.is_empty());
        assert_eq!(response.error_code, Some(ErrorCode::DataStoreUnavailable));
    }
}
