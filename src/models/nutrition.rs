// ABOUTME: Meal nutrition models for guideline compliance and intake monitoring
// ABOUTME: MealType, MealNutritionProfile, FoodCatalogEntry, and DailyNutritionTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use super::de;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Aggregated per-meal nutrition record
///
/// Aggregated from ingredient-level data by an external collaborator and
/// treated as read-only input here. Absent numeric fields deserialize to
/// zero, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealNutritionProfile {
    /// Unique identifier for this meal record
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Which meal of the day this record covers
    pub meal_type: MealType,
    /// Free-form meal name, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total energy in kcal
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub calories: Option<f64>,
    /// Legacy energy field accepted when `calories` is absent
    #[serde(default, deserialize_with = "de::lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_kcal: Option<f64>,
    /// Protein in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub protein_g: f64,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub carbs_g: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub fat_g: f64,
    /// Saturated fat in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub saturated_fat_g: f64,
    /// Fiber in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub fiber_g: f64,
    /// Sugar in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub sugar_g: f64,
    /// Sodium in mg
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub sodium_mg: f64,
    /// Dietary cholesterol in mg
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub cholesterol_mg: f64,
    /// Glycemic index of the meal, when supplied by the aggregator
    #[serde(default, deserialize_with = "de::lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glycemic_index: Option<f64>,
    /// Precomputed glycemic load, else derived from carbohydrates
    #[serde(default, deserialize_with = "de::lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glycemic_load: Option<f64>,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

impl MealNutritionProfile {
    /// Create an empty meal record with every nutrient zeroed
    #[must_use]
    pub fn new(user_id: Uuid, meal_type: MealType, logged_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            meal_type,
            name: None,
            calories: None,
            energy_kcal: None,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            saturated_fat_g: 0.0,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            cholesterol_mg: 0.0,
            glycemic_index: None,
            glycemic_load: None,
            logged_at,
        }
    }

    /// Energy for this meal: primary field, else legacy alias, else zero
    #[must_use]
    pub fn effective_calories(&self) -> f64 {
        self.calories.or(self.energy_kcal).unwrap_or(0.0)
    }
}

/// Catalog food item used for suitability ranking and meal suggestions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    /// Food name, the lookup key for canned descriptions
    pub name: String,
    /// Energy per serving in kcal
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub calories: f64,
    /// Protein per serving in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub protein_g: f64,
    /// Carbohydrates per serving in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub carbs_g: f64,
    /// Fat per serving in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub fat_g: f64,
    /// Fiber per serving in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub fiber_g: f64,
    /// Sugar per serving in grams
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub sugar_g: f64,
    /// Sodium per serving in mg
    #[serde(default, deserialize_with = "de::lenient_f64_or_zero")]
    pub sodium_mg: f64,
    /// Catalog-supplied base health score on a 0-10 scale, when rated
    #[serde(default, deserialize_with = "de::lenient_f64")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    /// Meal slot this entry is catalogued under, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Catalog description, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Running nutrition totals across a set of meals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DailyNutritionTotals {
    /// Total energy in kcal
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Total sugar in grams
    pub sugar_g: f64,
    /// Total sodium in mg
    pub sodium_mg: f64,
}

impl DailyNutritionTotals {
    /// Sum totals over a day's meals
    ///
    /// Calories fall back to the legacy energy field per meal, defaulting to
    /// zero when both are absent.
    #[must_use]
    pub fn from_meals(meals: &[MealNutritionProfile]) -> Self {
        meals.iter().fold(Self::default(), |mut totals, meal| {
            totals.calories += meal.effective_calories();
            totals.protein_g += meal.protein_g;
            totals.carbs_g += meal.carbs_g;
            totals.fat_g += meal.fat_g;
            totals.sugar_g += meal.sugar_g;
            totals.sodium_mg += meal.sodium_mg;
            totals
        })
    }
}
