// ABOUTME: Guideline compliance scorer grading meals against WHO, AHA, and ADA limits
// ABOUTME: Produces a structured report with findings, a 0-100 score, and remediation advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Nutritional guideline compliance scoring.
//!
//! A meal is graded against up to three guideline blocks in a fixed order:
//! WHO always, AHA when the profile carries cardiovascular risk, ADA when it
//! carries diabetes. Upper-limit checks classify into violation above the
//! limit, warning inside the band above `warning_band_ratio` of the limit,
//! and compliant below it. Lower-bound shortfalls (fiber, the ADA carb
//! minimum) surface as warnings. Percent-of-energy and per-2000-kcal checks
//! are skipped entirely when the meal reports no energy, so an empty log can
//! never divide by zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GuidelineConfig, RulesConfig};
use crate::evaluation::clinical_constants::energy;
use crate::models::{HealthCondition, MealNutritionProfile, UserHealthProfile};

/// Guideline body a finding was graded under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guideline {
    /// World Health Organization daily intake guidance
    #[serde(rename = "WHO")]
    Who,
    /// American Heart Association cardiovascular guidance
    #[serde(rename = "AHA")]
    Aha,
    /// American Diabetes Association glycemic guidance
    #[serde(rename = "ADA")]
    Ada,
}

impl Guideline {
    /// Short label used in finding messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Who => "WHO",
            Self::Aha => "AHA",
            Self::Ada => "ADA",
        }
    }
}

/// Severity attached to a violation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingSeverity {
    /// Immediate clinical concern
    Critical,
    /// Strongly outside guideline limits
    High,
    /// Moderately outside guideline limits
    Moderate,
    /// Minor deviation
    Low,
}

/// One graded parameter check from a guideline block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceFinding {
    /// Guideline body that defined the limit
    pub guideline: Guideline,
    /// Nutritional parameter that was checked
    pub parameter: String,
    /// Value the check compared, in the parameter's native unit
    pub measured: f64,
    /// Guideline limit the value was compared against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    /// Violation severity; absent on warnings and compliant findings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<FindingSeverity>,
    /// Human-readable summary of the check outcome
    pub message: String,
}

impl ComplianceFinding {
    fn new(guideline: Guideline, parameter: &str, measured: f64, limit: f64, message: String) -> Self {
        Self {
            guideline,
            parameter: parameter.to_owned(),
            measured,
            limit: Some(limit),
            severity: None,
            message,
        }
    }
}

/// Overall compliance grade derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Score at or above the compliant cutoff
    Compliant,
    /// Score in the acceptable band below compliant
    Acceptable,
    /// Score below the acceptable cutoff
    NonCompliant,
}

/// Remediation actions for one nutritional category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationAdvice {
    /// Nutritional category the advice addresses
    pub category: String,
    /// Concrete dietary adjustments, most impactful first
    pub actions: Vec<String>,
}

/// Full compliance report for a single meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Aggregate score clamped to 0-100
    pub overall_score: u8,
    /// Grade band the score falls into
    pub status: ComplianceStatus,
    /// Checks that exceeded a guideline limit
    pub violations: Vec<ComplianceFinding>,
    /// Checks inside the warning band or short of a lower bound
    pub warnings: Vec<ComplianceFinding>,
    /// Checks that met their guideline
    pub compliant: Vec<ComplianceFinding>,
    /// Remediation advice grouped by category, one entry per category
    pub recommendations: Vec<RemediationAdvice>,
}

/// Where an upper-limit check landed relative to its band
#[derive(Clone, Copy, PartialEq, Eq)]
enum BandOutcome {
    Violation,
    Warning,
    Compliant,
}

/// Findings accumulated across the guideline blocks
#[derive(Default)]
struct FindingLists {
    violations: Vec<ComplianceFinding>,
    warnings: Vec<ComplianceFinding>,
    compliant: Vec<ComplianceFinding>,
}

impl FindingLists {
    fn push(&mut self, outcome: BandOutcome, severity: FindingSeverity, mut finding: ComplianceFinding) {
        match outcome {
            BandOutcome::Violation => {
                finding.severity = Some(severity);
                self.violations.push(finding);
            }
            BandOutcome::Warning => self.warnings.push(finding),
            BandOutcome::Compliant => self.compliant.push(finding),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Grades meals against the configured guideline blocks
pub struct ComplianceScorer {
    guidelines: GuidelineConfig,
}

impl Default for ComplianceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplianceScorer {
    /// Create a scorer backed by the global rules configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            guidelines: RulesConfig::global().guidelines.clone(),
        }
    }

    /// Create a scorer with explicit guideline limits
    #[must_use]
    pub const fn with_config(guidelines: GuidelineConfig) -> Self {
        Self { guidelines }
    }

    /// Score one meal against every guideline block the profile activates
    ///
    /// The WHO block always runs; AHA runs only for profiles with
    /// cardiovascular risk and ADA only for diabetic profiles, so a finding
    /// list never mentions a guideline the user is not held to.
    #[must_use]
    pub fn score_meal(
        &self,
        meal: &MealNutritionProfile,
        profile: &UserHealthProfile,
    ) -> ComplianceReport {
        let mut lists = FindingLists::default();
        let calories = meal.effective_calories();

        if calories <= 0.0 {
            debug!(
                user_id = %meal.user_id,
                "meal reports no energy, skipping energy-relative checks"
            );
        }

        self.check_who(meal, calories, &mut lists);
        if profile.has_cardiovascular_risk() {
            self.check_aha(meal, calories, &mut lists);
        }
        if profile.has_condition(HealthCondition::Diabetes) {
            self.check_ada(meal, calories, &mut lists);
        }

        let overall_score = self.overall_score(&lists);
        let status = self.status_for(overall_score);
        let recommendations = remediation_for(&lists);

        debug!(
            user_id = %meal.user_id,
            score = overall_score,
            violations = lists.violations.len(),
            warnings = lists.warnings.len(),
            "meal compliance scored"
        );

        ComplianceReport {
            overall_score,
            status,
            violations: lists.violations,
            warnings: lists.warnings,
            compliant: lists.compliant,
            recommendations,
        }
    }

    fn check_who(&self, meal: &MealNutritionProfile, calories: f64, lists: &mut FindingLists) {
        let who = &self.guidelines.who;

        let sodium = meal.sodium_mg;
        let outcome = self.classify_upper(sodium, who.sodium_limit_mg);
        let message = match outcome {
            BandOutcome::Violation => format!(
                "Sodium {sodium:.0} mg exceeds the WHO {:.0} mg daily limit",
                who.sodium_limit_mg
            ),
            BandOutcome::Warning => format!(
                "Sodium {sodium:.0} mg approaches the WHO {:.0} mg daily limit",
                who.sodium_limit_mg
            ),
            BandOutcome::Compliant => format!(
                "Sodium {sodium:.0} mg is within the WHO {:.0} mg daily limit",
                who.sodium_limit_mg
            ),
        };
        lists.push(
            outcome,
            FindingSeverity::High,
            ComplianceFinding::new(Guideline::Who, "sodium", sodium, who.sodium_limit_mg, message),
        );

        if calories > 0.0 {
            let percent = round_tenth(
                meal.sugar_g * energy::KCAL_PER_GRAM_CARBOHYDRATE / calories * 100.0,
            );
            let limit = who.free_sugar_max_percent_energy;
            let outcome = self.classify_upper(percent, limit);
            let message = match outcome {
                BandOutcome::Violation => format!(
                    "Sugar supplies {percent:.1}% of energy, above the WHO {limit:.0}% limit"
                ),
                BandOutcome::Warning => format!(
                    "Sugar supplies {percent:.1}% of energy, close to the WHO {limit:.0}% limit"
                ),
                BandOutcome::Compliant => format!(
                    "Sugar supplies {percent:.1}% of energy, within the WHO {limit:.0}% limit"
                ),
            };
            lists.push(
                outcome,
                FindingSeverity::Moderate,
                ComplianceFinding::new(Guideline::Who, "sugar", percent, limit, message),
            );

            self.check_fiber(meal, calories, Guideline::Who, who.fiber_min_g_per_day, lists);
        }
    }

    fn check_aha(&self, meal: &MealNutritionProfile, calories: f64, lists: &mut FindingLists) {
        let aha = &self.guidelines.aha;

        let sodium = meal.sodium_mg;
        let outcome = self.classify_upper(sodium, aha.sodium_limit_mg);
        let message = match outcome {
            BandOutcome::Violation => format!(
                "Sodium {sodium:.0} mg exceeds the AHA {:.0} mg cardiovascular limit",
                aha.sodium_limit_mg
            ),
            BandOutcome::Warning => format!(
                "Sodium {sodium:.0} mg approaches the AHA {:.0} mg cardiovascular limit",
                aha.sodium_limit_mg
            ),
            BandOutcome::Compliant => format!(
                "Sodium {sodium:.0} mg is within the AHA {:.0} mg cardiovascular limit",
                aha.sodium_limit_mg
            ),
        };
        lists.push(
            outcome,
            FindingSeverity::High,
            ComplianceFinding::new(Guideline::Aha, "sodium", sodium, aha.sodium_limit_mg, message),
        );

        if calories > 0.0 {
            let percent =
                round_tenth(meal.saturated_fat_g * energy::KCAL_PER_GRAM_FAT / calories * 100.0);
            let limit = aha.saturated_fat_max_percent_energy;
            let outcome = self.classify_upper(percent, limit);
            let message = match outcome {
                BandOutcome::Violation => format!(
                    "Saturated fat supplies {percent:.1}% of energy, above the AHA {limit:.0}% limit"
                ),
                BandOutcome::Warning => format!(
                    "Saturated fat supplies {percent:.1}% of energy, close to the AHA {limit:.0}% limit"
                ),
                BandOutcome::Compliant => format!(
                    "Saturated fat supplies {percent:.1}% of energy, within the AHA {limit:.0}% limit"
                ),
            };
            lists.push(
                outcome,
                FindingSeverity::High,
                ComplianceFinding::new(Guideline::Aha, "saturated_fat", percent, limit, message),
            );
        }

        let cholesterol = meal.cholesterol_mg;
        let limit = aha.dietary_cholesterol_limit_mg;
        let outcome = self.classify_upper(cholesterol, limit);
        let message = match outcome {
            BandOutcome::Violation => format!(
                "Dietary cholesterol {cholesterol:.0} mg exceeds the AHA {limit:.0} mg limit"
            ),
            BandOutcome::Warning => format!(
                "Dietary cholesterol {cholesterol:.0} mg approaches the AHA {limit:.0} mg limit"
            ),
            BandOutcome::Compliant => format!(
                "Dietary cholesterol {cholesterol:.0} mg is within the AHA {limit:.0} mg limit"
            ),
        };
        lists.push(
            outcome,
            FindingSeverity::Moderate,
            ComplianceFinding::new(Guideline::Aha, "cholesterol", cholesterol, limit, message),
        );

        if calories > 0.0 {
            let percent = round_tenth(
                meal.sugar_g * energy::KCAL_PER_GRAM_CARBOHYDRATE / calories * 100.0,
            );
            let limit = aha.added_sugar_max_percent_energy;
            let outcome = self.classify_upper(percent, limit);
            let message = match outcome {
                BandOutcome::Violation => format!(
                    "Added sugar supplies {percent:.1}% of energy, above the AHA {limit:.0}% limit"
                ),
                BandOutcome::Warning => format!(
                    "Added sugar supplies {percent:.1}% of energy, close to the AHA {limit:.0}% limit"
                ),
                BandOutcome::Compliant => format!(
                    "Added sugar supplies {percent:.1}% of energy, within the AHA {limit:.0}% limit"
                ),
            };
            lists.push(
                outcome,
                FindingSeverity::Moderate,
                ComplianceFinding::new(Guideline::Aha, "added_sugar", percent, limit, message),
            );
        }
    }

    fn check_ada(&self, meal: &MealNutritionProfile, calories: f64, lists: &mut FindingLists) {
        let ada = &self.guidelines.ada;

        // Carb band has no warning margin; inside the band is simply compliant.
        let carbs = meal.carbs_g;
        if carbs < ada.carb_per_meal_min_g {
            lists.warnings.push(ComplianceFinding::new(
                Guideline::Ada,
                "carbohydrates",
                carbs,
                ada.carb_per_meal_min_g,
                format!(
                    "Carbohydrates {carbs:.0} g fall below the ADA {:.0} g per-meal minimum, a hypoglycemia risk under glucose-lowering medication",
                    ada.carb_per_meal_min_g
                ),
            ));
        } else if carbs > ada.carb_per_meal_max_g {
            let mut finding = ComplianceFinding::new(
                Guideline::Ada,
                "carbohydrates",
                carbs,
                ada.carb_per_meal_max_g,
                format!(
                    "Carbohydrates {carbs:.0} g exceed the ADA {:.0} g per-meal maximum, raising postprandial spike risk",
                    ada.carb_per_meal_max_g
                ),
            );
            finding.severity = Some(FindingSeverity::High);
            lists.violations.push(finding);
        } else {
            lists.compliant.push(ComplianceFinding::new(
                Guideline::Ada,
                "carbohydrates",
                carbs,
                ada.carb_per_meal_max_g,
                format!(
                    "Carbohydrates {carbs:.0} g are within the ADA {:.0}-{:.0} g per-meal band",
                    ada.carb_per_meal_min_g, ada.carb_per_meal_max_g
                ),
            ));
        }

        let glycemic_index = meal.glycemic_index.unwrap_or(ada.default_glycemic_index);
        let load = round_tenth(
            meal.glycemic_load
                .unwrap_or_else(|| glycemic_index * carbs / 100.0),
        );
        let limit = ada.glycemic_load_limit;
        let outcome = self.classify_upper(load, limit);
        let message = match outcome {
            BandOutcome::Violation => {
                format!("Glycemic load {load:.1} exceeds the ADA per-meal limit of {limit:.0}")
            }
            BandOutcome::Warning => {
                format!("Glycemic load {load:.1} approaches the ADA per-meal limit of {limit:.0}")
            }
            BandOutcome::Compliant => {
                format!("Glycemic load {load:.1} is within the ADA per-meal limit of {limit:.0}")
            }
        };
        lists.push(
            outcome,
            FindingSeverity::High,
            ComplianceFinding::new(Guideline::Ada, "glycemic_load", load, limit, message),
        );

        if calories > 0.0 {
            self.check_fiber(meal, calories, Guideline::Ada, ada.fiber_min_g_per_day, lists);
        }
    }

    /// Extrapolate meal fiber to the reference day and grade the shortfall
    ///
    /// A shortfall is a warning, not a violation; lower bounds carry less
    /// clinical weight than the upper limits above.
    fn check_fiber(
        &self,
        meal: &MealNutritionProfile,
        calories: f64,
        guideline: Guideline,
        minimum: f64,
        lists: &mut FindingLists,
    ) {
        let projected =
            round_tenth(meal.fiber_g / calories * self.guidelines.scoring.reference_daily_calories);
        let label = guideline.label();

        if projected < minimum {
            lists.warnings.push(ComplianceFinding::new(
                guideline,
                "fiber",
                projected,
                minimum,
                format!(
                    "Projected fiber {projected:.1} g falls short of the {label} {minimum:.0} g daily guideline"
                ),
            ));
        } else {
            lists.compliant.push(ComplianceFinding::new(
                guideline,
                "fiber",
                projected,
                minimum,
                format!(
                    "Projected fiber {projected:.1} g meets the {label} {minimum:.0} g daily guideline"
                ),
            ));
        }
    }

    /// Classify a value against an upper limit and its warning band
    ///
    /// Strictly above the limit is a violation. At or below the limit but
    /// strictly above `limit * warning_band_ratio` is a warning, so a value
    /// exactly at the limit lands in the warning band.
    fn classify_upper(&self, measured: f64, limit: f64) -> BandOutcome {
        if measured > limit {
            BandOutcome::Violation
        } else if measured > limit * self.guidelines.scoring.warning_band_ratio {
            BandOutcome::Warning
        } else {
            BandOutcome::Compliant
        }
    }

    fn overall_score(&self, lists: &FindingLists) -> u8 {
        let scoring = &self.guidelines.scoring;
        let mut score: i32 = 100;

        for violation in &lists.violations {
            score -= match violation.severity {
                Some(FindingSeverity::Critical) => scoring.critical_violation_penalty,
                Some(FindingSeverity::High) => scoring.high_violation_penalty,
                _ => scoring.default_violation_penalty,
            };
        }
        score -= scoring.warning_penalty * saturating_count(lists.warnings.len());
        score += scoring.compliant_bonus * saturating_count(lists.compliant.len());

        score.clamp(0, 100) as u8
    }

    fn status_for(&self, score: u8) -> ComplianceStatus {
        let scoring = &self.guidelines.scoring;
        if score >= scoring.compliant_status_min {
            ComplianceStatus::Compliant
        } else if score >= scoring.acceptable_status_min {
            ComplianceStatus::Acceptable
        } else {
            ComplianceStatus::NonCompliant
        }
    }
}

fn saturating_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Map each finding parameter to the remediation category it belongs to
fn category_for(parameter: &str) -> &str {
    match parameter {
        "sugar" | "added_sugar" => "sugar",
        "saturated_fat" | "cholesterol" => "fat/cholesterol",
        "carbohydrates" | "glycemic_load" => "carbohydrate",
        other => other,
    }
}

fn actions_for(category: &str) -> Vec<String> {
    let actions: &[&str] = match category {
        "sodium" => &[
            "Choose fresh ingredients over processed or canned foods",
            "Season with herbs, spices, or citrus instead of salt",
            "Check labels and favor low-sodium versions",
        ],
        "sugar" => &[
            "Swap sweetened drinks for water or unsweetened tea",
            "Choose whole fruit over juices and desserts",
            "Try stevia or monk fruit in place of added sugar",
        ],
        "fat/cholesterol" => &[
            "Cook with olive or canola oil instead of butter",
            "Choose lean proteins such as fish or skinless poultry",
            "Bake or grill rather than fry",
        ],
        "fiber" => &[
            "Add vegetables or legumes to the next meal",
            "Choose whole grains over refined grains",
            "Keep fruit with edible skin in reach for snacks",
        ],
        "carbohydrate" => &[
            "Balance carbohydrate portions across the day",
            "Pair carbohydrates with protein or fat to slow absorption",
            "Favor low glycemic index alternatives such as brown rice or whole wheat bread",
        ],
        _ => &[],
    };
    actions.iter().map(|&action| action.to_owned()).collect()
}

/// Build remediation advice from the violation and warning findings
///
/// Violations come first so their categories take priority; each category
/// appears at most once regardless of how many findings map to it.
fn remediation_for(lists: &FindingLists) -> Vec<RemediationAdvice> {
    let mut seen: Vec<&str> = Vec::new();
    let mut advice = Vec::new();

    for finding in lists.violations.iter().chain(&lists.warnings) {
        let category = category_for(&finding.parameter);
        if seen.contains(&category) {
            continue;
        }
        seen.push(category);
        advice.push(RemediationAdvice {
            category: category.to_owned(),
            actions: actions_for(category),
        });
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::Utc;
    use uuid::Uuid;

    fn meal_with_calories(calories: Option<f64>) -> MealNutritionProfile {
        let mut meal = MealNutritionProfile::new(Uuid::new_v4(), MealType::Lunch, Utc::now());
        meal.calories = calories;
        meal
    }

    fn profile_with(conditions: &[HealthCondition]) -> UserHealthProfile {
        let mut profile = UserHealthProfile::without_conditions(Uuid::new_v4());
        profile.conditions = conditions.to_vec();
        profile
    }

    #[test]
    fn test_balanced_meal_scores_perfect() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(2000.0));
        meal.fiber_g = 30.0;

        let report = scorer.score_meal(&meal, &profile_with(&[]));

        assert_eq!(report.overall_score, 100);
        assert_eq!(report.status, ComplianceStatus::Compliant);
        assert!(report.violations.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.compliant.len(), 3);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_sodium_violation_references_daily_limit() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(2000.0));
        meal.sodium_mg = 2500.0;
        meal.fiber_g = 30.0;

        let report = scorer.score_meal(&meal, &profile_with(&[]));

        assert_eq!(report.violations.len(), 1);
        let violation = &report.violations[0];
        assert_eq!(violation.guideline, Guideline::Who);
        assert_eq!(violation.parameter, "sodium");
        assert_eq!(violation.severity, Some(FindingSeverity::High));
        assert!(violation.message.contains("2000"));

        // No cardiovascular condition, so the AHA block never ran.
        let all = report
            .violations
            .iter()
            .chain(&report.warnings)
            .chain(&report.compliant);
        assert!(all.into_iter().all(|f| f.guideline != Guideline::Aha));
    }

    #[test]
    fn test_zero_calorie_meal_skips_energy_relative_checks() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(None);
        meal.sodium_mg = 100.0;

        let report = scorer.score_meal(&meal, &profile_with(&[]));

        assert!(report.violations.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.compliant.len(), 1);
        assert_eq!(report.compliant[0].parameter, "sodium");
    }

    #[test]
    fn test_value_at_limit_lands_in_warning_band() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(2000.0));
        meal.sodium_mg = 2000.0;
        meal.fiber_g = 30.0;

        let report = scorer.score_meal(&meal, &profile_with(&[]));

        assert!(report.violations.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].parameter, "sodium");
        assert!(report.warnings[0].message.contains("approaches"));
    }

    #[test]
    fn test_cardiovascular_profile_adds_stricter_sodium_check() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(2000.0));
        meal.sodium_mg = 1600.0;
        meal.fiber_g = 30.0;

        let report = scorer.score_meal(&meal, &profile_with(&[HealthCondition::Hypertension]));

        // 1600 mg sits at exactly 80% of the WHO limit, below its warning
        // band, but above the stricter AHA 1500 mg limit.
        assert!(report
            .compliant
            .iter()
            .any(|f| f.guideline == Guideline::Who && f.parameter == "sodium"));
        assert!(report
            .violations
            .iter()
            .any(|f| f.guideline == Guideline::Aha && f.parameter == "sodium"));
    }

    #[test]
    fn test_diabetic_meal_over_carb_band_flags_glycemic_violations() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(500.0));
        meal.carbs_g = 90.0;
        meal.sugar_g = 5.0;
        meal.fiber_g = 10.0;
        meal.sodium_mg = 200.0;

        let report = scorer.score_meal(&meal, &profile_with(&[HealthCondition::Diabetes]));

        let params: Vec<&str> = report
            .violations
            .iter()
            .map(|f| f.parameter.as_str())
            .collect();
        assert!(params.contains(&"carbohydrates"));
        // Estimated load 55 * 90 / 100 = 49.5, well over the limit of 20.
        assert!(params.contains(&"glycemic_load"));
        let load = report
            .violations
            .iter()
            .find(|f| f.parameter == "glycemic_load")
            .unwrap();
        assert!((load.measured - 49.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heavy_violations_drive_status_non_compliant() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(1000.0));
        meal.sodium_mg = 3000.0;
        meal.sugar_g = 50.0;
        meal.saturated_fat_g = 20.0;
        meal.cholesterol_mg = 400.0;
        meal.carbs_g = 100.0;

        let report = scorer.score_meal(
            &meal,
            &profile_with(&[HealthCondition::Diabetes, HealthCondition::Hypertension]),
        );

        // Five High violations at -10, three Moderate at -5, two fiber
        // warnings at -3, no compliant bonus: 100 - 65 - 6 = 29.
        assert_eq!(report.violations.len(), 8);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.compliant.is_empty());
        assert_eq!(report.overall_score, 29);
        assert_eq!(report.status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_remediation_groups_by_category_without_duplicates() {
        let scorer = ComplianceScorer::with_config(GuidelineConfig::default());
        let mut meal = meal_with_calories(Some(1000.0));
        meal.sodium_mg = 3000.0;
        meal.sugar_g = 50.0;

        let report = scorer.score_meal(&meal, &profile_with(&[HealthCondition::HeartDisease]));

        // WHO and AHA sodium violations collapse into one sodium category,
        // as do the WHO sugar and AHA added-sugar findings.
        let categories: Vec<&str> = report
            .recommendations
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(
            categories.iter().filter(|&&c| c == "sodium").count(),
            1
        );
        assert_eq!(categories.iter().filter(|&&c| c == "sugar").count(), 1);
        assert!(report
            .recommendations
            .iter()
            .all(|advice| !advice.actions.is_empty()));
    }
}
