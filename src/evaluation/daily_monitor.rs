// ABOUTME: Daily aggregate monitor summing caloric intake across today's meals
// ABOUTME: Raises at most one info or warning alert per evaluation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

//! Cumulative daily intake monitoring.
//!
//! Sums the calories of a day's meals and raises a single alert when the
//! total crosses a threshold. The warning threshold is checked before the
//! info threshold, so a call never yields both.

use tracing::debug;
use uuid::Uuid;

use crate::config::{DailyIntakeConfig, RulesConfig};
use crate::models::{Alert, AlertContext, AlertSeverity, MealNutritionProfile};

/// Watches cumulative daily caloric intake against configured thresholds
pub struct DailyAggregateMonitor {
    intake: DailyIntakeConfig,
}

impl Default for DailyAggregateMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyAggregateMonitor {
    /// Create a monitor backed by the global rules configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            intake: RulesConfig::global().daily_intake.clone(),
        }
    }

    /// Create a monitor with explicit intake thresholds
    #[must_use]
    pub fn with_config(intake: DailyIntakeConfig) -> Self {
        Self { intake }
    }

    /// Evaluate today's cumulative intake for one user
    ///
    /// Each meal contributes its primary calorie field, falling back to the
    /// legacy alias, then zero. At most one alert is returned per call; the
    /// warning threshold supersedes the info threshold.
    #[must_use]
    pub fn evaluate_daily_calories(
        &self,
        user_id: Uuid,
        todays_meals: &[MealNutritionProfile],
    ) -> Option<Alert> {
        let total: f64 = todays_meals
            .iter()
            .map(MealNutritionProfile::effective_calories)
            .sum();

        if total > self.intake.warning_calories {
            debug!(%user_id, total_calories = total, "daily intake warning threshold crossed");
            Some(Alert::meal_logged(
                user_id,
                "daily_calories_exceeded",
                AlertSeverity::Warning,
                "High Daily Caloric Intake",
                "Cumulative intake for today is well above the reference day.",
                AlertContext {
                    measured_value: total,
                    threshold_value: self.intake.warning_calories,
                    unit: "kcal".to_owned(),
                    risk_note: Some(
                        "Regularly exceeding intake targets works against most health goals"
                            .to_owned(),
                    ),
                },
                "Favor lighter, higher-fiber options for the rest of the day.",
            ))
        } else if total > self.intake.info_calories {
            debug!(%user_id, total_calories = total, "daily intake info threshold crossed");
            Some(Alert::meal_logged(
                user_id,
                "daily_calories_reached",
                AlertSeverity::Info,
                "Daily Caloric Intake Reached",
                "Cumulative intake for today has reached the reference intake.",
                AlertContext {
                    measured_value: total,
                    threshold_value: self.intake.info_calories,
                    unit: "kcal".to_owned(),
                    risk_note: None,
                },
                "Consider lighter options if you plan to eat again today.",
            ))
        } else {
            None
        }
    }
}
