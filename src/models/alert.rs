// ABOUTME: Alert record models emitted by the threshold and daily intake evaluators
// ABOUTME: Alert, AlertSeverity, AlertTrigger, and AlertContext definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordinal alert severity (info < warning < critical)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Informational, no action required
    Info,
    /// Out of the recommended range, follow-up advised
    Warning,
    /// Clinically urgent, immediate attention advised
    Critical,
}

impl AlertSeverity {
    /// Stable string form for logging
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// What kind of event triggered an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertTrigger {
    /// A single biometric reading crossed a clinical threshold
    ThresholdBreach,
    /// A logged meal pushed a daily aggregate over its threshold
    MealLogged,
}

/// Measured-versus-threshold context attached to every alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertContext {
    /// The value that triggered the alert
    pub measured_value: f64,
    /// The threshold that was crossed
    pub threshold_value: f64,
    /// Canonical unit of the measured biometric or aggregate
    pub unit: String,
    /// Qualitative risk note, when the rule carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_note: Option<String>,
}

/// A generated health notification tied to one reading or aggregate condition
///
/// Immutable after creation; the external read/acknowledge flag lives with
/// the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier for this alert
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Stable machine-readable alert type (e.g. `glucose_spike`)
    pub alert_type: String,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Short human-readable title
    pub title: String,
    /// Canned message for this (kind, side, severity) rule
    pub message: String,
    /// What kind of event produced this alert
    pub triggered_by: AlertTrigger,
    /// Measured-versus-threshold details
    pub context: AlertContext,
    /// Canned follow-up action for this rule
    pub suggested_action: String,
    /// Originating reading, when triggered by a threshold breach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_reading_id: Option<Uuid>,
    /// When the alert was generated
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create an alert for a reading that crossed a clinical threshold
    #[allow(clippy::too_many_arguments)] // Alert records carry the full rule output
    #[must_use]
    pub fn threshold_breach(
        user_id: Uuid,
        alert_type: impl Into<String>,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
        context: AlertContext,
        suggested_action: impl Into<String>,
        source_reading_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            alert_type: alert_type.into(),
            severity,
            title: title.into(),
            message: message.into(),
            triggered_by: AlertTrigger::ThresholdBreach,
            context,
            suggested_action: suggested_action.into(),
            source_reading_id: Some(source_reading_id),
            created_at: Utc::now(),
        }
    }

    /// Create an alert for a daily aggregate crossing its intake threshold
    #[must_use]
    pub fn meal_logged(
        user_id: Uuid,
        alert_type: impl Into<String>,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
        context: AlertContext,
        suggested_action: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            alert_type: alert_type.into(),
            severity,
            title: title.into(),
            message: message.into(),
            triggered_by: AlertTrigger::MealLogged,
            context,
            suggested_action: suggested_action.into(),
            source_reading_id: None,
            created_at: Utc::now(),
        }
    }
}
