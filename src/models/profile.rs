// ABOUTME: User health profile models for condition-gated rule selection
// ABOUTME: UserHealthProfile, HealthCondition, and Gender definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Declared health condition tag
///
/// Unknown tags from account management collapse to `Other` rather than
/// failing deserialization; only the listed conditions gate rule blocks.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    /// Diabetes (any type)
    Diabetes,
    /// Hypertension
    Hypertension,
    /// Elevated blood cholesterol
    HighCholesterol,
    /// Diagnosed heart disease
    HeartDisease,
    /// Obesity
    Obesity,
    /// Unrecognized condition tag
    Other,
}

impl HealthCondition {
    /// Parse a condition tag from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "diabetes" => Self::Diabetes,
            "hypertension" => Self::Hypertension,
            "high_cholesterol" => Self::HighCholesterol,
            "heart_disease" => Self::HeartDisease,
            "obesity" => Self::Obesity,
            _ => Self::Other,
        }
    }

    /// Whether this condition gates the cardiovascular guideline block
    #[must_use]
    pub const fn is_cardiovascular_risk(self) -> bool {
        matches!(
            self,
            Self::Hypertension | Self::HighCholesterol | Self::HeartDisease | Self::Obesity
        )
    }
}

impl<'de> Deserialize<'de> for HealthCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&tag))
    }
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
    /// Any other or undisclosed gender
    Other,
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.to_lowercase().as_str() {
            "female" => Self::Female,
            "male" => Self::Male,
            _ => Self::Other,
        })
    }
}

/// Read-only user health profile owned by account management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHealthProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Self-reported gender, when disclosed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Declared health condition tags
    #[serde(default)]
    pub conditions: Vec<HealthCondition>,
}

impl UserHealthProfile {
    /// Profile with no declared conditions
    #[must_use]
    pub const fn without_conditions(user_id: Uuid) -> Self {
        Self {
            user_id,
            gender: None,
            conditions: Vec::new(),
        }
    }

    /// Whether the given condition is declared
    #[must_use]
    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.conditions.contains(&condition)
    }

    /// Whether any declared condition gates the cardiovascular guideline block
    #[must_use]
    pub fn has_cardiovascular_risk(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.is_cardiovascular_risk())
    }
}
