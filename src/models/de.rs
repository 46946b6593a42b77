// ABOUTME: Lenient serde deserializers for numeric fields arriving from ingestion collaborators
// ABOUTME: Maps malformed or missing numeric payloads to absent/zero instead of rejecting the record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health Intelligence

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for optional numeric fields
///
/// Ingestion collaborators sometimes deliver numbers as strings ("185") or
/// junk values. A malformed value becomes `None` so the affected check is
/// skipped while sibling checks still run.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Custom deserializer for required numeric fields with a zero fallback
///
/// Absent fields are handled by `#[serde(default)]`; this covers fields that
/// are present but malformed, which collapse to 0.0 per the inbound contract.
pub(crate) fn lenient_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or(0.0))
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::coerce_f64;
    use serde_json::json;

    #[test]
    fn test_coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_f64(&json!(185.0)), Some(185.0));
        assert_eq!(coerce_f64(&json!("72.5")), Some(72.5));
        assert_eq!(coerce_f64(&json!(" 140 ")), Some(140.0));
    }

    #[test]
    fn test_rejects_non_numeric_payloads() {
        assert_eq!(coerce_f64(&json!("severe")), None);
        assert_eq!(coerce_f64(&json!(null)), None);
        assert_eq!(coerce_f64(&json!({"nested": 1})), None);
        assert_eq!(coerce_f64(&json!([1, 2])), None);
    }
}
