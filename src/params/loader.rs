//! Share-snapshot (de)serialization
//!
//! A snapshot carries only parameters, never computed results: consumers
//! recompute on load, so equal snapshots always render equal schedules.
//! Decoding merges field-by-field onto the zero-state defaults, which lets
//! old or hand-trimmed payloads load without wiping sibling fields.

use super::ParameterSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from snapshot encoding, decoding, and file handling
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shareable parameter payload: inputs plus the consumer's display level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display level passthrough ("simple" or "pro"); the engine ignores it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Parameter record; fields missing from the payload keep their defaults
    #[serde(default)]
    pub inputs: ParameterSet,
}

impl Snapshot {
    /// Wrap a parameter set without a display level
    pub fn new(inputs: ParameterSet) -> Self {
        Self {
            level: None,
            inputs,
        }
    }

    /// Decode a share payload, merging missing fields onto the zero state
    pub fn from_json_str(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Compact JSON for share links (URL wrapping is the consumer's concern)
    pub fn to_json_string(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Load a snapshot from a JSON file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, SnapshotError> {
    let payload = fs::read_to_string(path)?;
    Snapshot::from_json_str(&payload)
}

/// Write a snapshot to a JSON file
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    fs::write(path, snapshot.to_json_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_zero_state() {
        let snapshot = Snapshot::from_json_str("{}").unwrap();

        assert_eq!(snapshot.level, None);
        assert_eq!(snapshot.inputs, ParameterSet::zero_state());
    }

    #[test]
    fn test_partial_payload_merges_onto_defaults() {
        let payload = r#"{"inputs":{"acquisition":{"priceProperty":250000}}}"#;
        let snapshot = Snapshot::from_json_str(payload).unwrap();

        // The one supplied field lands, everything else keeps its default
        assert_eq!(snapshot.inputs.acquisition.price_property, 250_000.0);
        assert_eq!(snapshot.inputs.acquisition.notary_pct, 1.0);
        assert_eq!(snapshot.inputs.rent_ops.mgmt_monthly, 75.0);
        assert_eq!(snapshot.inputs.settings.horizon_years, 10);
    }

    #[test]
    fn test_legacy_ui_fields_ignored() {
        // Old app snapshots carry equityMode/equityPercent and a meta object
        let payload = r#"{
            "level": "pro",
            "inputs": {
                "financing": {"equityAmount": 40000, "equityMode": "amount", "equityPercent": 10},
                "meta": {}
            }
        }"#;
        let snapshot = Snapshot::from_json_str(payload).unwrap();

        assert_eq!(snapshot.level.as_deref(), Some("pro"));
        assert_eq!(snapshot.inputs.financing.equity_amount, 40_000.0);
        assert_eq!(snapshot.inputs.financing.interest_pct, 0.0);
    }

    #[test]
    fn test_round_trip() {
        let original = Snapshot {
            level: Some("simple".to_string()),
            inputs: ParameterSet::demo_data(),
        };

        let json = original.to_json_string().unwrap();
        let decoded = Snapshot::from_json_str(&json).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_snapshot_field_names_match_app_format() {
        let json = Snapshot::new(ParameterSet::demo_data())
            .to_json_string()
            .unwrap();

        assert!(json.contains(r#""grEStPct":3.5"#));
        assert!(json.contains(r#""coldRentMonthly":1200.0"#));
        assert!(json.contains(r#""initialRedemptionPct":2.0"#));
        assert!(json.contains(r#""horizonYears":10"#));
    }

    #[test]
    fn test_invalid_json_is_typed_error() {
        let err = Snapshot::from_json_str("{not json").unwrap_err();

        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
