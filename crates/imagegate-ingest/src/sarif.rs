//! Tolerant parsing of the SARIF-shaped scan report subset.
//!
//! Only the fields the gate consumes are modeled; everything else is
//! ignored. Findings from all nested result groups flatten in order.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use imagegate_domain::model::{DegradedInput, RawFinding, ScanInput};

#[derive(Debug, Default, Deserialize)]
struct ScanLog {
    #[serde(default)]
    runs: Vec<ScanRun>,
}

#[derive(Debug, Default, Deserialize)]
struct ScanRun {
    #[serde(default)]
    results: Vec<ScanResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanResult {
    /// Kept as a raw value: scanners emit strings, but a malformed level
    /// must not fail the whole document.
    #[serde(default)]
    level: Option<JsonValue>,
    #[serde(default)]
    rule_id: Option<String>,
    /// SARIF uses -1 for "not set".
    #[serde(default)]
    rule_index: Option<i64>,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(default)]
    message: Option<ScanMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyBag {
    #[serde(default)]
    severity: Option<JsonValue>,
    #[serde(default, rename = "security-severity")]
    security_severity: Option<JsonValue>,
}

#[derive(Debug, Default, Deserialize)]
struct ScanMessage {
    #[serde(default)]
    text: Option<String>,
}

impl ScanResult {
    fn into_finding(self) -> RawFinding {
        RawFinding {
            level: self
                .level
                .as_ref()
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            rule_id: self.rule_id,
            rule_index: self.rule_index.and_then(|i| u32::try_from(i).ok()),
            severity: self.properties.severity,
            security_severity: self.properties.security_severity,
            message: self.message.and_then(|m| m.text),
        }
    }
}

/// Parse report text into a normalized scan.
///
/// Unparseable content discards to the zero-finding substitute; a
/// parseable document with no runs or results is a legitimate empty scan.
pub fn parse_scan_json(text: &str) -> ScanInput {
    if text.trim().is_empty() {
        return ScanInput::degraded(DegradedInput::Empty);
    }

    let log: ScanLog = match serde_json::from_str(text) {
        Ok(log) => log,
        Err(_) => return ScanInput::degraded(DegradedInput::Unparseable),
    };

    let findings = log
        .runs
        .into_iter()
        .flat_map(|run| run.results)
        .map(ScanResult::into_finding)
        .collect();

    ScanInput {
        findings,
        degraded: None,
    }
}
