use serde_json::Value as JsonValue;

use imagegate_types::Level;

/// One raw finding lifted out of the scan report, before classification.
///
/// Severity may hide in either of two property names and either may be a
/// JSON number or a numeric string; the classifier sorts that out.
#[derive(Clone, Debug, Default)]
pub struct RawFinding {
    pub level: Option<String>,
    pub rule_id: Option<String>,
    pub rule_index: Option<u32>,
    pub severity: Option<JsonValue>,
    pub security_severity: Option<JsonValue>,
    pub message: Option<String>,
}

impl RawFinding {
    pub fn level(&self) -> Level {
        Level::from_raw(self.level.as_deref())
    }
}

/// Why the original report was replaced with a zero-finding substitute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegradedInput {
    Missing,
    Empty,
    Unreadable,
    TimedOut,
    Unparseable,
}

impl DegradedInput {
    pub fn as_str(self) -> &'static str {
        match self {
            DegradedInput::Missing => "missing",
            DegradedInput::Empty => "empty",
            DegradedInput::Unreadable => "unreadable",
            DegradedInput::TimedOut => "timed_out",
            DegradedInput::Unparseable => "unparseable",
        }
    }
}

/// A normalized scan: the flattened finding list from all result groups.
///
/// Always valid. A missing or corrupt source yields an empty finding list
/// with the degraded marker set, never an error.
#[derive(Clone, Debug, Default)]
pub struct ScanInput {
    pub findings: Vec<RawFinding>,
    pub degraded: Option<DegradedInput>,
}

impl ScanInput {
    /// Zero-finding substitute for input that could not be used.
    pub fn degraded(reason: DegradedInput) -> Self {
        Self {
            findings: Vec::new(),
            degraded: Some(reason),
        }
    }
}
