use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for imagegate reports.
pub const SCHEMA_REPORT_V1: &str = "imagegate.report.v1";

/// Severity level as reported by the scanner.
///
/// Raw reports carry this as a free-form string; anything unrecognized
/// normalizes to `Note` so a single odd entry cannot fail ingestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    /// Normalize a raw level string. Absent or unrecognized values are `Note`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("error") => Level::Error,
            Some("warning") => Level::Warning,
            _ => Level::Note,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }
}

/// Severity bucket assigned to a finding by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl SeverityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Critical => "critical",
            SeverityTier::High => "high",
            SeverityTier::Medium => "medium",
            SeverityTier::Low => "low",
            SeverityTier::None => "none",
        }
    }
}

/// Per-tier finding tallies.
///
/// Invariant: the sum of all five counts equals the number of classified
/// findings. Every finding maps to exactly one tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TierCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub none: u32,
}

impl TierCounts {
    pub fn record(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Critical => self.critical += 1,
            SeverityTier::High => self.high += 1,
            SeverityTier::Medium => self.medium += 1,
            SeverityTier::Low => self.low += 1,
            SeverityTier::None => self.none += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low + self.none
    }

    /// True when no finding landed above the Low/None floor.
    pub fn actionable_is_zero(&self) -> bool {
        self.critical == 0 && self.high == 0 && self.medium == 0
    }
}

/// Gate decision over the tallies. A pure function of `TierCounts` and the
/// configured threshold; release-branch context plays no role here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Pass,
    BlockCritical,
    BlockHigh,
}

impl GateStatus {
    pub fn is_blocked(self) -> bool {
        !matches!(self, GateStatus::Pass)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GateStatus::Pass => "pass",
            GateStatus::BlockCritical => "block_critical",
            GateStatus::BlockHigh => "block_high",
        }
    }
}

/// What the pipeline does next, derived from the gate status and the
/// release channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExitAction {
    Continue,
    ContinueWithWarning,
    Abort,
}

impl ExitAction {
    /// Process exit code: only `Abort` terminates non-zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ExitAction::Continue => 0,
            ExitAction::ContinueWithWarning => 0,
            ExitAction::Abort => 1,
        }
    }
}

/// Deployment-environment classification supplied by the caller.
///
/// Enforcement is strict on the protected release channel and advisory
/// everywhere else; the domain never compares branch-name strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    Protected,
    Integration,
}

/// One classified finding, carried into the report for audit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedFinding {
    pub tier: SeverityTier,
    pub level: Level,
    pub score: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of
    /// `rule_id + level + score`.
    pub fingerprint: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Optional enrichments attached to the report only when available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Sbom,
    Recommendations,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactPointer {
    pub kind: ArtifactKind,
    pub path: String,
}

/// The emitted gate report (`imagegate.report.v1`).
///
/// Immutable once produced; downstream pipeline steps consume the machine
/// fields, humans read the rendered markdown twin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GateReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// Image reference the scan covered.
    pub image: String,
    pub branch: String,
    pub channel: ReleaseChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    pub status: GateStatus,
    pub exit_action: ExitAction,
    pub counts: TierCounts,
    pub findings_total: u32,

    /// The original report could not be read or parsed and a zero-finding
    /// substitute was used instead.
    pub degraded_input: bool,
    /// The conservative all-Medium reclassification was applied.
    pub dark_data_fallback: bool,

    #[serde(default)]
    pub reasons: Vec<String>,

    pub findings: Vec<ClassifiedFinding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ArtifactPointer>>,
}
