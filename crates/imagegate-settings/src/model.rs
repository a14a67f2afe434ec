use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `imagegate.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional so a
/// missing or partial file is always acceptable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GateConfigV1 {
    /// Optional schema string for tooling (`imagegate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Branch subject to strict enforcement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_branch: Option<String>,

    /// High findings strictly above this count block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<u32>,

    /// Bound on scan-report read time, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout_ms: Option<u64>,
}
