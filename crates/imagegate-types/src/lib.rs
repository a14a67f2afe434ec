//! Stable DTOs and IDs used across the imagegate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted gate report
//! - stable string codes for statuses and recovery annotations
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{lookup_explanation, Explanation};
pub use report::{
    ArtifactKind, ArtifactPointer, ClassifiedFinding, ExitAction, GateReport, GateStatus, Level,
    ReleaseChannel, SeverityTier, TierCounts, ToolMeta, SCHEMA_REPORT_V1,
};
