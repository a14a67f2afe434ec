//! Stable identifiers for gate statuses and recovery annotations.
//!
//! These strings appear in report `reasons` and are accepted by
//! `imagegate explain`.

// Gate statuses
pub const CODE_PASS: &str = "pass";
pub const CODE_BLOCK_CRITICAL: &str = "block_critical";
pub const CODE_BLOCK_HIGH: &str = "block_high";

// Recovery annotations
pub const CODE_DEGRADED_INPUT: &str = "degraded_input";
pub const CODE_DARK_DATA_FALLBACK: &str = "dark_data_fallback";

// Enforcement outcomes
pub const CODE_CONTINUE_WITH_WARNING: &str = "continue_with_warning";
