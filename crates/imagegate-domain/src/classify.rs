//! Severity classification: ordered score extraction and the tier table.
//!
//! Each raw finding gets a numeric score from the first extraction strategy
//! that yields one, then `(level, score)` maps to a tier through fixed
//! thresholds. A non-empty report where nothing classified above Low/None
//! is wholly reclassified as Medium (the dark-data fallback).

use serde_json::Value as JsonValue;

use crate::fingerprint::fingerprint_for_finding;
use crate::model::RawFinding;
use imagegate_types::{ClassifiedFinding, Level, SeverityTier, TierCounts};

/// One way of pulling a numeric severity score out of a raw finding.
///
/// Strategies are attempted in a fixed order and the first hit wins; each
/// is independently testable without any pipeline environment.
pub trait ScoreSource {
    fn name(&self) -> &'static str;
    fn extract(&self, finding: &RawFinding) -> Option<f64>;
}

/// Strategy 1: the explicit `severity` property.
pub struct ExplicitSeverity;

impl ScoreSource for ExplicitSeverity {
    fn name(&self) -> &'static str {
        "severity"
    }

    fn extract(&self, finding: &RawFinding) -> Option<f64> {
        finding.severity.as_ref().and_then(numeric_value)
    }
}

/// Strategy 2: the explicit `security-severity` property.
pub struct SecuritySeverity;

impl ScoreSource for SecuritySeverity {
    fn name(&self) -> &'static str {
        "security-severity"
    }

    fn extract(&self, finding: &RawFinding) -> Option<f64> {
        finding.security_severity.as_ref().and_then(numeric_value)
    }
}

/// Strategy 3: a value derived from the rule-index ordinal.
///
/// Scanners that drop score properties still emit the rule ordinal; it is
/// an opaque stand-in, clamped into the score domain.
pub struct RuleIndexOrdinal;

impl ScoreSource for RuleIndexOrdinal {
    fn name(&self) -> &'static str {
        "rule-index"
    }

    fn extract(&self, finding: &RawFinding) -> Option<f64> {
        finding.rule_index.map(f64::from)
    }
}

/// Extraction order is part of the contract: explicit `severity`, then
/// `security-severity`, then the rule ordinal, then default zero.
pub fn score_sources() -> [&'static dyn ScoreSource; 3] {
    [&ExplicitSeverity, &SecuritySeverity, &RuleIndexOrdinal]
}

/// Scores live in the CVSS range.
const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 10.0;

/// Resolve a finding's score: first strategy that yields a value, clamped;
/// `0.0` when none does.
pub fn extract_score(finding: &RawFinding) -> f64 {
    for source in score_sources() {
        if let Some(score) = source.extract(finding) {
            return score.clamp(SCORE_MIN, SCORE_MAX);
        }
    }
    0.0
}

/// Accept a JSON number or a numeric string; reports are inconsistent
/// about which they emit.
fn numeric_value(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// The fixed tier table.
///
/// | level    | score range  | tier     |
/// |----------|--------------|----------|
/// | error    | >= 9.0       | Critical |
/// | error    | [7.0, 9.0)   | High     |
/// | warning  | [4.0, 7.0)   | Medium   |
/// | other    | otherwise    | Low/None |
///
/// The otherwise row splits on the score: above zero is Low, exactly zero
/// is None (indistinguishable from "nothing extracted").
pub fn tier_for(level: Level, score: f64) -> SeverityTier {
    match level {
        Level::Error if score >= 9.0 => SeverityTier::Critical,
        Level::Error if score >= 7.0 => SeverityTier::High,
        Level::Warning if (4.0..7.0).contains(&score) => SeverityTier::Medium,
        _ if score > 0.0 => SeverityTier::Low,
        _ => SeverityTier::None,
    }
}

/// Classify one raw finding.
pub fn classify(finding: &RawFinding) -> ClassifiedFinding {
    let level = finding.level();
    let score = extract_score(finding);
    ClassifiedFinding {
        tier: tier_for(level, score),
        level,
        score,
        rule_id: finding.rule_id.clone(),
        message: finding.message.clone(),
        fingerprint: fingerprint_for_finding(finding.rule_id.as_deref(), level, score),
    }
}

/// The dark-data conservative fallback.
///
/// A report with findings but nothing above Low/None looks unscanned, not
/// clean. Reclassify the entire count as Medium so it cannot pass
/// silently; a false warning is preferred over a false negative. Returns
/// whether the fallback fired.
pub fn apply_dark_data_fallback(findings: &mut [ClassifiedFinding]) -> (TierCounts, bool) {
    let counts = crate::aggregate::aggregate(findings);
    if findings.is_empty() || !counts.actionable_is_zero() {
        return (counts, false);
    }

    for finding in findings.iter_mut() {
        finding.tier = SeverityTier::Medium;
    }
    let counts = TierCounts {
        medium: findings.len() as u32,
        ..TierCounts::default()
    };
    (counts, true)
}
