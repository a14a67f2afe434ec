//! Property-based tests for the domain crate.
//!
//! Invariants covered:
//! - Tier counts always sum to the number of findings
//! - Evaluation is idempotent and branch-independent in its status
//! - Adding a finding never turns a blocked report into a pass

use proptest::prelude::*;
use serde_json::json;

use crate::engine::evaluate;
use crate::model::{RawFinding, ScanInput};
use crate::policy::GatePolicy;
use imagegate_types::{GateStatus, ReleaseChannel};

fn arb_level() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("error".to_string())),
        Just(Some("warning".to_string())),
        Just(Some("note".to_string())),
        Just(Some("unexpected".to_string())),
        Just(None),
    ]
}

/// Severity property values as reports actually carry them: numbers,
/// numeric strings, junk strings, or nothing.
fn arb_severity_value() -> impl Strategy<Value = Option<serde_json::Value>> {
    prop_oneof![
        (0.0f64..12.0).prop_map(|f| Some(json!(f))),
        (0.0f64..12.0).prop_map(|f| Some(json!(format!("{f:.1}")))),
        Just(Some(json!("high"))),
        Just(Some(json!(null))),
        Just(None),
    ]
}

prop_compose! {
    fn arb_finding()(
        level in arb_level(),
        severity in arb_severity_value(),
        security_severity in arb_severity_value(),
        rule_index in prop::option::of(0u32..40),
        rule_id in prop::option::of("[A-Z]{3}-[0-9]{4}"),
    ) -> RawFinding {
        RawFinding {
            level,
            rule_id,
            rule_index,
            severity,
            security_severity,
            message: None,
        }
    }
}

fn arb_scan() -> impl Strategy<Value = ScanInput> {
    prop::collection::vec(arb_finding(), 0..40).prop_map(|findings| ScanInput {
        findings,
        degraded: None,
    })
}

proptest! {
    #[test]
    fn counts_sum_to_finding_total(scan in arb_scan()) {
        let eval = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Protected);
        prop_assert_eq!(eval.counts.total() as usize, scan.findings.len());
        prop_assert_eq!(eval.findings.len(), scan.findings.len());
    }

    #[test]
    fn evaluation_is_idempotent(scan in arb_scan()) {
        let a = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Integration);
        let b = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Integration);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn status_ignores_channel(scan in arb_scan()) {
        let protected = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Protected);
        let integration = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Integration);
        prop_assert_eq!(protected.status, integration.status);
        prop_assert_eq!(protected.counts, integration.counts);
    }

    #[test]
    fn adding_a_finding_never_unblocks(scan in arb_scan(), extra in arb_finding()) {
        let before = evaluate(&scan, &GatePolicy::default(), ReleaseChannel::Protected);
        prop_assume!(before.status != GateStatus::Pass);

        let mut grown = scan.clone();
        grown.findings.push(extra);
        let after = evaluate(&grown, &GatePolicy::default(), ReleaseChannel::Protected);
        prop_assert_ne!(after.status, GateStatus::Pass);
    }

    #[test]
    fn zero_findings_always_pass(channel in prop_oneof![
        Just(ReleaseChannel::Protected),
        Just(ReleaseChannel::Integration),
    ]) {
        let eval = evaluate(&ScanInput::default(), &GatePolicy::default(), channel);
        prop_assert_eq!(eval.status, GateStatus::Pass);
        prop_assert_eq!(eval.counts.total(), 0);
    }
}
