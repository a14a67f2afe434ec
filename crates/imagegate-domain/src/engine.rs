use crate::decide::decide;
use crate::model::ScanInput;
use crate::policy::GatePolicy;
use crate::{aggregate, classify, enforce};
use imagegate_types::{ids, ClassifiedFinding, ExitAction, GateStatus, ReleaseChannel, TierCounts};

/// The full pipeline result for one scan: classify, aggregate, decide,
/// enforce. Pure and deterministic; identical input yields an identical
/// evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub findings: Vec<ClassifiedFinding>,
    pub counts: TierCounts,
    pub status: GateStatus,
    pub exit_action: ExitAction,
    pub dark_data_fallback: bool,
    pub reasons: Vec<String>,
}

pub fn evaluate(input: &ScanInput, policy: &GatePolicy, channel: ReleaseChannel) -> Evaluation {
    let mut findings: Vec<ClassifiedFinding> =
        input.findings.iter().map(classify::classify).collect();

    let (counts, dark_data_fallback) = classify::apply_dark_data_fallback(&mut findings);
    debug_assert_eq!(counts.total() as usize, findings.len());

    let status = decide(&counts, policy);
    let exit_action = enforce::enforce(status, channel);

    let mut reasons = Vec::new();
    if let Some(degraded) = input.degraded {
        reasons.push(format!(
            "{}: scan report {}, substituted zero findings",
            ids::CODE_DEGRADED_INPUT,
            degraded.as_str()
        ));
    }
    if dark_data_fallback {
        reasons.push(format!(
            "{}: no severity extractable, treating all {} findings as medium",
            ids::CODE_DARK_DATA_FALLBACK,
            counts.medium
        ));
    }
    reasons.extend(enforce::outcome_reasons(&counts, status, channel, policy));

    // Aggregation happened inside the fallback; assert the published
    // counts still match the finding list.
    debug_assert_eq!(aggregate::aggregate(&findings), counts);

    Evaluation {
        findings,
        counts,
        status,
        exit_action,
        dark_data_fallback,
        reasons,
    }
}
