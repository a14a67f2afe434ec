//! Channel enforcement: gate status + release channel → pipeline action.
//!
//! Strict at the point of production promotion, advisory everywhere else,
//! so release safety never blocks routine development iteration.

use crate::policy::GatePolicy;
use imagegate_types::{ids, ExitAction, GateStatus, ReleaseChannel, TierCounts};

/// Combine the branch-independent gate status with the release channel.
pub fn enforce(status: GateStatus, channel: ReleaseChannel) -> ExitAction {
    match (status, channel) {
        (GateStatus::Pass, _) => ExitAction::Continue,
        (_, ReleaseChannel::Protected) => ExitAction::Abort,
        (_, ReleaseChannel::Integration) => ExitAction::ContinueWithWarning,
    }
}

/// Human-readable reasons for the outcome, naming the counts that caused
/// a block.
pub fn outcome_reasons(
    counts: &TierCounts,
    status: GateStatus,
    channel: ReleaseChannel,
    policy: &GatePolicy,
) -> Vec<String> {
    let mut reasons = Vec::new();
    match status {
        GateStatus::Pass => {}
        GateStatus::BlockCritical => {
            reasons.push(format!(
                "{}: {} critical findings (any critical blocks)",
                ids::CODE_BLOCK_CRITICAL,
                counts.critical
            ));
        }
        GateStatus::BlockHigh => {
            reasons.push(format!(
                "{}: {} high findings exceed threshold {}",
                ids::CODE_BLOCK_HIGH,
                counts.high,
                policy.high_threshold
            ));
        }
    }
    if status.is_blocked() && channel == ReleaseChannel::Integration {
        reasons.push(format!(
            "{}: non-protected channel, proceeding for human review",
            ids::CODE_CONTINUE_WITH_WARNING
        ));
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_continues_on_any_channel() {
        assert_eq!(
            enforce(GateStatus::Pass, ReleaseChannel::Protected),
            ExitAction::Continue
        );
        assert_eq!(
            enforce(GateStatus::Pass, ReleaseChannel::Integration),
            ExitAction::Continue
        );
    }

    #[test]
    fn block_aborts_only_on_protected_channel() {
        assert_eq!(
            enforce(GateStatus::BlockCritical, ReleaseChannel::Protected),
            ExitAction::Abort
        );
        assert_eq!(
            enforce(GateStatus::BlockHigh, ReleaseChannel::Protected),
            ExitAction::Abort
        );
        assert_eq!(
            enforce(GateStatus::BlockCritical, ReleaseChannel::Integration),
            ExitAction::ContinueWithWarning
        );
        assert_eq!(
            enforce(GateStatus::BlockHigh, ReleaseChannel::Integration),
            ExitAction::ContinueWithWarning
        );
    }

    #[test]
    fn block_reasons_name_the_counts() {
        let counts = TierCounts {
            critical: 2,
            ..TierCounts::default()
        };
        let reasons = outcome_reasons(
            &counts,
            GateStatus::BlockCritical,
            ReleaseChannel::Protected,
            &GatePolicy::default(),
        );
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("2 critical"));

        let counts = TierCounts {
            high: 6,
            ..TierCounts::default()
        };
        let reasons = outcome_reasons(
            &counts,
            GateStatus::BlockHigh,
            ReleaseChannel::Integration,
            &GatePolicy::default(),
        );
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("6 high"));
        assert!(reasons[0].contains("threshold 5"));
        assert!(reasons[1].starts_with("continue_with_warning"));
    }

    #[test]
    fn pass_has_no_reasons() {
        let reasons = outcome_reasons(
            &TierCounts::default(),
            GateStatus::Pass,
            ReleaseChannel::Protected,
            &GatePolicy::default(),
        );
        assert!(reasons.is_empty());
    }
}
