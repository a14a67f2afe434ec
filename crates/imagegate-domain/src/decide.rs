use crate::policy::GatePolicy;
use imagegate_types::{GateStatus, TierCounts};

/// Apply threshold policy to the tallies.
///
/// Evaluated in order: any critical blocks, then high strictly above the
/// threshold blocks, else pass. A pure function of the counts; branch
/// context plays no role here.
pub fn decide(counts: &TierCounts, policy: &GatePolicy) -> GateStatus {
    if counts.critical > 0 {
        return GateStatus::BlockCritical;
    }
    if counts.high > policy.high_threshold {
        return GateStatus::BlockHigh;
    }
    GateStatus::Pass
}
