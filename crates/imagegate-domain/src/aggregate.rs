//! Tier aggregation: a pure, order-independent fold.

use imagegate_types::{ClassifiedFinding, TierCounts};

/// Tally classified findings per tier. The sum of the counts always equals
/// the number of findings.
pub fn aggregate(findings: &[ClassifiedFinding]) -> TierCounts {
    let mut counts = TierCounts::default();
    for finding in findings {
        counts.record(finding.tier);
    }
    counts
}
