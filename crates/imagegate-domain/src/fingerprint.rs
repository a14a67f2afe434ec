use sha2::{Digest, Sha256};

use imagegate_types::Level;

/// Compute a stable SHA-256 fingerprint for a classified finding.
///
/// Identity fields:
/// - rule_id (placeholder `-` when absent)
/// - level
/// - score, one decimal place
pub fn fingerprint_for_finding(rule_id: Option<&str>, level: Level, score: f64) -> String {
    let canonical = format!("{}|{}|{:.1}", rule_id.unwrap_or("-"), level.as_str(), score);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
