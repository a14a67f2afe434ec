//! Scan-report ingestion.
//!
//! Reads the scanner's structured output and flattens it into a
//! `ScanInput` for the domain. Every failure mode degrades to a valid
//! zero-finding scan; this crate never fails the pipeline and never
//! mutates the source file.

#![forbid(unsafe_code)]

mod read;
mod sarif;

pub use read::{read_with_timeout, ReadError, DEFAULT_READ_TIMEOUT};
pub use sarif::parse_scan_json;

use camino::Utf8Path;
use std::time::Duration;

use imagegate_domain::model::ScanInput;

/// Load and normalize a scan report from disk.
///
/// Total: any read or parse failure yields the degraded zero-finding
/// substitute with the matching marker.
pub fn load_scan(path: &Utf8Path, timeout: Duration) -> ScanInput {
    match read::read_with_timeout(path, timeout) {
        Ok(text) => sarif::parse_scan_json(&text),
        Err(err) => ScanInput::degraded(err.degraded_reason()),
    }
}
