//! Explain registry for gate statuses and recovery annotations.
//!
//! Maps stable codes to human-readable explanations with remediation
//! guidance for release engineers reading a blocked pipeline.

use crate::ids;

/// Explanation entry for a status or annotation code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the code means and why it exists.
    pub description: &'static str,
    /// What a release engineer should do about it.
    pub remediation: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    match code {
        ids::CODE_PASS => Some(explain_pass()),
        ids::CODE_BLOCK_CRITICAL => Some(explain_block_critical()),
        ids::CODE_BLOCK_HIGH => Some(explain_block_high()),
        ids::CODE_DEGRADED_INPUT => Some(explain_degraded_input()),
        ids::CODE_DARK_DATA_FALLBACK => Some(explain_dark_data_fallback()),
        ids::CODE_CONTINUE_WITH_WARNING => Some(explain_continue_with_warning()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PASS,
        ids::CODE_BLOCK_CRITICAL,
        ids::CODE_BLOCK_HIGH,
        ids::CODE_DEGRADED_INPUT,
        ids::CODE_DARK_DATA_FALLBACK,
        ids::CODE_CONTINUE_WITH_WARNING,
    ]
}

fn explain_pass() -> Explanation {
    Explanation {
        title: "Gate Passed",
        description: "\
No critical findings were present and the high-tier count stayed at or
below the configured threshold. The image may proceed to deployment on
any branch.",
        remediation: "\
Nothing to do. If the report also carries `degraded_input`, verify the
scanner actually ran before treating this as a clean bill of health.",
    }
}

fn explain_block_critical() -> Explanation {
    Explanation {
        title: "Blocked: Critical Findings",
        description: "\
At least one finding classified as Critical (scanner level `error` with a
severity score of 9.0 or above). A single critical finding blocks the
gate regardless of anything else in the report.",
        remediation: "\
Upgrade or remove the affected package, or rebuild on a patched base
image. Re-run the scan and the gate after remediation. On non-protected
branches the pipeline continues with a warning so iteration is not
blocked, but the finding must be resolved before release.",
    }
}

fn explain_block_high() -> Explanation {
    Explanation {
        title: "Blocked: High Findings Over Threshold",
        description: "\
No critical findings, but the High-tier count exceeded the configured
threshold (default: more than five). The threshold is strict: exactly
five high findings still pass.",
        remediation: "\
Reduce the high-severity backlog below the threshold by patching the
most impactful packages first. The threshold can be tuned per pipeline
with `--high-threshold` or `high_threshold` in imagegate.toml.",
    }
}

fn explain_degraded_input() -> Explanation {
    Explanation {
        title: "Degraded Input",
        description: "\
The scan report was missing, empty, unreadable, timed out, or did not
parse. Imagegate substituted a zero-finding report rather than failing
the pipeline; the gate decision was made over that substitute.",
        remediation: "\
Check the scanner step that should have produced the report. A pass with
degraded input means 'nothing was scanned', not 'nothing was found'.",
    }
}

fn explain_dark_data_fallback() -> Explanation {
    Explanation {
        title: "Dark-Data Fallback",
        description: "\
The report contained findings, but no severity could be extracted for
any of them, so every finding landed in Low/None. Imagegate
conservatively reclassifies the entire count as Medium rather than let
an unscanned-looking report pass silently. This says nothing about the
true severity of the findings; it only denies a silent pass.",
        remediation: "\
Inspect the raw scan report: the scanner likely changed its output
format or stopped emitting severity scores. Fix severity extraction at
the scanner and the fallback disappears on the next run.",
    }
}

fn explain_continue_with_warning() -> Explanation {
    Explanation {
        title: "Continue With Warning",
        description: "\
The gate blocked, but the run was not on the protected release branch.
The pipeline proceeds and a warning annotation is emitted for human
review. Enforcement is strict only at the point of production
promotion.",
        remediation: "\
Treat the warning as a pre-release todo: the same findings will abort
the pipeline once this change reaches the protected branch.",
    }
}
