use crate::{RenderableAction, RenderableReport, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Imagegate report\n\n");

    let verdict = match report.status {
        RenderableStatus::Pass => "PASS",
        RenderableStatus::BlockCritical => "BLOCK (critical)",
        RenderableStatus::BlockHigh => "BLOCK (high)",
    };
    let action = match report.action {
        RenderableAction::Continue => "continue",
        RenderableAction::ContinueWithWarning => "continue with warning",
        RenderableAction::Abort => "abort",
    };

    out.push_str(&format!("- Image: `{}`\n", report.image));
    let branch_suffix = if report.protected { " (protected)" } else { "" };
    out.push_str(&format!("- Branch: `{}`{}\n", report.branch, branch_suffix));
    out.push_str(&format!(
        "- Verdict: **{}**\n- Action: {}\n- Findings: {}\n\n",
        verdict, action, report.findings_total
    ));

    if report.degraded_input {
        out.push_str(
            "> Note: scan input was degraded; a zero-finding substitute was evaluated.\n\n",
        );
    }
    if report.dark_data_fallback {
        out.push_str(
            "> Note: no severity was extractable; all findings were conservatively counted as Medium.\n\n",
        );
    }

    out.push_str("| Tier | Count |\n|----------|------:|\n");
    out.push_str(&format!("| Critical | {} |\n", report.counts.critical));
    out.push_str(&format!("| High | {} |\n", report.counts.high));
    out.push_str(&format!("| Medium | {} |\n", report.counts.medium));
    out.push_str(&format!("| Low | {} |\n", report.counts.low));
    out.push_str(&format!("| None | {} |\n", report.counts.none));

    if !report.reasons.is_empty() {
        out.push_str("\n## Rationale\n\n");
        for reason in &report.reasons {
            out.push_str(&format!("- {}\n", reason));
        }
    }

    if report.findings.is_empty() {
        out.push_str("\nNo findings.\n");
        return out;
    }

    out.push_str("\n## Findings\n\n");
    for f in &report.findings {
        let rule = f.rule_id.as_deref().unwrap_or("(no rule id)");
        match &f.message {
            Some(message) => out.push_str(&format!(
                "- [{}] `{}` ({}, {:.1}) {}\n",
                f.tier.label(),
                rule,
                f.level,
                f.score,
                message
            )),
            None => out.push_str(&format!(
                "- [{}] `{}` ({}, {:.1})\n",
                f.tier.label(),
                rule,
                f.level,
                f.score
            )),
        }
    }

    out
}
