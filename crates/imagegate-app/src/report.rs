use anyhow::Context;
use camino::Utf8Path;

use imagegate_render::{
    RenderableAction, RenderableCounts, RenderableFinding, RenderableReport, RenderableStatus,
    RenderableTier,
};
use imagegate_types::{
    ExitAction, GateReport, GateStatus, ReleaseChannel, SeverityTier, SCHEMA_REPORT_V1,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<GateReport> {
    let report: GateReport = serde_json::from_str(text).context("parse gate report")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unknown report schema: {} (expected {})",
            report.schema,
            SCHEMA_REPORT_V1
        );
    }
    Ok(report)
}

pub fn serialize_report(report: &GateReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize gate report")
}

pub fn to_renderable(report: &GateReport) -> RenderableReport {
    RenderableReport {
        status: match report.status {
            GateStatus::Pass => RenderableStatus::Pass,
            GateStatus::BlockCritical => RenderableStatus::BlockCritical,
            GateStatus::BlockHigh => RenderableStatus::BlockHigh,
        },
        action: match report.exit_action {
            ExitAction::Continue => RenderableAction::Continue,
            ExitAction::ContinueWithWarning => RenderableAction::ContinueWithWarning,
            ExitAction::Abort => RenderableAction::Abort,
        },
        image: report.image.clone(),
        branch: report.branch.clone(),
        protected: report.channel == ReleaseChannel::Protected,
        counts: RenderableCounts {
            critical: report.counts.critical,
            high: report.counts.high,
            medium: report.counts.medium,
            low: report.counts.low,
            none: report.counts.none,
        },
        findings_total: report.findings_total,
        degraded_input: report.degraded_input,
        dark_data_fallback: report.dark_data_fallback,
        reasons: report.reasons.clone(),
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                tier: match f.tier {
                    SeverityTier::Critical => RenderableTier::Critical,
                    SeverityTier::High => RenderableTier::High,
                    SeverityTier::Medium => RenderableTier::Medium,
                    SeverityTier::Low => RenderableTier::Low,
                    SeverityTier::None => RenderableTier::None,
                },
                level: f.level.as_str().to_string(),
                score: f.score,
                rule_id: f.rule_id.clone(),
                message: f.message.clone(),
            })
            .collect(),
    }
}

/// Persist the report pair.
///
/// Everything is rendered before anything is written, and each write is
/// atomic, so a cancelled run leaves both artifacts or neither.
pub fn write_report_artifacts(
    report: &GateReport,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let json = serialize_report(report)?;
    let markdown = markdown_out.map(|_| imagegate_render::render_markdown(&to_renderable(report)));

    crate::artifact::write_atomic(report_out, &json).context("write report json")?;
    if let (Some(path), Some(markdown)) = (markdown_out, markdown) {
        crate::artifact::write_atomic(path, markdown.as_bytes()).context("write markdown")?;
    }
    Ok(())
}
