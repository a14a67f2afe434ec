//! The `eval` use case: run the gate pipeline and produce a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use time::OffsetDateTime;

use imagegate_settings::{channel_for_branch, Overrides, ResolvedConfig};
use imagegate_types::{
    ArtifactKind, ArtifactPointer, GateReport, ToolMeta, SCHEMA_REPORT_V1,
};

/// Input for the eval use case.
#[derive(Clone, Debug)]
pub struct EvalInput<'a> {
    /// Path to the scan report (may be missing; that degrades, not fails).
    pub input_path: &'a Utf8Path,
    /// Image reference the scan covered.
    pub image: &'a str,
    /// Branch the pipeline runs on.
    pub branch: &'a str,
    /// Commit id, when the pipeline knows it.
    pub commit: Option<String>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Optional enrichment: SBOM artifact produced by an earlier step.
    pub sbom_path: Option<Utf8PathBuf>,
    /// Optional enrichment: remediation recommendations document.
    pub recommendations_path: Option<Utf8PathBuf>,
}

/// Output from the eval use case.
#[derive(Clone, Debug)]
pub struct EvalOutput {
    /// The generated report.
    pub report: GateReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the gate: resolve config, ingest the scan, evaluate, assemble the
/// envelope. Only configuration problems can error; the pipeline stages
/// themselves are total.
pub fn run_eval(input: EvalInput<'_>) -> anyhow::Result<EvalOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        imagegate_settings::GateConfigV1::default()
    } else {
        imagegate_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        imagegate_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let channel = channel_for_branch(input.branch, &resolved.protected_branch);

    let scan = imagegate_ingest::load_scan(input.input_path, resolved.read_timeout);
    let evaluation = imagegate_domain::evaluate(&scan, &resolved.policy, channel);

    let finished_at = OffsetDateTime::now_utc();

    let report = GateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "imagegate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        image: input.image.to_string(),
        branch: input.branch.to_string(),
        channel,
        commit: input.commit,
        status: evaluation.status,
        exit_action: evaluation.exit_action,
        counts: evaluation.counts,
        findings_total: evaluation.counts.total(),
        degraded_input: scan.degraded.is_some(),
        dark_data_fallback: evaluation.dark_data_fallback,
        reasons: evaluation.reasons,
        findings: evaluation.findings,
        artifacts: collect_artifacts(
            input.sbom_path.as_deref(),
            input.recommendations_path.as_deref(),
        ),
    };

    Ok(EvalOutput {
        report,
        resolved_config: resolved,
    })
}

/// Attach enrichment pointers only for files that actually exist; their
/// absence never affects the gate decision.
fn collect_artifacts(
    sbom: Option<&Utf8Path>,
    recommendations: Option<&Utf8Path>,
) -> Option<Vec<ArtifactPointer>> {
    let mut artifacts = Vec::new();
    if let Some(path) = sbom.filter(|p| p.exists()) {
        artifacts.push(ArtifactPointer {
            kind: ArtifactKind::Sbom,
            path: path.to_string(),
        });
    }
    if let Some(path) = recommendations.filter(|p| p.exists()) {
        artifacts.push(ArtifactPointer {
            kind: ArtifactKind::Recommendations,
            path: path.to_string(),
        });
    }
    if artifacts.is_empty() {
        None
    } else {
        Some(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagegate_types::{ExitAction, GateStatus, ReleaseChannel};

    fn write_scan(dir: &tempfile::TempDir, content: &str) -> Utf8PathBuf {
        let path = dir.path().join("scan.sarif.json");
        std::fs::write(&path, content).expect("write scan");
        Utf8PathBuf::from_path_buf(path).expect("utf8 path")
    }

    fn eval_input<'a>(path: &'a Utf8Path, branch: &'a str) -> EvalInput<'a> {
        EvalInput {
            input_path: path,
            image: "registry.example.com/app:1.0",
            branch,
            commit: Some("abc1234".to_string()),
            config_text: "",
            overrides: Overrides::default(),
            sbom_path: None,
            recommendations_path: None,
        }
    }

    #[test]
    fn critical_scan_on_protected_branch_aborts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_scan(
            &dir,
            r#"{"runs":[{"results":[
                {"level":"error","ruleId":"CVE-2024-0001","properties":{"severity":9.5}},
                {"level":"warning","ruleId":"CVE-2024-0002","properties":{"severity":5.0}}
            ]}]}"#,
        );

        let output = run_eval(eval_input(&path, "main")).expect("run_eval");
        let report = output.report;
        assert_eq!(report.status, GateStatus::BlockCritical);
        assert_eq!(report.exit_action, ExitAction::Abort);
        assert_eq!(report.channel, ReleaseChannel::Protected);
        assert_eq!(report.counts.critical, 1);
        assert_eq!(report.counts.medium, 1);
        assert_eq!(report.findings_total, 2);
        assert!(!report.degraded_input);
    }

    #[test]
    fn missing_scan_degrades_to_pass() {
        let input_path = Utf8Path::new("/nonexistent/scan.json");
        let output = run_eval(eval_input(input_path, "feature/x")).expect("run_eval");
        let report = output.report;
        assert_eq!(report.status, GateStatus::Pass);
        assert_eq!(report.exit_action, ExitAction::Continue);
        assert_eq!(report.channel, ReleaseChannel::Integration);
        assert!(report.degraded_input);
        assert!(report.reasons.iter().any(|r| r.starts_with("degraded_input")));
    }

    #[test]
    fn bad_config_is_the_only_error_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_scan(&dir, r#"{"runs":[]}"#);
        let mut input = eval_input(&path, "main");
        input.config_text = "high_threshold = \"lots\"";
        assert!(run_eval(input).is_err());
    }

    #[test]
    fn artifacts_attach_only_when_present() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_scan(&dir, r#"{"runs":[]}"#);

        let sbom = dir.path().join("sbom.json");
        std::fs::write(&sbom, "{}").expect("write sbom");
        let sbom = Utf8PathBuf::from_path_buf(sbom).expect("utf8");

        let mut input = eval_input(&path, "main");
        input.sbom_path = Some(sbom.clone());
        input.recommendations_path = Some(Utf8PathBuf::from("/nonexistent/recs.md"));

        let output = run_eval(input).expect("run_eval");
        let artifacts = output.report.artifacts.expect("artifacts");
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].kind, ArtifactKind::Sbom);
        assert_eq!(artifacts[0].path, sbom.as_str());
    }
}
