use crate::{RenderableAction, RenderableReport};

/// Render the enforcement outcome as GitHub Actions workflow command
/// annotations.
///
/// Format: `::{level}::{message}`. One line per reason; the annotation
/// level follows the action (abort → error, continue with warning →
/// warning, otherwise notice).
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let level = match report.action {
        RenderableAction::Abort => "error",
        RenderableAction::ContinueWithWarning => "warning",
        RenderableAction::Continue => "notice",
    };

    report
        .reasons
        .iter()
        .map(|reason| {
            let message = format!("imagegate: {}", reason)
                .replace('%', "%25")
                .replace('\r', "%0D")
                .replace('\n', "%0A");
            format!("::{}::{}", level, message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableCounts, RenderableStatus};

    fn report(action: RenderableAction, reasons: Vec<String>) -> RenderableReport {
        RenderableReport {
            status: RenderableStatus::BlockHigh,
            action,
            image: "app:1".to_string(),
            branch: "feature/x".to_string(),
            protected: false,
            counts: RenderableCounts::default(),
            findings_total: 0,
            degraded_input: false,
            dark_data_fallback: false,
            reasons,
            findings: Vec::new(),
        }
    }

    #[test]
    fn warning_annotations_on_non_protected_block() {
        let annotations = render_github_annotations(&report(
            RenderableAction::ContinueWithWarning,
            vec!["block_high: 6 high findings exceed threshold 5".to_string()],
        ));
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].starts_with("::warning::imagegate: block_high"));
    }

    #[test]
    fn error_annotations_on_abort() {
        let annotations = render_github_annotations(&report(
            RenderableAction::Abort,
            vec!["block_critical: 1 critical findings (any critical blocks)".to_string()],
        ));
        assert!(annotations[0].starts_with("::error::"));
    }

    #[test]
    fn messages_are_escaped_for_workflow_commands() {
        let annotations = render_github_annotations(&report(
            RenderableAction::ContinueWithWarning,
            vec!["line one\nline two %".to_string()],
        ));
        assert_eq!(
            annotations[0],
            "::warning::imagegate: line one%0Aline two %25"
        );
    }

    #[test]
    fn no_reasons_means_no_annotations() {
        let annotations =
            render_github_annotations(&report(RenderableAction::Continue, Vec::new()));
        assert!(annotations.is_empty());
    }
}
