//! Render use cases: markdown and GitHub annotations from in-memory reports.

use imagegate_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    imagegate_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    imagegate_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagegate_render::{RenderableAction, RenderableCounts, RenderableStatus};

    fn sample_report() -> RenderableReport {
        RenderableReport {
            status: RenderableStatus::BlockHigh,
            action: RenderableAction::ContinueWithWarning,
            image: "app:1".to_string(),
            branch: "feature/x".to_string(),
            protected: false,
            counts: RenderableCounts {
                high: 6,
                ..RenderableCounts::default()
            },
            findings_total: 6,
            degraded_input: false,
            dark_data_fallback: false,
            reasons: vec![
                "block_high: 6 high findings exceed threshold 5".to_string(),
                "continue_with_warning: non-protected channel, proceeding for human review"
                    .to_string(),
            ],
            findings: Vec::new(),
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let annotations = render_annotations(&sample_report(), 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("BLOCK (high)"));
    }
}
