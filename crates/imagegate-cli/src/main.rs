//! CLI entry point for imagegate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `imagegate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use imagegate_app::{
    parse_report_json, render_annotations, render_markdown, run_eval, to_renderable,
    write_report_artifacts, EvalInput,
};
use imagegate_settings::Overrides;
use imagegate_types::{explain, ExitAction};

#[derive(Parser, Debug)]
#[command(
    name = "imagegate",
    version,
    about = "Deployment gate for container-image vulnerability scan reports"
)]
struct Cli {
    /// Path to imagegate config TOML.
    #[arg(long, default_value = "imagegate.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a scan report and write gate artifacts.
    Eval {
        /// Path to the vulnerability scan report.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Image reference the scan covered.
        #[arg(long)]
        image: String,

        /// Branch this pipeline run is on.
        #[arg(long)]
        branch: String,

        /// Commit id recorded in the report.
        #[arg(long)]
        commit: Option<String>,

        /// Branch under strict enforcement (overrides config; default "main").
        #[arg(long)]
        protected_branch: Option<String>,

        /// High findings strictly above this count block (overrides config).
        #[arg(long)]
        high_threshold: Option<u32>,

        /// Bound on scan-report read time, in milliseconds (overrides config).
        #[arg(long)]
        read_timeout_ms: Option<u64>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/imagegate/report.json")]
        out: Utf8PathBuf,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/imagegate/summary.md")]
        markdown_out: Utf8PathBuf,

        /// Attach an SBOM pointer to the report if the file exists.
        #[arg(long)]
        sbom: Option<Utf8PathBuf>,

        /// Attach a recommendations pointer to the report if the file exists.
        #[arg(long)]
        recommendations: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/imagegate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/imagegate/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a status or reason code with remediation guidance.
    Explain {
        /// The code (e.g., "block_critical" or "degraded_input") to explain.
        code: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Eval {
            ref input,
            ref image,
            ref branch,
            ref commit,
            ref protected_branch,
            high_threshold,
            read_timeout_ms,
            ref out,
            write_markdown,
            ref markdown_out,
            ref sbom,
            ref recommendations,
        } => cmd_eval(EvalArgs {
            config: cli.config.clone(),
            input: input.clone(),
            image: image.clone(),
            branch: branch.clone(),
            commit: commit.clone(),
            protected_branch: protected_branch.clone(),
            high_threshold,
            read_timeout_ms,
            out: out.clone(),
            write_markdown,
            markdown_out: markdown_out.clone(),
            sbom: sbom.clone(),
            recommendations: recommendations.clone(),
        }),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { code } => cmd_explain(&code),
    }
}

struct EvalArgs {
    config: Utf8PathBuf,
    input: Utf8PathBuf,
    image: String,
    branch: String,
    commit: Option<String>,
    protected_branch: Option<String>,
    high_threshold: Option<u32>,
    read_timeout_ms: Option<u64>,
    out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    sbom: Option<Utf8PathBuf>,
    recommendations: Option<Utf8PathBuf>,
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    // Exit code 1 is reserved for the enforcement abort; configuration and
    // I/O errors terminate with 2 instead.
    let result = (|| -> anyhow::Result<imagegate_app::EvalOutput> {
        // Missing config file is allowed; defaults apply.
        let config_text = std::fs::read_to_string(&args.config).unwrap_or_default();

        let overrides = Overrides {
            protected_branch: args.protected_branch.clone(),
            high_threshold: args.high_threshold,
            read_timeout_ms: args.read_timeout_ms,
        };

        let output = run_eval(EvalInput {
            input_path: &args.input,
            image: &args.image,
            branch: &args.branch,
            commit: args.commit.clone(),
            config_text: &config_text,
            overrides,
            sbom_path: args.sbom.clone(),
            recommendations_path: args.recommendations.clone(),
        })?;

        let markdown_out = args.write_markdown.then_some(args.markdown_out.as_path());
        write_report_artifacts(&output.report, &args.out, markdown_out)
            .context("write gate artifacts")?;
        Ok(output)
    })();

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            eprintln!("imagegate error: {err:#}");
            std::process::exit(2);
        }
    };

    let report = &output.report;
    eprintln!(
        "imagegate: {} on {} -> {} ({} findings)",
        report.image,
        report.branch,
        report.status.as_str(),
        report.findings_total
    );

    match report.exit_action {
        ExitAction::Continue => Ok(()),
        ExitAction::ContinueWithWarning => {
            for annotation in render_annotations(&to_renderable(report), 10) {
                println!("{annotation}");
            }
            Ok(())
        }
        ExitAction::Abort => {
            eprintln!(
                "imagegate: blocked on protected branch: {}",
                report.reasons.join("; ")
            );
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let markdown = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        imagegate_app::write_atomic(&out_path, markdown.as_bytes())
            .context("write markdown output")?;
    } else {
        print!("{markdown}");
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match explain::lookup_explanation(code) {
        Some(exp) => {
            println!("{}\n\n{}\n\nRemediation:\n{}", exp.title, exp.description, exp.remediation);
            Ok(())
        }
        None => {
            eprintln!(
                "unknown code: {code}\navailable codes: {}",
                explain::all_codes().join(", ")
            );
            std::process::exit(1);
        }
    }
}
