//! Use case orchestration for imagegate.
//!
//! This crate provides the application layer: it coordinates the ingest,
//! domain, settings, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod artifact;
mod eval;
mod render;
mod report;

pub use artifact::write_atomic;
pub use eval::{run_eval, EvalInput, EvalOutput};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, serialize_report, to_renderable, write_report_artifacts};
