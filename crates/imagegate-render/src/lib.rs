//! Rendering for imagegate reports.
//!
//! Renderers are pure string builders over [`RenderableReport`], decoupled
//! from the wire types so they stay trivially testable.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableAction, RenderableCounts, RenderableFinding, RenderableReport, RenderableStatus,
    RenderableTier,
};
