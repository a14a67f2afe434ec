use anyhow::Context;
use camino::Utf8Path;
use std::io::Write;

/// Atomic write: stage into a temp file in the target directory, then
/// rename over the destination. A downstream consumer never observes a
/// partially written artifact.
pub fn write_atomic(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("stage temp file in: {parent}"))?;
    staged
        .write_all(bytes)
        .with_context(|| format!("write staged artifact: {path}"))?;
    staged
        .persist(path)
        .with_context(|| format!("persist artifact: {path}"))?;
    Ok(())
}
