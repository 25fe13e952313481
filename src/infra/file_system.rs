use anyhow::Context;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn is_directory(path: &Path) -> anyhow::Result<bool> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    Ok(metadata.is_dir())
}

/// Reads the whole file as UTF-8 text. Unlike a lossy read, any failure
/// (missing file, permissions, non-text bytes) is propagated to the caller.
pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

/// Writes `content` through a temp file in the target's directory and renames
/// it into place, so the target is never observable half-written.
pub fn write_atomic(path: &Path, content: &str) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| anyhow::anyhow!("failed to persist {}: {}", path.display(), e))?;

    info!("Output written to file: {}", path.display());
    Ok(())
}
