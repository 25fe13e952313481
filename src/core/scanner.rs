use crate::domain::models::ScanResult;
use anyhow::Context;
use log::{debug, info};
use std::path::Path;

/// Recursively scans `directory`, skipping any entry whose basename is in
/// `ignore_names`. Files are recorded as absolute paths, folders as paths
/// relative to `base_directory` with `/` separators. Results keep the
/// underlying directory-listing order; nothing is sorted.
pub fn scan(
    directory: &Path,
    base_directory: &Path,
    ignore_names: &[&str],
) -> anyhow::Result<ScanResult> {
    debug!(
        "Scanning {} (base: {})",
        directory.display(),
        base_directory.display()
    );

    let mut files = Vec::new();
    let mut folders = Vec::new();

    // The root itself is never checked against the ignore set; only the
    // entries found beneath it are.
    let walker = walkdir::WalkDir::new(directory).into_iter().filter_entry(|e| {
        e.depth() == 0
            || e.file_name()
                .to_str()
                .is_none_or(|name| !ignore_names.contains(&name))
    });

    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to scan {}", directory.display()))?;
        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            folders.push(relative_slash_path(entry.path(), base_directory)?);
        } else {
            files.push(entry.path().to_path_buf());
        }
    }

    info!(
        "Scan found {} files and {} folders",
        files.len(),
        folders.len()
    );
    Ok(ScanResult { files, folders })
}

/// Path of `path` relative to `base`, joined with `/` regardless of the host
/// separator convention.
pub fn relative_slash_path(path: &Path, base: &Path) -> anyhow::Result<String> {
    let relative = path
        .strip_prefix(base)
        .with_context(|| format!("{} is not under {}", path.display(), base.display()))?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/"))
}
