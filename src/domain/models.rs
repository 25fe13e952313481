use std::path::PathBuf;

/// Entry basenames skipped at any depth during a scan. Applies to files as
/// well as directories.
pub const DEFAULT_IGNORE: [&str; 7] = [
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "build",
    "out",
    "coverage",
];

/// Result of one recursive scan: absolute file paths and subfolder paths
/// relative to the scan root, both in directory-listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub folders: Vec<String>,
}

/// Terminal state of one export invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported { count: usize, output_path: PathBuf },
    CopiedToClipboard,
    Cancelled,
    NothingSelected,
    NoEligibleFiles,
    NoFilesAfterFolderFilter,
}
