use log::debug;
use std::path::{Path, PathBuf};

/// Applies the folder-stage selection. Files directly in `root` are always
/// kept; every other file must sit under one of the kept folders. Comparison
/// is component-wise, so `a` never matches a sibling `ab`.
pub fn apply_folder_selection(
    files: &[PathBuf],
    root: &Path,
    kept_folders: &[String],
) -> Vec<PathBuf> {
    let kept_dirs: Vec<PathBuf> = kept_folders.iter().map(|f| root.join(f)).collect();

    let kept: Vec<PathBuf> = files
        .iter()
        .filter(|file| {
            if file.parent() == Some(root) {
                return true;
            }
            kept_dirs.iter().any(|dir| file.starts_with(dir))
        })
        .cloned()
        .collect();

    debug!(
        "Folder selection kept {} of {} files",
        kept.len(),
        files.len()
    );
    kept
}

/// Distinct non-empty extensions present in `files`, leading `.` included,
/// in first-occurrence order. Files without an extension contribute nothing.
pub fn distinct_extensions(files: &[PathBuf]) -> Vec<String> {
    let mut extensions = Vec::new();
    for file in files {
        if let Some(ext) = file.extension().and_then(|e| e.to_str()) {
            let dotted = format!(".{ext}");
            if !extensions.contains(&dotted) {
                extensions.push(dotted);
            }
        }
    }
    extensions
}

/// Keeps files whose extension is among `kept_extensions`. Extensionless
/// files are always dropped.
pub fn apply_extension_selection(files: &[PathBuf], kept_extensions: &[String]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|file| {
            file.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| {
                    kept_extensions
                        .iter()
                        .any(|kept| kept.trim_start_matches('.') == ext)
                })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level_files_survive_any_folder_selection() {
        let root = Path::new("/project");
        let files = vec![
            PathBuf::from("/project/readme.md"),
            PathBuf::from("/project/sub/code.rs"),
        ];

        let kept = apply_folder_selection(&files, root, &[]);

        assert_eq!(kept, vec![PathBuf::from("/project/readme.md")]);
    }

    #[test]
    fn test_folder_exclusion_correctness() {
        let root = Path::new("/r");
        let files = vec![PathBuf::from("/r/a/y.txt"), PathBuf::from("/r/b/x.txt")];

        let kept = apply_folder_selection(&files, root, &["a".to_string()]);

        assert_eq!(kept, vec![PathBuf::from("/r/a/y.txt")]);
    }

    #[test]
    fn test_folder_prefix_is_component_wise() {
        let root = Path::new("/r");
        let files = vec![
            PathBuf::from("/r/a/y.txt"),
            PathBuf::from("/r/ab/z.txt"),
        ];

        let kept = apply_folder_selection(&files, root, &["a".to_string()]);

        assert_eq!(kept, vec![PathBuf::from("/r/a/y.txt")]);
    }

    #[test]
    fn test_nested_folder_selection_keeps_deep_files() {
        let root = Path::new("/r");
        let files = vec![PathBuf::from("/r/a/b/deep.rs")];

        let kept = apply_folder_selection(&files, root, &["a/b".to_string()]);

        assert_eq!(kept, files);
    }

    #[test]
    fn test_distinct_extensions_first_occurrence_order() {
        let files = vec![
            PathBuf::from("/r/main.rs"),
            PathBuf::from("/r/notes.md"),
            PathBuf::from("/r/lib.rs"),
            PathBuf::from("/r/Makefile"),
        ];

        assert_eq!(distinct_extensions(&files), vec![".rs", ".md"]);
    }

    #[test]
    fn test_keeping_all_extensions_reproduces_file_list() {
        let files = vec![
            PathBuf::from("/r/main.rs"),
            PathBuf::from("/r/notes.md"),
            PathBuf::from("/r/lib.rs"),
        ];

        let all = distinct_extensions(&files);
        let kept = apply_extension_selection(&files, &all);

        assert_eq!(kept, files);
    }

    #[test]
    fn test_extensionless_files_always_excluded() {
        let files = vec![PathBuf::from("/r/Makefile"), PathBuf::from("/r/a.txt")];

        let kept = apply_extension_selection(&files, &[".txt".to_string()]);

        assert_eq!(kept, vec![PathBuf::from("/r/a.txt")]);
    }

    #[test]
    fn test_extension_selection_subset() {
        let files = vec![
            PathBuf::from("/r/main.rs"),
            PathBuf::from("/r/notes.md"),
            PathBuf::from("/r/lib.rs"),
        ];

        let kept = apply_extension_selection(&files, &[".rs".to_string()]);

        assert_eq!(
            kept,
            vec![PathBuf::from("/r/main.rs"), PathBuf::from("/r/lib.rs")]
        );
    }
}
