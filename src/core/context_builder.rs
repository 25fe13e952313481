use crate::core::scanner::relative_slash_path;
use log::debug;
use std::path::Path;

/// Separator line between file blocks: exactly 60 dashes.
pub const SEPARATOR: &str =
    "------------------------------------------------------------";

pub const OUTPUT_FILE_NAME: &str = "code_context.txt";

/// Concatenates the given files into one context blob, in input order. Each
/// block is `// File: <rel>` followed by the content and the separator line.
/// A failed read aborts the whole build; the accumulated content is dropped.
pub fn build_context(
    files: &[impl AsRef<Path>],
    base_path: &Path,
    reader: impl Fn(&Path) -> anyhow::Result<String>,
) -> anyhow::Result<String> {
    let mut combined = String::new();

    for file in files {
        let file = file.as_ref();
        let relative = relative_slash_path(file, base_path)?;
        debug!("Adding {} to context", relative);

        let content = reader(file)?;
        combined.push_str(&format!("// File: {relative}\n\n"));
        combined.push_str(&format!("{content}\n\n"));
        combined.push_str(SEPARATOR);
        combined.push_str("\n\n");
    }

    Ok(combined)
}

/// Clipboard payload for the single-file case.
pub fn file_payload(path: &Path, content: &str) -> String {
    format!(
        "File Path: {}\n\nFile Content:\n{}",
        path.display(),
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_separator_is_sixty_dashes() {
        assert_eq!(SEPARATOR.len(), 60);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_concatenation_exactness() {
        let mut contents = HashMap::new();
        contents.insert(PathBuf::from("/base/a.txt"), "hello".to_string());
        contents.insert(PathBuf::from("/base/b.txt"), "world".to_string());

        let files = vec![PathBuf::from("/base/a.txt"), PathBuf::from("/base/b.txt")];
        let reader = |path: &Path| {
            contents
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("not found"))
        };

        let output = build_context(&files, Path::new("/base"), reader).unwrap();

        let expected = format!(
            "// File: a.txt\n\nhello\n\n{SEPARATOR}\n\n// File: b.txt\n\nworld\n\n{SEPARATOR}\n\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_relative_paths_use_forward_slashes() {
        let files = vec![PathBuf::from("/base/project/src/main.rs")];
        let reader = |_: &Path| Ok("fn main() {}".to_string());

        let output = build_context(&files, Path::new("/base"), reader).unwrap();

        assert!(output.starts_with("// File: project/src/main.rs\n\n"));
    }

    #[test]
    fn test_read_failure_aborts_whole_build() {
        let files = vec![PathBuf::from("/base/a.txt"), PathBuf::from("/base/b.txt")];
        let reader = |path: &Path| {
            if path.ends_with("b.txt") {
                Err(anyhow::anyhow!("permission denied"))
            } else {
                Ok("hello".to_string())
            }
        };

        assert!(build_context(&files, Path::new("/base"), reader).is_err());
    }

    #[test]
    fn test_empty_file_list_builds_empty_output() {
        let files: Vec<PathBuf> = Vec::new();
        let reader = |_: &Path| Ok(String::new());

        let output = build_context(&files, Path::new("/base"), reader).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_file_payload_format() {
        let payload = file_payload(Path::new("/tmp/a.rs"), "fn main() {}");

        assert_eq!(payload, "File Path: /tmp/a.rs\n\nFile Content:\nfn main() {}");
    }
}
