use crate::core::context_builder::{OUTPUT_FILE_NAME, build_context, file_payload};
use crate::core::filter::{apply_extension_selection, apply_folder_selection, distinct_extensions};
use crate::core::prompter::{NoticeLevel, Prompter, TuiPrompter};
use crate::core::scanner::scan;
use crate::domain::models::{DEFAULT_IGNORE, ExportOutcome};
use crate::infra::file_system::{is_directory, read_file_contents, write_atomic};
use crate::infra::logger::setup_logger;
use crate::infra::output::{OutputWriter, clipboard_sink, open_in_editor};
use clap::Parser;
use log::{debug, info};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "code-context")]
#[command(about = "Export a file or folder as a code context bundle", long_about = None)]
pub struct Cli {
    /// File or folder to export
    pub path: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;
    info!("Exporting context for {}", cli.path.display());

    let prompter = TuiPrompter;
    let result = export_target(&cli.path, &prompter, clipboard_sink().as_ref());

    // Every failure ends up as a notification; the command itself always
    // returns control to the shell cleanly.
    report(&prompter, result)
}

fn export_target(
    path: &Path,
    prompter: &impl Prompter,
    sink: &dyn OutputWriter,
) -> anyhow::Result<ExportOutcome> {
    if is_directory(path)? {
        export_folder(path, prompter)
    } else {
        export_file(path, sink)
    }
}

/// Single-file case: the whole file plus its path goes to the clipboard sink.
fn export_file(path: &Path, sink: &dyn OutputWriter) -> anyhow::Result<ExportOutcome> {
    info!("Exporting single file {}", path.display());

    let content = read_file_contents(path)?;
    sink.write(&file_payload(path, &content))?;

    Ok(ExportOutcome::CopiedToClipboard)
}

/// Folder case: scan, two selection prompts, then one atomic write of the
/// combined context into the folder itself.
fn export_folder(folder: &Path, prompter: &impl Prompter) -> anyhow::Result<ExportOutcome> {
    let base_path = folder.parent().unwrap_or(folder);

    let scan_result = scan(folder, folder, &DEFAULT_IGNORE)?;
    if scan_result.files.is_empty() {
        return Ok(ExportOutcome::NoEligibleFiles);
    }

    // The folder prompt is skipped entirely when there is nothing to deselect.
    let kept_folders = if scan_result.folders.is_empty() {
        Vec::new()
    } else {
        match prompter.choose_many(
            "Deselect any additional folders you wish to skip",
            &scan_result.folders,
        )? {
            Some(kept) => kept,
            None => return Ok(ExportOutcome::Cancelled),
        }
    };

    let files_after_folder_skip =
        apply_folder_selection(&scan_result.files, folder, &kept_folders);
    if files_after_folder_skip.is_empty() {
        return Ok(ExportOutcome::NoFilesAfterFolderFilter);
    }

    let extensions = distinct_extensions(&files_after_folder_skip);
    let kept_extensions =
        match prompter.choose_many("Select file extensions to include", &extensions)? {
            None => return Ok(ExportOutcome::Cancelled),
            // An empty confirm is deliberate, not a dismissal: nothing to export.
            Some(kept) if kept.is_empty() => return Ok(ExportOutcome::NothingSelected),
            Some(kept) => kept,
        };

    let files_to_include = apply_extension_selection(&files_after_folder_skip, &kept_extensions);

    debug!("Building context from {} files", files_to_include.len());
    let combined = build_context(&files_to_include, base_path, read_file_contents)?;

    let output_path = folder.join(OUTPUT_FILE_NAME);
    write_atomic(&output_path, &combined)?;

    Ok(ExportOutcome::Exported {
        count: files_to_include.len(),
        output_path,
    })
}

fn report(prompter: &impl Prompter, result: anyhow::Result<ExportOutcome>) -> anyhow::Result<()> {
    match result {
        Ok(ExportOutcome::Exported { count, output_path }) => {
            let message = format!(
                "Successfully exported context of {count} files to {OUTPUT_FILE_NAME}"
            );
            let chosen = prompter.notify(NoticeLevel::Info, &message, Some("Open File"))?;
            if chosen.is_some() {
                open_in_editor(&output_path)?;
            }
        }
        Ok(ExportOutcome::CopiedToClipboard) => {
            prompter.notify(NoticeLevel::Info, "File context copied to clipboard.", None)?;
        }
        Ok(ExportOutcome::Cancelled) => {
            prompter.notify(NoticeLevel::Info, "Export cancelled.", None)?;
        }
        Ok(ExportOutcome::NothingSelected) => {
            prompter.notify(
                NoticeLevel::Info,
                "No extensions selected; nothing to export.",
                None,
            )?;
        }
        Ok(ExportOutcome::NoEligibleFiles) => {
            prompter.notify(
                NoticeLevel::Warning,
                "No eligible files found in the selected folder after ignoring default directories.",
                None,
            )?;
        }
        Ok(ExportOutcome::NoFilesAfterFolderFilter) => {
            prompter.notify(
                NoticeLevel::Warning,
                "No files remain after filtering out selected folders.",
                None,
            )?;
        }
        Err(e) => {
            prompter.notify(NoticeLevel::Error, &format!("An error occurred: {e:#}"), None)?;
        }
    }
    Ok(())
}
