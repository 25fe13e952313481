#[cfg(feature = "clipboard-support")]
use clipboard::{ClipboardContext, ClipboardProvider};
use anyhow::Context;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to console");
        io::stdout().write_all(content.as_bytes())?;
        io::stdout().write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(feature = "clipboard-support")]
pub struct ClipboardWriter;

#[cfg(feature = "clipboard-support")]
impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to clipboard");

        let mut ctx: ClipboardContext = match ClipboardProvider::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                warn!("Failed to access clipboard: {}", e);
                return Err(anyhow::anyhow!("Failed to access clipboard: {}", e));
            }
        };

        match ctx.set_contents(content.to_owned()) {
            Ok(_) => {
                info!("Output copied to clipboard (size: {} bytes)", content.len());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
                Err(anyhow::anyhow!("Failed to copy to clipboard: {}", e))
            }
        }
    }
}

/// Clipboard sink when built with clipboard support, stdout otherwise.
pub fn clipboard_sink() -> Box<dyn OutputWriter> {
    #[cfg(feature = "clipboard-support")]
    return Box::new(ClipboardWriter);
    #[cfg(not(feature = "clipboard-support"))]
    Box::new(ConsoleWriter)
}

/// Opens `path` with `$EDITOR` (or `$VISUAL`). Without one configured, the
/// path is printed instead so the user can open it themselves.
pub fn open_in_editor(path: &Path) -> anyhow::Result<()> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_default();

    if editor.is_empty() {
        info!("No editor configured, printing result path");
        println!("{}", path.display());
        return Ok(());
    }

    debug!("Opening {} with {}", path.display(), editor);
    let status = Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor {editor}"))?;

    if !status.success() {
        warn!("Editor {} exited with {}", editor, status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_writer() {
        let writer = ConsoleWriter;
        assert!(writer.write("Test output").is_ok());
    }

    #[test]
    fn test_clipboard_sink_returns_a_writer() {
        let writer = clipboard_sink();
        assert_eq!(
            std::any::type_name_of_val(&*writer),
            "dyn code_context::infra::output::OutputWriter"
        );
    }
}
