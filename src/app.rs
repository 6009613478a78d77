use crate::command::CommandRunner;
use crate::context::{ContextAssembler, INTRO_LINE};
use crate::copy::{deliver_document, ClipboardSink, Delivery};
use crate::enumerate::FileEnumerator;
use crate::errors::ContextError;
use crate::selector::{FzfSelector, SelectorConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    pub intro: String,
    pub selector: SelectorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            root: PathBuf::from("."),
            intro: INTRO_LINE.to_owned(),
            selector: SelectorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Cancelled,
    NothingSelected,
    Copied { files: usize, chars: usize },
    PrintedFallback { files: usize, chars: usize },
}

/// Check for the selector, list files, let the user pick, then copy.
pub async fn run(
    config: &AppConfig,
    runner: &dyn CommandRunner,
    clipboard: &mut dyn ClipboardSink,
    out: &mut dyn Write,
) -> Result<RunOutcome, ContextError> {
    let selector = FzfSelector::new(runner, config.selector.clone());
    selector.ensure_available()?;

    let files = FileEnumerator::new(runner, config.root.clone())
        .list_files()
        .await?;

    let selected = match selector.select(&files, &config.root).await {
        Ok(selected) => selected,
        Err(ContextError::SelectionCancelled) => {
            debug!("Selection cancelled by user");
            return Ok(RunOutcome::Cancelled);
        }
        Err(e) => return Err(e),
    };

    if selected.is_empty() {
        writeln!(out, "No files selected.")?;
        return Ok(RunOutcome::NothingSelected);
    }

    let document = ContextAssembler::new(config.root.clone())
        .with_intro(config.intro.clone())
        .assemble(&selected)
        .await;

    let files = document.file_count();
    let chars = document.char_count();
    match deliver_document(clipboard, &document, out)? {
        Delivery::Clipboard => {
            debug!("Files copied to clipboard successfully.");
            Ok(RunOutcome::Copied { files, chars })
        }
        Delivery::Stdout => Ok(RunOutcome::PrintedFallback { files, chars }),
    }
}
