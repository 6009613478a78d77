use crate::errors::ContextError;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, trace, warn};

pub const INTRO_LINE: &str = "I am providing the following files as context:\n\n";
pub const DEFAULT_LANGUAGE_TAG: &str = "text";

/// The assembled text plus which selected paths made it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDocument {
    pub text: String,
    pub included: Vec<String>,
    pub skipped: Vec<String>,
}

impl ContextDocument {
    pub fn file_count(&self) -> usize {
        self.included.len()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

pub struct ContextAssembler {
    root: PathBuf,
    intro: String,
}

impl ContextAssembler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ContextAssembler {
            root: root.into(),
            intro: INTRO_LINE.to_owned(),
        }
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Builds the document in selection order. Unreadable files are logged
    /// and left out.
    pub async fn assemble(&self, files: &[String]) -> ContextDocument {
        let mut document = ContextDocument {
            text: self.intro.clone(),
            ..Default::default()
        };

        for file in files.iter().filter(|f| !f.is_empty()) {
            trace!("Processing file: {}", file);
            match read_file_content(&self.root.join(file)).await {
                Ok(content) => {
                    let tag = language_tag(file);
                    document.text.push_str(&format_block(file, &tag, &content));
                    document.included.push(file.clone());
                }
                Err(ContextError::FileReadError(_, cause)) => {
                    warn!("Could not read file {}: {}", file, cause);
                    document.skipped.push(file.clone());
                }
                Err(e) => {
                    warn!("{}", e);
                    document.skipped.push(file.clone());
                }
            }
        }

        debug!(
            "Assembled {} file(s), skipped {}",
            document.included.len(),
            document.skipped.len()
        );
        document
    }
}

/// Reads the whole file, replacing invalid UTF-8 sequences.
pub async fn read_file_content(path: &Path) -> Result<String, ContextError> {
    let bytes = async_fs::read(path)
        .await
        .map_err(|e| ContextError::FileReadError(path.display().to_string(), e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lower-cased text after the last `.` of the file name, or `text`.
pub fn language_tag(file: &str) -> String {
    let name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[idx + 1..].to_lowercase(),
        _ => DEFAULT_LANGUAGE_TAG.to_owned(),
    }
}

pub fn format_block(file: &str, tag: &str, content: &str) -> String {
    format!("## File: {}\n```{}\n{}\n```\n\n", file, tag, content)
}
