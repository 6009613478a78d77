use crate::command::CommandRunner;
use crate::errors::ContextError;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Lists candidate files under a root, trying `fd`, then `git ls-files`,
/// then a plain directory walk.
pub struct FileEnumerator<'a> {
    runner: &'a dyn CommandRunner,
    root: PathBuf,
}

impl<'a> FileEnumerator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, root: impl Into<PathBuf>) -> Self {
        FileEnumerator {
            runner,
            root: root.into(),
        }
    }

    /// Returns newline-delimited paths relative to the root.
    pub async fn list_files(&self) -> Result<String, ContextError> {
        if let Some(files) = self.list_with_fd().await {
            debug!("Using fd for file listing");
            return Ok(files);
        }

        if let Some(files) = self.list_with_git().await {
            debug!("Using git ls-files for file listing");
            return Ok(files);
        }

        debug!("Walking {} for file listing", self.root.display());
        Ok(walk_directory(&self.root)?.join("\n"))
    }

    async fn list_with_fd(&self) -> Option<String> {
        if !self.runner.is_available("fd") {
            return None;
        }
        self.run_lister("fd", &["--type", "f"]).await
    }

    async fn list_with_git(&self) -> Option<String> {
        if !self.runner.is_available("git") {
            return None;
        }
        self.run_lister("git", &["rev-parse", "--is-inside-work-tree"])
            .await?;
        self.run_lister("git", &["ls-files"]).await
    }

    async fn run_lister(&self, program: &str, args: &[&str]) -> Option<String> {
        match self.runner.output(program, args, &self.root).await {
            Ok(output) if output.success() => Some(output.stdout),
            Ok(output) => {
                debug!("{} {:?} exited with {:?}", program, args, output.code);
                None
            }
            Err(e) => {
                debug!("{} {:?} failed: {}", program, args, e);
                None
            }
        }
    }
}

/// Recursively collects every non-directory entry under `root`, pruning
/// directories whose name starts with `.`. Paths are relative to `root`.
pub fn walk_directory(root: &Path) -> Result<Vec<String>, ContextError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_dir(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        trace!("Found {}", relative.display());
        files.push(relative.to_string_lossy().into_owned());
    }

    Ok(files)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}
