use crate::command::CommandRunner;
use crate::errors::ContextError;
use std::path::Path;
use tracing::{debug, trace};

/// Exit status fzf uses when the user aborts with Ctrl-C or Esc.
pub const CANCELLED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub program: String,
    pub height: String,
    pub layout: String,
    pub border: bool,
    pub preview_lines: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            program: "fzf".to_owned(),
            height: "80%".to_owned(),
            layout: "reverse".to_owned(),
            border: true,
            preview_lines: 20,
        }
    }
}

impl SelectorConfig {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "--multi".to_owned(),
            format!("--height={}", self.height),
            format!("--layout={}", self.layout),
        ];
        if self.border {
            args.push("--border".to_owned());
        }
        args.push(format!("--preview=head -n {} {{}}", self.preview_lines));
        args
    }
}

pub struct FzfSelector<'a> {
    runner: &'a dyn CommandRunner,
    config: SelectorConfig,
}

impl<'a> FzfSelector<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: SelectorConfig) -> Self {
        FzfSelector { runner, config }
    }

    pub fn ensure_available(&self) -> Result<(), ContextError> {
        if self.runner.is_available(&self.config.program) {
            Ok(())
        } else {
            Err(ContextError::MissingDependency(self.config.program.clone()))
        }
    }

    /// Hands `candidates` to the selector and returns the chosen paths in
    /// the order the selector printed them.
    pub async fn select(&self, candidates: &str, cwd: &Path) -> Result<Vec<String>, ContextError> {
        let args = self.config.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = self
            .runner
            .interactive(&self.config.program, &args, candidates, cwd)
            .await
            .map_err(|e| ContextError::Selector(e.to_string()))?;

        match output.code {
            Some(0) => {
                let selected = parse_selection(&output.stdout);
                debug!("{} file(s) selected", selected.len());
                Ok(selected)
            }
            Some(CANCELLED_EXIT_CODE) => {
                trace!("{} was interrupted", self.config.program);
                Err(ContextError::SelectionCancelled)
            }
            Some(code) => Err(ContextError::Selector(format!(
                "{} exited with status {}",
                self.config.program, code
            ))),
            None => Err(ContextError::Selector(format!(
                "{} was terminated by a signal",
                self.config.program
            ))),
        }
    }
}

/// Splits selector output into paths, dropping blank entries. Only the
/// output as a whole is trimmed; each path is kept as printed.
pub fn parse_selection(output: &str) -> Vec<String> {
    output
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}
