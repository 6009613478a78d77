use crate::errors::ContextError;
use async_trait::async_trait;
use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, trace};

/// Exit code and captured stdout of a finished external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
}

impl CommandOutput {
    pub fn new(code: i32, stdout: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: stdout.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Everything the tool needs from the outside world in terms of processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` resolves to an executable on `PATH`.
    fn is_available(&self, program: &str) -> bool;

    /// Runs `program` to completion with stdin and stderr detached, capturing stdout.
    async fn output(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput, ContextError>;

    /// Runs a full-screen program that draws on the inherited stderr.
    /// `input` is fed to its stdin and its stdout is captured.
    async fn interactive(
        &self,
        program: &str,
        args: &[&str],
        input: &str,
        cwd: &Path,
    ) -> Result<CommandOutput, ContextError>;
}

pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        let found = find_in_path(program);
        trace!("Lookup for {}: {:?}", program, found);
        found.is_some()
    }

    async fn output(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput, ContextError> {
        debug!("Running {} {:?} in {}", program, args, cwd.display());
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    async fn interactive(
        &self,
        program: &str,
        args: &[&str],
        input: &str,
        cwd: &Path,
    ) -> Result<CommandOutput, ContextError> {
        debug!("Launching {} {:?} in {}", program, args, cwd.display());
        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // stdin is fed from its own task so a child that writes while still
        // reading cannot fill the stdout pipe and stall both sides.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.to_owned();
            let program = program.to_owned();
            tokio::spawn(async move {
                match stdin.write_all(input.as_bytes()).await {
                    // The user may quit before the whole list has been consumed.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        trace!("{} closed its input early", program);
                        Ok(())
                    }
                    result => result,
                }
            })
        });

        let output = child.wait_with_output().await?;
        if let Some(writer) = writer {
            writer
                .await
                .map_err(|e| ContextError::IoError(e.to_string()))??;
        }

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Resolves `program` against `PATH`. Names containing a path separator are
/// checked as-is.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|full| is_executable(full))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension(env::consts::EXE_EXTENSION).is_file()
}
