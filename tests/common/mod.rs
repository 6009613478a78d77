#![allow(dead_code)]

use async_trait::async_trait;
use llm_context::command::{CommandOutput, CommandRunner};
use llm_context::copy::ClipboardSink;
use llm_context::errors::ContextError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Stands in for fd, git and fzf. Programs not listed in `available` are
/// reported missing; `output` calls without a scripted answer fail to spawn.
#[derive(Default)]
pub struct FakeRunner {
    available: Vec<String>,
    outputs: HashMap<String, CommandOutput>,
    selection: CommandOutput,
    pub calls: Mutex<Vec<String>>,
    pub selector_input: Mutex<Option<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        FakeRunner::default()
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.available.push(program.to_owned());
        self
    }

    pub fn with_output(mut self, command_line: &str, code: i32, stdout: &str) -> Self {
        self.outputs
            .insert(command_line.to_owned(), CommandOutput::new(code, stdout));
        self
    }

    pub fn with_selection(mut self, code: i32, stdout: &str) -> Self {
        self.selection = CommandOutput::new(code, stdout);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn selector_input(&self) -> Option<String> {
        self.selector_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.iter().any(|p| p == program)
    }

    async fn output(
        &self,
        program: &str,
        args: &[&str],
        _cwd: &Path,
    ) -> Result<CommandOutput, ContextError> {
        let command_line = format!("{} {}", program, args.join(" "));
        self.calls.lock().unwrap().push(command_line.clone());
        self.outputs
            .get(&command_line)
            .cloned()
            .ok_or_else(|| ContextError::IoError(format!("cannot spawn {}", program)))
    }

    async fn interactive(
        &self,
        program: &str,
        args: &[&str],
        input: &str,
        _cwd: &Path,
    ) -> Result<CommandOutput, ContextError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", program, args.join(" ")));
        *self.selector_input.lock().unwrap() = Some(input.to_owned());
        Ok(self.selection.clone())
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    pub contents: Option<String>,
    pub fail_with: Option<String>,
}

impl FakeClipboard {
    pub fn failing(message: &str) -> Self {
        FakeClipboard {
            contents: None,
            fail_with: Some(message.to_owned()),
        }
    }
}

impl ClipboardSink for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ContextError> {
        if let Some(message) = &self.fail_with {
            return Err(ContextError::ClipboardInitError(message.clone()));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
