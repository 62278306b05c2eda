//! External Command Gateway
//!
//! Delivers mutating requests (acknowledgements, forced checks) to the monitoring
//! engine. Submission is fire-and-forget: the shell never waits for the engine to
//! act on a command.

use crate::error::ShellError;
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// A verb and its ordered arguments, stamped at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub verb: String,
    pub args: Vec<String>,
    pub timestamp: i64,
}

impl ExternalCommand {
    pub fn new(verb: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            verb: verb.into(),
            args,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// External command line: `[<epoch>] VERB;arg1;arg2`, newline-terminated.
    ///
    /// Newlines inside arguments would split the command, so they are flattened
    /// to spaces.
    pub fn render(&self) -> String {
        let mut line = format!("[{}] {}", self.timestamp, self.verb);
        for arg in &self.args {
            line.push(';');
            line.push_str(&arg.replace(['\n', '\r'], " "));
        }
        line.push('\n');
        line
    }
}

/// Sink for external commands.
pub trait CommandGateway: Send + Sync {
    fn submit(&self, verb: &str, args: &[String]) -> Result<(), ShellError>;
}

/// Appends commands to the engine's command file (usually a named pipe).
#[derive(Debug, Clone)]
pub struct CommandFileGateway {
    path: PathBuf,
}

impl CommandFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CommandGateway for CommandFileGateway {
    fn submit(&self, verb: &str, args: &[String]) -> Result<(), ShellError> {
        let command = ExternalCommand::new(verb, args.to_vec());
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ShellError::Gateway(format!(
                    "Failed to open command file {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        file.write_all(command.render().as_bytes()).map_err(|e| {
            ShellError::Gateway(format!(
                "Failed to write to command file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        info!(verb, path = %self.path.display(), "External command submitted");
        Ok(())
    }
}

/// In-memory gateway that keeps every submitted command. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    submitted: Arc<Mutex<Vec<ExternalCommand>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<ExternalCommand> {
        self.submitted.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.submitted.lock().is_empty()
    }
}

impl CommandGateway for RecordingGateway {
    fn submit(&self, verb: &str, args: &[String]) -> Result<(), ShellError> {
        self.submitted
            .lock()
            .push(ExternalCommand::new(verb, args.to_vec()));
        Ok(())
    }
}
