//! Command Registry
//!
//! Ordered table of command definitions, assembled once at startup. Each definition
//! carries its applicability rule as data: either global, or a predicate over the
//! navigation state that the dispatcher evaluates on every call.

use crate::context::ContextState;
use crate::error::ShellError;
use crate::session::SessionIo;
use crate::shell::Session;
use std::fmt;
use std::sync::Arc;

/// What the shell loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Where a command may be invoked.
#[derive(Clone, Copy)]
pub enum Applicability {
    /// Available in every navigation state.
    Global,
    /// Available only while the predicate holds for the current state.
    When(fn(&ContextState) -> bool),
}

impl Applicability {
    pub fn is_global(&self) -> bool {
        matches!(self, Applicability::Global)
    }

    pub fn applies(&self, state: &ContextState) -> bool {
        match self {
            Applicability::Global => true,
            Applicability::When(predicate) => predicate(state),
        }
    }
}

impl fmt::Debug for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Global => write!(f, "Global"),
            Applicability::When(_) => write!(f, "When(..)"),
        }
    }
}

/// Everything a running command may touch.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub io: &'a mut dyn SessionIo,
    pub registry: &'a CommandRegistry,
}

/// Read-only view handed to completion handlers.
pub struct CompletionContext<'a> {
    pub session: &'a Session,
    pub registry: &'a CommandRegistry,
}

/// Behavior behind a command name.
pub trait CommandHandler: Send + Sync {
    /// Run with the positional arguments that followed the command name.
    ///
    /// Handlers receive however many arguments were typed; missing ones are
    /// "not yet supplied" and surplus ones are the handler's to reject.
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError>;

    /// Candidates for the text typed after the command name, `None` when the
    /// command does not complete its arguments.
    fn complete(&self, _text: &str, _cx: &CompletionContext<'_>) -> Option<Vec<String>> {
        None
    }

    /// Long help text.
    fn usage(&self) -> &'static str {
        ""
    }
}

/// A registered command.
#[derive(Clone)]
pub struct CommandDef {
    pub name: String,
    pub summary: &'static str,
    pub applicability: Applicability,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDef {
    pub fn new(
        name: impl Into<String>,
        summary: &'static str,
        applicability: Applicability,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            summary,
            applicability,
            handler,
        }
    }

    pub fn is_global(&self) -> bool {
        self.applicability.is_global()
    }

    pub fn applies(&self, state: &ContextState) -> bool {
        self.applicability.applies(state)
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("applicability", &self.applicability)
            .finish()
    }
}

/// Ordered, name-unique collection of commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Names must be unique.
    pub fn register(&mut self, def: CommandDef) -> Result<(), ShellError> {
        if self.find(&def.name).is_some() {
            return Err(ShellError::Config(format!(
                "Command \"{}\" registered twice",
                def.name
            )));
        }
        self.commands.push(def);
        Ok(())
    }

    /// Exact-name lookup, ignoring applicability.
    pub fn find(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|def| def.name == name)
    }

    /// Lookup plus applicability check against `state`.
    pub fn resolve(&self, name: &str, state: &ContextState) -> Result<&CommandDef, ShellError> {
        let def = self
            .find(name)
            .ok_or_else(|| ShellError::UnknownCommand(name.to_string()))?;
        if !def.applies(state) {
            return Err(ShellError::NotApplicable(name.to_string()));
        }
        Ok(def)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Commands usable in `state`, in registration order.
    pub fn applicable<'a>(
        &'a self,
        state: &'a ContextState,
    ) -> impl Iterator<Item = &'a CommandDef> + 'a {
        self.commands.iter().filter(move |def| def.applies(state))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
