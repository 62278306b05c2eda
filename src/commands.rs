//! Command implementations and the default command table.

use crate::context::ContextState;
use crate::error::ShellError;
use crate::model::{Entity, EntityModel};
use crate::registry::{Applicability, CommandDef, CommandRegistry};
use crate::shell::Session;
use std::sync::Arc;

mod actions;
mod builtin;
mod objects;

pub use actions::{Acknowledge, Check};
pub use builtin::{Exit, Help, Top, Up};
pub use objects::{HostCommand, List, ServiceCommand, Status};

/// `ls`/`list`: root lists hosts, a host lists its services.
pub fn at_root_or_host(state: &ContextState) -> bool {
    state.is_root() || state.is_host()
}

pub fn at_host(state: &ContextState) -> bool {
    state.is_host()
}

/// Any selected object, host or service.
pub fn at_object(state: &ContextState) -> bool {
    state.is_host() || state.is_service()
}

/// The default command table, in help order.
pub fn default_registry() -> Result<CommandRegistry, ShellError> {
    let list: Arc<List> = Arc::new(List);
    let defs = vec![
        CommandDef::new(
            "ls",
            "List hosts, or the services of the current host",
            Applicability::When(at_root_or_host),
            list.clone(),
        ),
        CommandDef::new(
            "list",
            "List hosts, or the services of the current host",
            Applicability::When(at_root_or_host),
            list,
        ),
        CommandDef::new(
            "host",
            "Switch to a host",
            Applicability::Global,
            Arc::new(HostCommand),
        ),
        CommandDef::new(
            "service",
            "Switch to a service of the current host",
            Applicability::When(at_host),
            Arc::new(ServiceCommand),
        ),
        CommandDef::new(
            "acknowledge",
            "Acknowledge a problem on the current object",
            Applicability::When(at_object),
            Arc::new(Acknowledge),
        ),
        CommandDef::new(
            "check",
            "Force an immediate check of the current object",
            Applicability::When(at_object),
            Arc::new(Check),
        ),
        CommandDef::new(
            "status",
            "Show detailed status of the current object",
            Applicability::When(at_object),
            Arc::new(Status),
        ),
        CommandDef::new("help", "Show available commands", Applicability::Global, Arc::new(Help)),
        CommandDef::new("up", "Go up one level", Applicability::Global, Arc::new(Up)),
        CommandDef::new("top", "Return to the top level", Applicability::Global, Arc::new(Top)),
        CommandDef::new("exit", "Leave the shell", Applicability::Global, Arc::new(Exit)),
        CommandDef::new("quit", "Leave the shell", Applicability::Global, Arc::new(Exit)),
    ];

    let mut registry = CommandRegistry::new();
    for def in defs {
        registry.register(def)?;
    }
    Ok(registry)
}

/// Entity currently selected, resolved against `model`.
fn selected<'m>(session: &Session, model: &'m EntityModel) -> Result<Entity<'m>, ShellError> {
    session.context.resolve(model).ok_or_else(|| {
        ShellError::InvalidTransition("No host or service selected".to_string())
    })
}

/// Reject surplus arguments.
fn max_args(args: &[String], max: usize, usage: &str) -> Result<(), ShellError> {
    if args.len() > max {
        return Err(ShellError::Usage(usage.to_string()));
    }
    Ok(())
}
