//! Navigation and inspection commands: ls/list, host, service, status.

use super::{max_args, selected};
use crate::complete::single_word;
use crate::config::{HOST_STATUS_FIELDS, SERVICE_STATUS_FIELDS};
use crate::context::ContextState;
use crate::error::ShellError;
use crate::format::{render_listing, render_service_overview, render_status};
use crate::model::EntityKind;
use crate::registry::{CommandContext, CommandHandler, CompletionContext, Flow};

pub struct List;

impl CommandHandler for List {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 1, "ls [pattern]")?;
        let pattern = args.first().map(String::as_str).unwrap_or("*");
        let width = cx.session.terminal_width();

        let rows = {
            let model = cx.session.model.read();
            match cx.session.context.get() {
                ContextState::Root => render_listing(pattern, model.hosts().keys(), width),
                ContextState::AtHost { host } => match model.host(host) {
                    Some(host) => render_listing(pattern, host.services.keys(), width),
                    None => Vec::new(),
                },
                ContextState::AtService { .. } => Vec::new(),
            }
        };
        for row in rows {
            cx.io.sendline(&row);
        }
        Ok(Flow::Continue)
    }

    fn usage(&self) -> &'static str {
        "List objects in the current context.\n\n\
         Usage: ls [pattern]\n\n\
         \x20   At the top level, list hosts; on a host, list its services.\n\
         \x20   The pattern accepts * (any run of characters), ? (one character)\n\
         \x20   and [...] character classes such as [12] or [!0-9]."
    }
}

pub struct HostCommand;

impl CommandHandler for HostCommand {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 1, "host [hostname]")?;
        let Some(hostname) = args.first().filter(|name| !name.is_empty()) else {
            let count = cx.session.model.read().len();
            cx.io.sendline(&format!("{} hosts available", count));
            cx.io.sendline("");
            cx.io.sendline("To switch objects, use: host <hostname>");
            return Ok(Flow::Continue);
        };

        let model = cx.session.model.read();
        cx.session.context.set(&model, hostname)?;
        Ok(Flow::Continue)
    }

    fn complete(&self, text: &str, cx: &CompletionContext<'_>) -> Option<Vec<String>> {
        let prefix = single_word(text)?;
        let model = cx.session.model.read();
        Some(
            model
                .hosts()
                .keys()
                .filter(|name| name.starts_with(&prefix))
                .cloned()
                .collect(),
        )
    }

    fn usage(&self) -> &'static str {
        "Switch to a host object.\n\n\
         Usage: host\n\n\
         \x20   Show the number of available hosts.\n\n\
         Usage: host <hostname>\n\n\
         \x20   Switch to the host object."
    }
}

pub struct ServiceCommand;

impl CommandHandler for ServiceCommand {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 1, "service [name]")?;
        let model = cx.session.model.read();

        let Some(name) = args.first() else {
            let lines = match cx.session.context.resolve(&model) {
                Some(crate::model::Entity::Host(host)) => {
                    let mut lines = vec![
                        format!("{} services for this host", host.services.len()),
                        String::new(),
                    ];
                    lines.extend(render_service_overview(host, &cx.session.palette));
                    lines
                }
                _ => Vec::new(),
            };
            drop(model);
            for line in lines {
                cx.io.sendline(&line);
            }
            return Ok(Flow::Continue);
        };

        cx.session.context.add(&model, name)?;
        Ok(Flow::Continue)
    }

    fn complete(&self, text: &str, cx: &CompletionContext<'_>) -> Option<Vec<String>> {
        let find = single_word(text)?.to_lowercase();
        let model = cx.session.model.read();
        let host = match cx.session.context.resolve(&model)? {
            crate::model::Entity::Host(host) => host,
            crate::model::Entity::Service(_) => return None,
        };
        Some(
            host.services
                .keys()
                .filter(|name| name.to_lowercase().starts_with(&find))
                .cloned()
                .collect(),
        )
    }

    fn usage(&self) -> &'static str {
        "Switch to a service object.\n\n\
         Usage: service\n\n\
         \x20   Show the services of the current host.\n\n\
         Usage: service <name>\n\n\
         \x20   Switch to the service object."
    }
}

pub struct Status;

impl CommandHandler for Status {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 0, "status")?;
        let lines = {
            let model = cx.session.model.read();
            let entity = selected(cx.session, &model)?;
            let key = match entity.kind() {
                EntityKind::Host => HOST_STATUS_FIELDS,
                EntityKind::Service => SERVICE_STATUS_FIELDS,
            };
            let fields = cx.session.status_fields(key);
            render_status(entity, &fields, &cx.session.palette)
        };
        for line in lines {
            cx.io.sendline(&line);
        }
        Ok(Flow::Continue)
    }

    fn usage(&self) -> &'static str {
        "Show detailed status information about the current object."
    }
}
