//! Commands that submit external commands: acknowledge and check.

use super::{max_args, selected};
use crate::error::ShellError;
use crate::model::Entity;
use crate::registry::{CommandContext, CommandHandler, Flow};
use crate::session::parse_bool;
use tracing::debug;

const ACKNOWLEDGE_USAGE: &str = "acknowledge [comment] [sticky] [notify] [persistent]";
const FLAG_NAMES: [&str; 3] = ["sticky", "notify", "persistent"];

fn flag_value(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub struct Acknowledge;

impl Acknowledge {
    /// Flag taken from the typed argument, or asked for when absent or empty.
    fn flag(
        cx: &mut CommandContext<'_>,
        name: &str,
        typed: Option<&String>,
    ) -> Result<String, ShellError> {
        if let Some(raw) = typed {
            match parse_bool(raw) {
                Ok(Some(value)) => return Ok(flag_value(value)),
                Ok(None) => return Ok(flag_value(true)),
                Err(message) => {
                    return Err(ShellError::Usage(format!("{} ({})", ACKNOWLEDGE_USAGE, message)))
                }
            }
        }
        let timeout = cx.session.flag_timeout();
        cx.io.ask_bool(name, timeout, true).map(flag_value)
    }
}

impl CommandHandler for Acknowledge {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 4, ACKNOWLEDGE_USAGE)?;
        if cx.session.read_only {
            return Err(ShellError::ReadOnly);
        }

        let comment = match args.first() {
            Some(comment) => comment.clone(),
            None => {
                let timeout = cx.session.comment_timeout();
                cx.io.ask_string("comment", timeout)?
            }
        };
        let mut flags = Vec::with_capacity(FLAG_NAMES.len());
        for (i, name) in FLAG_NAMES.iter().enumerate() {
            flags.push(Self::flag(cx, name, args.get(i + 1))?);
        }

        let (verb, mut command_args, confirmation) = {
            let model = cx.session.model.read();
            match selected(cx.session, &model)? {
                Entity::Host(host) => (
                    "ACKNOWLEDGE_HOST_PROBLEM",
                    vec![host.name.clone()],
                    "Host problem acknowledged",
                ),
                Entity::Service(service) => (
                    "ACKNOWLEDGE_SVC_PROBLEM",
                    vec![service.host_name.clone(), service.description.clone()],
                    "Service problem acknowledged",
                ),
            }
        };
        command_args.extend(flags);
        command_args.push(cx.session.username.clone());
        command_args.push(comment);

        debug!(verb, "Acknowledging problem");
        cx.session.submit(verb, &command_args)?;
        let line = cx.session.palette.highlight(confirmation);
        cx.io.sendline(&line);
        Ok(Flow::Continue)
    }

    fn usage(&self) -> &'static str {
        "Acknowledge a problem on the current host or service.\n\n\
         Usage: acknowledge [comment] [sticky] [notify] [persistent]\n\n\
         \x20   Arguments that are not given are asked for. The comment prompt\n\
         \x20   waits 15 seconds, each yes/no prompt 10 seconds; an unanswered\n\
         \x20   yes/no prompt counts as yes."
    }
}

pub struct Check;

impl CommandHandler for Check {
    fn run(&self, cx: &mut CommandContext<'_>, args: &[String]) -> Result<Flow, ShellError> {
        max_args(args, 0, "check")?;
        let now = chrono::Utc::now().timestamp().to_string();

        let (verb, command_args, confirmation) = {
            let model = cx.session.model.read();
            match selected(cx.session, &model)? {
                Entity::Host(host) => (
                    "SCHEDULE_FORCED_HOST_CHECK",
                    vec![host.name.clone(), now],
                    "Host check scheduled",
                ),
                Entity::Service(service) => (
                    "SCHEDULE_FORCED_SVC_CHECK",
                    vec![service.host_name.clone(), service.description.clone(), now],
                    "Service check scheduled",
                ),
            }
        };

        cx.session.submit(verb, &command_args)?;
        let line = cx.session.palette.highlight(confirmation);
        cx.io.sendline(&line);
        Ok(Flow::Continue)
    }

    fn usage(&self) -> &'static str {
        "Schedule an immediate forced check of the current host or service."
    }
}
