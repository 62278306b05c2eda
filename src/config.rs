//! Configuration System
//!
//! Layered configuration for the shell: built-in defaults, the user's global
//! config file, an explicit `--config` file, then `MONSH__`-prefixed environment
//! variables. Status field lists are multi-line strings, one field per line.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Key of the host status field list.
pub const HOST_STATUS_FIELDS: &str = "object.host.status";
/// Key of the service status field list.
pub const SERVICE_STATUS_FIELDS: &str = "object.service.status";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    /// Per-object display settings
    #[serde(default)]
    pub object: ObjectConfig,

    /// Session behavior
    #[serde(default)]
    pub session: SessionConfig,

    /// Interactive prompt timeouts
    #[serde(default)]
    pub prompts: PromptConfig,

    /// External file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    #[serde(default = "default_host_status")]
    pub host: StatusFields,
    #[serde(default = "default_service_status")]
    pub service: StatusFields,
}

/// Ordered field names shown by `status`, one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusFields {
    pub status: String,
}

fn default_host_status() -> StatusFields {
    StatusFields {
        status: [
            "host_name",
            "current_state",
            "plugin_output",
            "last_check",
            "next_check",
            "problem_has_been_acknowledged",
        ]
        .join("\n"),
    }
}

fn default_service_status() -> StatusFields {
    StatusFields {
        status: [
            "host_name",
            "service_description",
            "current_state",
            "plugin_output",
            "last_check",
            "next_check",
            "problem_has_been_acknowledged",
        ]
        .join("\n"),
    }
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            host: default_host_status(),
            service: default_service_status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Refuse mutating commands
    #[serde(default)]
    pub read_only: bool,

    /// Name recorded on acknowledgements; falls back to $USER / $LOGNAME
    #[serde(default)]
    pub username: Option<String>,

    /// Colorize output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Width used to lay out listings
    #[serde(default = "default_terminal_width")]
    pub terminal_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_terminal_width() -> usize {
    80
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            username: None,
            color: default_true(),
            terminal_width: default_terminal_width(),
        }
    }
}

impl SessionConfig {
    /// Configured username, else the login name from the environment.
    pub fn resolve_username(&self) -> String {
        self.username
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|n| !n.is_empty()))
            .or_else(|| std::env::var("LOGNAME").ok().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_comment_timeout")]
    pub comment_timeout_secs: u64,
    #[serde(default = "default_flag_timeout")]
    pub flag_timeout_secs: u64,
}

fn default_comment_timeout() -> u64 {
    15
}

fn default_flag_timeout() -> u64 {
    10
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            comment_timeout_secs: default_comment_timeout(),
            flag_timeout_secs: default_flag_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Engine command file (named pipe)
    #[serde(default = "default_command_file")]
    pub command_file: PathBuf,

    /// Entity snapshot to load at startup
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_command_file() -> PathBuf {
    PathBuf::from("/var/lib/nagios/rw/nagios.cmd")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            command_file: default_command_file(),
            snapshot: None,
        }
    }
}

impl ShellConfig {
    /// Validate the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.session.terminal_width == 0 {
            errors.push("session.terminal_width must be greater than zero".to_string());
        }
        if self.prompts.comment_timeout_secs == 0 {
            errors.push("prompts.comment_timeout_secs must be greater than zero".to_string());
        }
        if self.prompts.flag_timeout_secs == 0 {
            errors.push("prompts.flag_timeout_secs must be greater than zero".to_string());
        }
        if self.paths.command_file.as_os_str().is_empty() {
            errors.push("paths.command_file cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Key/value access to multi-line configuration values.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigProvider for ShellConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            HOST_STATUS_FIELDS | "object-host-status-fields" => {
                Some(self.object.host.status.clone())
            }
            SERVICE_STATUS_FIELDS | "object-service-status-fields" => {
                Some(self.object.service.status.clone())
            }
            _ => None,
        }
    }
}
