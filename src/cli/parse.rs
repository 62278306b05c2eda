//! CLI parse: clap types for monsh. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Monsh - interactive console for monitored hosts and services
#[derive(Parser, Debug)]
#[command(name = "monsh")]
#[command(about = "Interactive shell for inspecting and acting on monitored hosts and services")]
pub struct Cli {
    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Entity snapshot to load (JSON, or TOML with a .toml extension)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Engine command file that receives external commands
    #[arg(long)]
    pub command_file: Option<PathBuf>,

    /// Refuse commands that change engine state
    #[arg(long)]
    pub read_only: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run a command line and exit instead of starting the interactive loop (repeatable)
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
