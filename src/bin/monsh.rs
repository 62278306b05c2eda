//! Monsh CLI Binary
//!
//! Interactive console over the monitoring engine's hosts and services.

use clap::Parser;
use monsh::cli::{map_error, Cli};
use monsh::config::{ConfigLoader, ShellConfig};
use monsh::format::Palette;
use monsh::gateway::CommandFileGateway;
use monsh::logging::{init_logging, LoggingConfig};
use monsh::model::{snapshot, EntityModel, SharedModel};
use monsh::registry::Flow;
use monsh::session::TerminalIo;
use monsh::{Session, Shell, ShellError};
use std::process;
use tracing::{error, info, warn};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging before anything else can log
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Monsh starting");

    if let Err(e) = run(&cli, config) {
        error!("Session failed: {}", e);
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }
}

fn run(cli: &Cli, config: ShellConfig) -> Result<(), ShellError> {
    let model = load_model(cli, &config)?;
    let command_file = cli
        .command_file
        .clone()
        .unwrap_or_else(|| config.paths.command_file.clone());
    let gateway = CommandFileGateway::new(command_file);

    let mut session = Session::new(SharedModel::new(model), config, Box::new(gateway));
    if cli.read_only {
        session = session.with_read_only(true);
    }
    if cli.no_color {
        session = session.with_palette(Palette::plain());
    }
    let palette = session.palette;

    let mut shell = Shell::new(session)?;
    let mut io = TerminalIo::new(palette)?;

    if cli.commands.is_empty() {
        return shell.run(&mut io);
    }
    for line in &cli.commands {
        if shell.execute_line(line, &mut io) == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn load_model(cli: &Cli, config: &ShellConfig) -> Result<EntityModel, ShellError> {
    match cli.snapshot.as_ref().or(config.paths.snapshot.as_ref()) {
        Some(path) => {
            let model = snapshot::load(path)?;
            info!(path = %path.display(), hosts = model.len(), "Snapshot loaded");
            Ok(model)
        }
        None => {
            warn!("No snapshot configured, starting with an empty model");
            Ok(EntityModel::new())
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, shell_config: &ShellConfig) -> LoggingConfig {
    let mut config = shell_config.logging.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
