//! Monsh: Interactive Monitoring Console
//!
//! The command core of an interactive shell over a monitoring engine's hosts and
//! services: a navigation context, a registry of context-aware commands, a
//! dispatcher, completion, output formatting, and a gateway through which
//! acknowledgements and forced checks reach the engine.

pub mod cli;
pub mod commands;
pub mod complete;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod registry;
pub mod session;
pub mod shell;

pub use error::ShellError;
pub use shell::{Session, Shell};
