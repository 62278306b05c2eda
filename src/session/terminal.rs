//! Terminal session over stdin/stdout.
//!
//! Stdin is read by a pump thread that forwards each line over a channel; Ctrl-C
//! posts an interrupt on the same channel. Waiting on the channel with a deadline
//! gives prompts their timeout, and the interrupt unwinds only the prompt that is
//! waiting.

use crate::error::ShellError;
use crate::format::Palette;
use crate::session::{PromptOutcome, SessionIo};
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug)]
enum InputEvent {
    Line(String),
    Eof,
    Interrupt,
}

pub struct TerminalIo {
    events: Receiver<InputEvent>,
    palette: Palette,
    eof: bool,
}

impl TerminalIo {
    /// Start the stdin pump and install the interrupt handler.
    ///
    /// The interrupt handler is process-wide, so only one terminal session can
    /// exist per process.
    pub fn new(palette: Palette) -> Result<Self, ShellError> {
        let (tx, rx) = mpsc::channel();

        let interrupt_tx = tx.clone();
        ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(InputEvent::Interrupt);
        })
        .map_err(|e| ShellError::Config(format!("Failed to install interrupt handler: {}", e)))?;

        std::thread::Builder::new()
            .name("monsh-stdin".to_string())
            .spawn(move || pump_stdin(tx))?;

        Ok(Self {
            events: rx,
            palette,
            eof: false,
        })
    }

    fn flush(&self) {
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush stdout: {}", e);
        }
    }
}

fn pump_stdin(tx: Sender<InputEvent>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if tx.send(InputEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(e) => {
                debug!("Stdin read failed: {}", e);
                break;
            }
        }
    }
    let _ = tx.send(InputEvent::Eof);
}

impl SessionIo for TerminalIo {
    fn send(&mut self, text: &str) {
        print!("{}", text);
        self.flush();
    }

    fn sendline(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, text: &str) {
        eprintln!("{}", self.palette.error(text));
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        if self.eof {
            return Ok(None);
        }
        loop {
            self.send(prompt);
            match self.events.recv() {
                Ok(InputEvent::Line(line)) => return Ok(Some(line)),
                Ok(InputEvent::Interrupt) => {
                    // Ctrl-C at the command prompt abandons the current line only.
                    println!();
                }
                Ok(InputEvent::Eof) | Err(_) => {
                    self.eof = true;
                    println!();
                    return Ok(None);
                }
            }
        }
    }

    fn prompt(&mut self, prompt: &str, timeout: Duration) -> Result<PromptOutcome, ShellError> {
        if self.eof {
            return Ok(PromptOutcome::Interrupted);
        }
        self.send(prompt);
        match self.events.recv_timeout(timeout) {
            Ok(InputEvent::Line(line)) => Ok(PromptOutcome::Value(line)),
            Ok(InputEvent::Interrupt) => Ok(PromptOutcome::Interrupted),
            Ok(InputEvent::Eof) | Err(RecvTimeoutError::Disconnected) => {
                self.eof = true;
                Ok(PromptOutcome::Interrupted)
            }
            Err(RecvTimeoutError::Timeout) => {
                println!();
                Ok(PromptOutcome::TimedOut)
            }
        }
    }
}
