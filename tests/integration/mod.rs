//! Integration tests for the monitoring shell

mod actions;
mod completion;
mod navigation;
