//! Shared constants, launch configuration and the in-game event log.

pub mod config;
pub mod constants;
pub mod event_log;

pub use config::{parse_args, LaunchCommand, LaunchOptions};
pub use constants::*;
pub use event_log::{EventLog, LogEntry};
