//! Logging utilities.
//!
//! The crate logs through the `log` facade only. This module offers a one-shot
//! `env_logger` setup for binaries that want one.

mod init;

pub use init::{LOG_ENV_VAR, LoggingConfig, init_logging};
