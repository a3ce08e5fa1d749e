//! Logger setup for binaries.
//!
//! Library modules log through the `log` facade only; `init_logging` installs
//! `env_logger` behind it.

mod init;

pub use init::{init_logging, LoggingConfig};
