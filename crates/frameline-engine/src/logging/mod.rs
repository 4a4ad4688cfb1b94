//! Logging setup.
//!
//! Library code only talks to the `log` facade; binaries pick the backend
//! (`env_logger`) through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
