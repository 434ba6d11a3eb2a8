//! Logger setup for binaries built on the engine.
//!
//! Library code only ever calls the `log` macros. A binary calls
//! [`init_logging`] at the top of `main` to route them to `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
