//! Logger bootstrap for binaries using this crate.

mod init;

pub use init::{LoggingConfig, init_logging};
