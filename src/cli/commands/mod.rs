//! Command implementations for the CLI.

pub mod compute;
pub mod init;
