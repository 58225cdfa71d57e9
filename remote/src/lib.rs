//! Remote command execution and the command-output formats findr
//! understands: how to ask an instance for its addresses and hostname,
//! and how to read the answers back.

pub mod exec;
pub mod posix;
pub mod ssh;
pub mod windows;
