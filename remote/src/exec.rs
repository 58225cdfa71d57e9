//! The **abstraction** for running a command on a managed instance.
//!
//! Finders depend on this trait rather than on a concrete client so that
//! tests can substitute canned outputs and new transports can plug in
//! without touching the discovery logic.

use async_trait::async_trait;
use findr_common::error::DiscoveryError;

/// Runs a single command on the instance and returns its stdout.
///
/// A nonzero exit status is an error, not an empty result; the finder
/// decides whether a fallback command is worth trying.
#[async_trait]
pub trait RemoteExec: Send + Sync {
    async fn run(&self, command: &str) -> Result<String, DiscoveryError>;
}

#[async_trait]
impl RemoteExec for Box<dyn RemoteExec> {
    async fn run(&self, command: &str) -> Result<String, DiscoveryError> {
        (**self).run(command).await
    }
}
