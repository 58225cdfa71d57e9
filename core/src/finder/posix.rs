//! Address and FQDN discovery on POSIX instances.

use std::net::IpAddr;

use async_trait::async_trait;
use findr_common::error::DiscoveryError;
use findr_common::state::ConnectionState;
use findr_remote::exec::RemoteExec;
use findr_remote::posix;
use tracing::{debug, warn};

use crate::source::{CandidateAddressSource, FqdnSource};

pub struct PosixFinder {
    exec: Box<dyn RemoteExec>,
}

impl PosixFinder {
    pub fn new(exec: Box<dyn RemoteExec>) -> Self {
        Self { exec }
    }
}

#[async_trait]
impl CandidateAddressSource for PosixFinder {
    async fn list_addresses(&self, state: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError> {
        let output: String = match self.exec.run(posix::LIST_ADDRESSES).await {
            Ok(output) => output,
            Err(e) => {
                warn!(
                    "'{}' failed on {}, trying '{}': {e}",
                    posix::LIST_ADDRESSES,
                    state.hostname,
                    posix::LIST_ADDRESSES_FALLBACK
                );
                self.exec.run(posix::LIST_ADDRESSES_FALLBACK).await?
            }
        };

        let addresses: Vec<IpAddr> = posix::parse_addresses(&output);
        debug!(
            "found {} candidate address(es) on {}",
            addresses.len(),
            state.hostname
        );
        Ok(addresses)
    }
}

#[async_trait]
impl FqdnSource for PosixFinder {
    async fn find_fqdn(&self, _state: &ConnectionState) -> Result<String, DiscoveryError> {
        let output: String = self.exec.run(posix::FIND_FQDN).await?;
        let fqdn: &str = output.trim();
        if fqdn.is_empty() {
            return Err(DiscoveryError::CommandFailed {
                command: posix::FIND_FQDN.to_string(),
                detail: "command produced no output".to_string(),
            });
        }
        Ok(fqdn.to_string())
    }
}
