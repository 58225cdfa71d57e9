//! Address and FQDN discovery on Windows instances.

use std::net::IpAddr;

use async_trait::async_trait;
use findr_common::error::DiscoveryError;
use findr_common::state::ConnectionState;
use findr_remote::exec::RemoteExec;
use findr_remote::windows;
use tracing::debug;

use crate::source::{CandidateAddressSource, FqdnSource};

pub struct WindowsFinder {
    exec: Box<dyn RemoteExec>,
}

impl WindowsFinder {
    pub fn new(exec: Box<dyn RemoteExec>) -> Self {
        Self { exec }
    }
}

#[async_trait]
impl CandidateAddressSource for WindowsFinder {
    async fn list_addresses(&self, state: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError> {
        let output: String = self.exec.run(windows::LIST_ADDRESSES).await?;
        let addresses: Vec<IpAddr> = windows::parse_addresses(&output);
        debug!(
            "found {} candidate address(es) on {}",
            addresses.len(),
            state.hostname
        );
        Ok(addresses)
    }
}

#[async_trait]
impl FqdnSource for WindowsFinder {
    async fn find_fqdn(&self, _state: &ConnectionState) -> Result<String, DiscoveryError> {
        let output: String = self.exec.run(windows::FIND_FQDN).await?;
        let fqdn: &str = output.trim();
        if fqdn.is_empty() {
            return Err(DiscoveryError::CommandFailed {
                command: windows::FIND_FQDN.to_string(),
                detail: "command produced no output".to_string(),
            });
        }
        Ok(fqdn.to_string())
    }
}
