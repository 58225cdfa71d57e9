//! Deterministic doubles for the capability traits.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use findr_common::error::DiscoveryError;
use findr_common::state::ConnectionState;
use findr_core::probe::ReachabilityProbe;
use findr_core::source::CandidateAddressSource;
use findr_remote::exec::RemoteExec;

fn parse_addrs(addrs: &[&str]) -> Vec<IpAddr> {
    addrs
        .iter()
        .map(|a| a.parse::<IpAddr>().expect("test address must parse"))
        .collect()
}

/// Candidate source with a fixed answer.
pub struct FakeSource {
    addresses: Vec<IpAddr>,
    unavailable: bool,
}

impl FakeSource {
    pub fn with_addresses(addrs: &[&str]) -> Self {
        Self {
            addresses: parse_addrs(addrs),
            unavailable: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_addresses(&[])
    }

    /// Simulates a backend that cannot be queried at all.
    pub fn unavailable() -> Self {
        Self {
            addresses: Vec::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl CandidateAddressSource for FakeSource {
    async fn list_addresses(&self, _: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError> {
        if self.unavailable {
            return Err(DiscoveryError::CommandFailed {
                command: "fake discovery".to_string(),
                detail: "backend offline".to_string(),
            });
        }
        Ok(self.addresses.clone())
    }
}

/// Probe that answers from a fixed reachability table and records every
/// address it was asked about, in order.
pub struct RecordingProbe {
    reachable: Vec<IpAddr>,
    log: Arc<Mutex<Vec<IpAddr>>>,
}

impl RecordingProbe {
    pub fn reachable(addrs: &[&str]) -> Self {
        Self {
            reachable: parse_addrs(addrs),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn none_reachable() -> Self {
        Self::reachable(&[])
    }

    /// Handle onto the probe log; keep a clone before boxing the probe.
    pub fn log(&self) -> Arc<Mutex<Vec<IpAddr>>> {
        self.log.clone()
    }
}

#[async_trait]
impl ReachabilityProbe for RecordingProbe {
    async fn is_reachable(&self, addr: IpAddr) -> bool {
        self.log.lock().unwrap().push(addr);
        self.reachable.contains(&addr)
    }
}

/// Remote execution backed by canned outputs. Commands without a canned
/// output fail the way a nonzero exit status would.
pub struct FakeExec {
    responses: HashMap<String, String>,
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeExec {
    pub fn new(responses: &[(&str, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(cmd, out)| (cmd.to_string(), out.to_string()))
                .collect(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn log(&self) -> Arc<Mutex<Vec<String>>> {
        self.log.clone()
    }
}

#[async_trait]
impl RemoteExec for FakeExec {
    async fn run(&self, command: &str) -> Result<String, DiscoveryError> {
        self.log.lock().unwrap().push(command.to_string());
        self.responses
            .get(command)
            .cloned()
            .ok_or_else(|| DiscoveryError::CommandFailed {
                command: command.to_string(),
                detail: "exit status 1".to_string(),
            })
    }
}
