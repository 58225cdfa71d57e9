//! Transport-keyed finder adapters.
//!
//! [`for_transport`] inspects the connection state and assembles the
//! finder that knows how to enumerate addresses on that kind of instance.
//! Only the SSH transport has an execution backend; the platform hint
//! picks between the POSIX and Windows command sets.

use std::net::IpAddr;

use async_trait::async_trait;
use findr_common::config::Config;
use findr_common::error::DiscoveryError;
use findr_common::state::{ConnectionState, PlatformFamily, TransportKind};
use findr_remote::exec::RemoteExec;
use findr_remote::ssh::SshExec;

mod posix;
mod windows;

pub use posix::PosixFinder;
pub use windows::WindowsFinder;

use crate::source::{CandidateAddressSource, FqdnSource};

/// A finder assembled for one instance.
pub enum Finder {
    Posix(PosixFinder),
    Windows(WindowsFinder),
}

/// Builds the finder for the transport kind recorded in `state`.
///
/// An unsupported transport is a [`DiscoveryError`], distinct from a
/// backend that answers with zero candidates.
pub fn for_transport(state: &ConnectionState, cfg: &Config) -> Result<Finder, DiscoveryError> {
    match state.transport {
        TransportKind::Ssh => {
            let exec: Box<dyn RemoteExec> = Box::new(SshExec::new(state, cfg.remote_timeout));
            Ok(with_exec(state, exec))
        }
        TransportKind::Winrm => Err(DiscoveryError::UnsupportedTransport {
            kind: state.transport,
        }),
    }
}

/// Finder over a caller-supplied execution backend. Tests use this to run
/// the discovery flow against canned command outputs.
pub fn with_exec(state: &ConnectionState, exec: Box<dyn RemoteExec>) -> Finder {
    match state.platform_family() {
        PlatformFamily::Windows => Finder::Windows(WindowsFinder::new(exec)),
        PlatformFamily::Posix => Finder::Posix(PosixFinder::new(exec)),
    }
}

#[async_trait]
impl CandidateAddressSource for Finder {
    async fn list_addresses(&self, state: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError> {
        match self {
            Finder::Posix(finder) => finder.list_addresses(state).await,
            Finder::Windows(finder) => finder.list_addresses(state).await,
        }
    }
}

#[async_trait]
impl FqdnSource for Finder {
    async fn find_fqdn(&self, state: &ConnectionState) -> Result<String, DiscoveryError> {
        match self {
            Finder::Posix(finder) => finder.find_fqdn(state).await,
            Finder::Windows(finder) => finder.find_fqdn(state).await,
        }
    }
}
