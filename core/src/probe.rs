//! Liveness probing of candidate addresses.
//!
//! Two production backends exist: a raw-socket ICMP echo probe for
//! privileged processes and a system `ping` subprocess for everyone else.
//! [`default_probe`] picks between them at runtime.

use std::net::IpAddr;

use async_trait::async_trait;
use findr_common::config::Config;
use tracing::{debug, warn};

mod icmp;
mod ping;

pub use icmp::IcmpProbe;
pub use ping::PingProbe;

/// A liveness check against a single address.
///
/// Never fails: any underlying problem (no route, timeout, spawn error)
/// reads as "not reachable". Each call is bounded by the configured
/// per-probe timeout.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self, addr: IpAddr) -> bool;
}

#[async_trait]
impl ReachabilityProbe for Box<dyn ReachabilityProbe> {
    async fn is_reachable(&self, addr: IpAddr) -> bool {
        (**self).is_reachable(addr).await
    }
}

/// Selects the probe backend for this process.
///
/// Raw ICMP needs root and a working transport channel; when either is
/// missing the system ping binary does the job from user space.
pub fn default_probe(cfg: &Config) -> Box<dyn ReachabilityProbe> {
    if cfg.force_unprivileged {
        debug!("probe backend forced to system ping");
        return Box::new(PingProbe::new(cfg.probe_timeout));
    }

    if is_root::is_root() {
        match IcmpProbe::new(cfg.probe_timeout) {
            Ok(probe) => return Box::new(probe),
            Err(e) => warn!("raw ICMP channel unavailable, falling back to system ping: {e}"),
        }
    } else {
        debug!("not running as root, using system ping");
    }

    Box::new(PingProbe::new(cfg.probe_timeout))
}
