//! # Instance Address Resolution
//!
//! Implements the core "which address can I actually reach" use case.
//!
//! The resolver pulls the ordered candidate list from an injected
//! [`CandidateAddressSource`], skips loopback, and probes the remaining
//! candidates front to back with an injected [`ReachabilityProbe`]. The
//! first live candidate wins and no further probe is sent, so latency is
//! bounded by the position of the first live address rather than by the
//! size of the candidate list.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use findr_common::config::Config;
use findr_common::error::ResolveError;
use findr_common::state::ConnectionState;
use tracing::{debug, info};

use crate::finder;
use crate::probe::{self, ReachabilityProbe};
use crate::source::CandidateAddressSource;

/// Orchestrates one resolution flow over injected capabilities.
///
/// Stateless between calls; concurrent resolutions for different
/// instances are fully independent.
pub struct AddressResolver {
    source: Box<dyn CandidateAddressSource>,
    probe: Box<dyn ReachabilityProbe>,
    deadline: Option<Duration>,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl AddressResolver {
    pub fn new(source: Box<dyn CandidateAddressSource>, probe: Box<dyn ReachabilityProbe>) -> Self {
        Self {
            source,
            probe,
            deadline: None,
            stop_flag: None,
        }
    }

    /// Bounds the whole resolution. Checked between probes only; a single
    /// outstanding probe still ends via its own timeout.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Cancellation at probe granularity: once the flag is raised, the
    /// remaining candidates are abandoned.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// Runs one resolution attempt and returns the first reachable
    /// non-loopback candidate.
    ///
    /// Every failure reason is terminal; retrying is the caller's call,
    /// since only the caller knows whether the instance is still booting.
    pub async fn resolve(&self, state: &ConnectionState) -> Result<IpAddr, ResolveError> {
        let candidates: Vec<IpAddr> = self.source.list_addresses(state).await?;
        if candidates.is_empty() {
            return Err(ResolveError::NoCandidates);
        }

        debug!("probing {} candidate address(es)", candidates.len());
        let started: Instant = Instant::now();
        let mut attempted: Vec<IpAddr> = Vec::new();

        for addr in candidates {
            if addr.is_loopback() {
                debug!("skipping loopback candidate {addr}");
                continue;
            }
            if self.should_abort(started) {
                return Err(ResolveError::Aborted { attempted });
            }

            attempted.push(addr);
            if self.probe.is_reachable(addr).await {
                info!("resolved reachable address {addr}");
                return Ok(addr);
            }
            debug!("candidate {addr} did not answer");
        }

        Err(ResolveError::NoneReachable { attempted })
    }

    fn should_abort(&self, started: Instant) -> bool {
        if let Some(flag) = &self.stop_flag {
            if flag.load(Ordering::Relaxed) {
                debug!("stop flag raised, abandoning remaining candidates");
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if started.elapsed() >= deadline {
                debug!("resolution deadline of {deadline:?} exceeded");
                return true;
            }
        }
        false
    }
}

/// Entry point for callers that just want an answer: wires the
/// transport-selected finder and the default probe backend, then runs one
/// resolution against `state`.
pub async fn resolve_instance_address(
    state: &ConnectionState,
    cfg: &Config,
) -> Result<IpAddr, ResolveError> {
    let source = finder::for_transport(state, cfg)?;
    let probe = probe::default_probe(cfg);

    let mut resolver = AddressResolver::new(Box::new(source), probe);
    if let Some(deadline) = cfg.resolve_deadline {
        resolver = resolver.with_deadline(deadline);
    }
    resolver.resolve(state).await
}
