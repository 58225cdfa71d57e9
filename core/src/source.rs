//! The central **abstractions** for instance metadata discovery.
//!
//! High-level code depends on these traits rather than on concrete
//! finders, so the resolver works unchanged against any transport backend
//! and tests can inject deterministic sources.

use std::net::IpAddr;

use async_trait::async_trait;
use findr_common::error::DiscoveryError;
use findr_common::state::ConnectionState;
use tracing::warn;

/// Produces the ordered candidate addresses of a managed instance.
///
/// Ordering is significant: the resolver probes candidates front to back
/// and takes the first live one. An empty list means "no candidates
/// known" and is not an error; a [`DiscoveryError`] means the backend
/// itself could not be queried.
#[async_trait]
pub trait CandidateAddressSource: Send + Sync {
    async fn list_addresses(&self, state: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError>;
}

/// Looks up the fully qualified domain name of a managed instance.
#[async_trait]
pub trait FqdnSource: Send + Sync {
    async fn find_fqdn(&self, state: &ConnectionState) -> Result<String, DiscoveryError>;
}

#[async_trait]
impl CandidateAddressSource for Box<dyn CandidateAddressSource> {
    async fn list_addresses(&self, state: &ConnectionState) -> Result<Vec<IpAddr>, DiscoveryError> {
        (**self).list_addresses(state).await
    }
}

#[async_trait]
impl FqdnSource for Box<dyn FqdnSource> {
    async fn find_fqdn(&self, state: &ConnectionState) -> Result<String, DiscoveryError> {
        (**self).find_fqdn(state).await
    }
}

/// FQDN lookup as an optional enrichment: a failure is logged with its
/// reason and reported as `None`, never silently swallowed.
pub async fn discover_fqdn(source: &dyn FqdnSource, state: &ConnectionState) -> Option<String> {
    match source.find_fqdn(state).await {
        Ok(fqdn) => Some(fqdn),
        Err(e) => {
            warn!("FQDN lookup for {} failed: {e}", state.hostname);
            None
        }
    }
}
