//! Failure taxonomy for address discovery and resolution.
//!
//! Every reason stays inspectable on its own so callers can pick different
//! remediation: retry after a delay when no candidate answered, fail fast
//! when the discovery backend itself is unusable.

use std::net::IpAddr;

use thiserror::Error;

use crate::state::TransportKind;

/// The candidate-address backend could not be queried at all.
///
/// Distinct from "queried fine, zero candidates known" — that case is an
/// empty list, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// No discovery backend exists for this transport kind.
    #[error("transport kind '{kind}' has no discovery backend")]
    UnsupportedTransport { kind: TransportKind },
    /// A remote enumeration command could not be executed or exited nonzero.
    #[error("remote command '{command}' failed: {detail}")]
    CommandFailed { command: String, detail: String },
}

/// Terminal outcome of a single resolution attempt.
///
/// None of these are retried internally; whether to retry the whole
/// resolution (say, while an instance is still booting) is the caller's
/// decision.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("address discovery unavailable: {0}")]
    DiscoveryUnavailable(#[from] DiscoveryError),
    #[error("the discovery backend reported no candidate addresses")]
    NoCandidates,
    #[error("none of the candidate addresses answered a liveness probe: {attempted:?}")]
    NoneReachable { attempted: Vec<IpAddr> },
    #[error("resolution aborted before all candidates were probed: {attempted:?}")]
    Aborted { attempted: Vec<IpAddr> },
}

impl ResolveError {
    /// The candidates that were actually probed before this failure,
    /// in probe order. Useful for diagnostics output.
    pub fn attempted(&self) -> Option<&[IpAddr]> {
        match self {
            ResolveError::NoneReachable { attempted } | ResolveError::Aborted { attempted } => {
                Some(attempted)
            }
            _ => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
