//! # Instance Connection Model
//!
//! Describes how a provisioned instance can be reached.
//!
//! A [`ConnectionState`] is handed to findr by whoever owns the durable
//! instance records (a provisioning framework, a CLI invocation). It is
//! read-only from the resolver's point of view: credential merging happens
//! on the caller's side before the state is passed in.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// The remote-access mechanism used to reach an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Remote shell over the system `ssh` client.
    Ssh,
    /// Windows remote-execution API. Recognized, but no execution backend
    /// ships with findr; discovery reports it as unsupported.
    Winrm,
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssh" => Ok(TransportKind::Ssh),
            "winrm" => Ok(TransportKind::Winrm),
            _ => Err(format!("unknown transport kind: {s}")),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Ssh => write!(f, "ssh"),
            TransportKind::Winrm => write!(f, "winrm"),
        }
    }
}

/// Rough platform family of an instance, derived from its platform name.
///
/// Decides which command set the finders use for address enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Posix,
    Windows,
}

/// Endpoint metadata and credentials for one instance.
///
/// Resolver calls borrow the state immutably and never mutate it.
#[derive(Debug, Clone)]
pub struct ConnectionState {
    pub transport: TransportKind,
    /// Endpoint hostname as recorded by the provisioning framework. For
    /// locally tunnelled instances this is `localhost` or a loopback IP.
    pub hostname: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Platform name of the instance, e.g. `ubuntu-22.04` or `windows-2019`.
    pub platform: Option<String>,
}

impl ConnectionState {
    pub fn new(transport: TransportKind, hostname: impl Into<String>) -> Self {
        Self {
            transport,
            hostname: hostname.into(),
            port: None,
            username: None,
            password: None,
            platform: None,
        }
    }

    /// Overrides the stored credentials with driver-level ones where given.
    ///
    /// Some drivers carry the working credentials themselves instead of
    /// writing them into the instance state; callers merge those in before
    /// handing the state to findr.
    pub fn merge_credentials(&mut self, username: Option<&str>, password: Option<&str>) {
        if let Some(username) = username {
            self.username = Some(username.to_string());
        }
        if let Some(password) = password {
            self.password = Some(password.to_string());
        }
    }

    /// Platform family derived from the first dash-separated token of the
    /// platform name; anything that is not `windows` counts as POSIX.
    pub fn platform_family(&self) -> PlatformFamily {
        let family: Option<&str> = self
            .platform
            .as_deref()
            .and_then(|name| name.split('-').next());

        match family {
            Some(name) if name.eq_ignore_ascii_case("windows") => PlatformFamily::Windows,
            _ => PlatformFamily::Posix,
        }
    }

    /// Whether the endpoint hostname points back at the local machine.
    ///
    /// A non-local hostname already names the reachable address; candidate
    /// discovery is only worthwhile for locally tunnelled endpoints.
    pub fn is_local_endpoint(&self) -> bool {
        if self.hostname.eq_ignore_ascii_case("localhost") {
            return true;
        }
        self.hostname
            .parse::<IpAddr>()
            .map(|addr| addr.is_loopback())
            .unwrap_or(false)
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
