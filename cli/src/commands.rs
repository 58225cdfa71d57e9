pub mod fqdn;
pub mod probe;
pub mod resolve;

use std::net::IpAddr;

use clap::{ArgAction, Args, Parser, Subcommand};
use findr_common::state::{ConnectionState, TransportKind};

#[derive(Parser)]
#[command(name = "findr")]
#[command(about = "Resolves the reachable address of a provisioned test instance.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = 3, global = true)]
    pub probe_timeout: u64,

    /// Overall resolution deadline in seconds (off by default)
    #[arg(long, global = true)]
    pub deadline: Option<u64>,

    /// Probe through the system ping binary even when running as root
    #[arg(long, global = true)]
    pub unprivileged: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the first reachable address of an instance
    #[command(alias = "r")]
    Resolve {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
    /// Check whether a single address answers a liveness probe
    #[command(alias = "p")]
    Probe { address: IpAddr },
    /// Look up the FQDN of an instance over its transport
    #[command(alias = "f")]
    Fqdn {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

/// Endpoint fields as recorded in the instance state.
#[derive(Args)]
pub struct EndpointArgs {
    /// Endpoint hostname; `localhost` or a loopback IP marks a locally
    /// tunnelled instance
    pub hostname: String,

    /// Remote-access transport kind
    #[arg(short, long, default_value = "ssh")]
    pub transport: TransportKind,

    #[arg(short, long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Platform name of the instance (e.g. "ubuntu-22.04", "windows-2019")
    #[arg(long)]
    pub platform: Option<String>,
}

impl EndpointArgs {
    pub fn into_state(self) -> ConnectionState {
        let mut state = ConnectionState::new(self.transport, self.hostname);
        state.merge_credentials(self.username.as_deref(), self.password.as_deref());
        state.port = self.port;
        state.platform = self.platform;
        state
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
