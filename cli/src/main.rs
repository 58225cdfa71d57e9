mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, fqdn, probe, resolve};
use findr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = Config {
        probe_timeout: Duration::from_secs(commands.probe_timeout),
        resolve_deadline: commands.deadline.map(Duration::from_secs),
        force_unprivileged: commands.unprivileged,
        ..Config::default()
    };

    match commands.command {
        Commands::Resolve { endpoint } => {
            print::header("resolving instance address");
            resolve::resolve(endpoint.into_state(), &cfg).await
        }
        Commands::Probe { address } => {
            print::header("probing address");
            probe::probe(address, &cfg).await
        }
        Commands::Fqdn { endpoint } => {
            print::header("looking up fqdn");
            fqdn::fqdn(endpoint.into_state(), &cfg).await
        }
    }
}
