use findr_common::config::Config;
use findr_common::state::ConnectionState;
use findr_common::success;
use findr_core::{finder, source};

use crate::terminal::spinner;

pub async fn fqdn(state: ConnectionState, cfg: &Config) -> anyhow::Result<()> {
    let finder = finder::for_transport(&state, cfg)?;

    let spinner = spinner::start("Asking the instance for its FQDN...");
    let result = source::discover_fqdn(&finder, &state).await;
    spinner.finish_and_clear();

    match result {
        Some(fqdn) => {
            success!("{fqdn}");
            Ok(())
        }
        None => anyhow::bail!("could not determine the FQDN of {}", state.hostname),
    }
}
