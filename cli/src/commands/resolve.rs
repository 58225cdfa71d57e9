use std::time::Instant;

use findr_common::config::Config;
use findr_common::state::ConnectionState;
use findr_common::success;
use findr_core::resolver;

use crate::terminal::{print, spinner};

pub async fn resolve(state: ConnectionState, cfg: &Config) -> anyhow::Result<()> {
    // A non-local endpoint hostname already names the reachable address;
    // candidate discovery only helps for locally tunnelled instances.
    if !state.is_local_endpoint() {
        success!("instance reachable at {}", state.hostname);
        return Ok(());
    }

    let spinner = spinner::start("Probing candidate addresses...");
    let start_time: Instant = Instant::now();
    let result = resolver::resolve_instance_address(&state, cfg).await;
    spinner.finish_and_clear();

    match result {
        Ok(addr) => {
            print::resolved(addr, start_time.elapsed());
            Ok(())
        }
        Err(err) => {
            if let Some(attempted) = err.attempted() {
                print::attempted_list(attempted);
            }
            Err(err.into())
        }
    }
}
