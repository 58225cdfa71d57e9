use std::net::IpAddr;
use std::time::Instant;

use findr_common::config::Config;
use findr_common::success;
use findr_core::probe;

pub async fn probe(address: IpAddr, cfg: &Config) -> anyhow::Result<()> {
    let prober = probe::default_probe(cfg);

    let start_time: Instant = Instant::now();
    if prober.is_reachable(address).await {
        success!(
            "{address} answered in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );
        return Ok(());
    }

    anyhow::bail!(
        "{address} did not answer a liveness probe within {:?}",
        cfg.probe_timeout
    )
}
