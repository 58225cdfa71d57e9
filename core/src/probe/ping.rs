//! Unprivileged probe backend shelling out to the system ping binary.

use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::ReachabilityProbe;

/// Slack on top of ping's own timeout before the subprocess is killed.
const KILL_GRACE: Duration = Duration::from_secs(1);

pub struct PingProbe {
    probe_timeout: Duration,
}

impl PingProbe {
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    fn build_command(&self, addr: IpAddr) -> Command {
        let secs: u64 = self.probe_timeout.as_secs().max(1);
        let mut cmd = Command::new("ping");

        #[cfg(target_os = "linux")]
        cmd.arg("-c").arg("1").arg("-W").arg(secs.to_string());

        #[cfg(target_os = "macos")]
        {
            cmd.arg("-c").arg("1");
            // macOS ping only takes a wait time for IPv4.
            if addr.is_ipv4() {
                cmd.arg("-t").arg(secs.to_string());
            }
        }

        #[cfg(target_os = "windows")]
        cmd.arg("-n")
            .arg("1")
            .arg("-w")
            .arg(self.probe_timeout.as_millis().to_string());

        cmd.arg(addr.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl ReachabilityProbe for PingProbe {
    async fn is_reachable(&self, addr: IpAddr) -> bool {
        let mut cmd: Command = self.build_command(addr);

        match timeout(self.probe_timeout + KILL_GRACE, cmd.status()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("could not spawn ping for {addr}: {e}");
                false
            }
            Err(_) => {
                debug!("ping subprocess for {addr} exceeded its timeout");
                false
            }
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
