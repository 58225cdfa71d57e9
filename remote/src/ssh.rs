//! [`RemoteExec`] backend shelling out to the system `ssh` client.
//!
//! Runs in batch mode so a missing key fails immediately instead of
//! hanging on a password prompt. Requires that key authentication is
//! already set up for the instance.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use findr_common::error::DiscoveryError;
use findr_common::state::ConnectionState;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::exec::RemoteExec;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SshExec {
    hostname: String,
    port: Option<u16>,
    username: Option<String>,
    /// Wall-clock bound for one command, connection setup included.
    command_timeout: Duration,
}

impl SshExec {
    pub fn new(state: &ConnectionState, command_timeout: Duration) -> Self {
        if state.password.is_some() {
            warn!(
                "ssh backend authenticates with keys; ignoring the password for {}",
                state.hostname
            );
        }

        Self {
            hostname: state.hostname.clone(),
            port: state.port,
            username: state.username.clone(),
            command_timeout,
        }
    }

    fn build_command(&self, command: &str) -> Command {
        let target: String = match &self.username {
            Some(username) => format!("{username}@{}", self.hostname),
            None => self.hostname.clone(),
        };

        let mut cmd = Command::new("ssh");
        cmd.arg("-o")
            .arg("BatchMode=yes")
            .arg("-o")
            .arg("StrictHostKeyChecking=accept-new")
            .arg("-o")
            .arg(format!("ConnectTimeout={}", CONNECT_TIMEOUT.as_secs()));

        if let Some(port) = self.port {
            cmd.arg("-p").arg(port.to_string());
        }

        cmd.arg(target)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn command_failed(&self, command: &str, detail: String) -> DiscoveryError {
        DiscoveryError::CommandFailed {
            command: command.to_string(),
            detail,
        }
    }
}

#[async_trait]
impl RemoteExec for SshExec {
    async fn run(&self, command: &str) -> Result<String, DiscoveryError> {
        debug!("running '{command}' on {}", self.hostname);
        let mut cmd: Command = self.build_command(command);

        let output = timeout(self.command_timeout, cmd.output())
            .await
            .map_err(|_| {
                self.command_failed(
                    command,
                    format!("timed out after {:?}", self.command_timeout),
                )
            })?
            .map_err(|e| self.command_failed(command, format!("could not spawn ssh: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.command_failed(
                command,
                format!("{} ({})", output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
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
