use std::time::Duration;

/// Runtime tunables for a resolution run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound for a single liveness probe.
    ///
    /// An unresponsive candidate costs at most this long before the
    /// resolver moves on to the next one.
    pub probe_timeout: Duration,
    /// Upper bound for a single remote command, connection setup included.
    pub remote_timeout: Duration,
    /// Optional wall-clock budget for a whole resolution.
    ///
    /// Checked between probes only; an in-flight probe still runs to its
    /// own timeout. `None` disables the deadline.
    pub resolve_deadline: Option<Duration>,
    /// Always probe through the system ping binary, even when raw ICMP
    /// sockets would be available.
    pub force_unprivileged: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(3),
            remote_timeout: Duration::from_secs(30),
            resolve_deadline: None,
            force_unprivileged: false,
        }
    }
}
