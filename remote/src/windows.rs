//! Enumeration commands and output parsing for Windows instances.

use std::net::IpAddr;

pub const LIST_ADDRESSES: &str = "ipconfig";
/// `hostname` on Windows reports the flat name; DNS gives the FQDN.
pub const FIND_FQDN: &str = "powershell -NoProfile -Command \
     \"[System.Net.Dns]::GetHostByName($env:computername).HostName\"";

/// Extracts every address from `ipconfig` output.
///
/// Matches any `... Address ... : value` line, which covers the
/// `IPv4 Address`, `IP Address`, `IPv6 Address` and `Link-local IPv6
/// Address` labels across Windows versions, while the label check keeps
/// subnet masks and gateways out. `(Preferred)` suffixes and zone ids are
/// stripped. First-seen order is preserved, duplicates dropped.
pub fn parse_addresses(output: &str) -> Vec<IpAddr> {
    let mut addresses: Vec<IpAddr> = Vec::new();

    for line in output.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        if !label.contains("Address") {
            continue;
        }
        if let Some(addr) = parse_address_value(value) {
            if !addresses.contains(&addr) {
                addresses.push(addr);
            }
        }
    }

    addresses
}

fn parse_address_value(value: &str) -> Option<IpAddr> {
    let value: &str = value.trim();
    let value: &str = value.strip_suffix("(Preferred)").unwrap_or(value);
    let value: &str = value.split('%').next()?;
    value.trim().parse::<IpAddr>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
