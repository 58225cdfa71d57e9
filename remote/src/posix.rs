//! Enumeration commands and output parsing for POSIX instances.
//!
//! Address listing prefers iproute2 (`ip -o addr show`) and falls back to
//! `ifconfig -a` on boxes that do not ship it. The parser accepts both the
//! modern `inet 10.0.0.5/24` form and the legacy `inet addr:10.0.0.5` form,
//! so one code path covers old and new distributions.

use std::net::IpAddr;

/// One line per address, stable ordering.
pub const LIST_ADDRESSES: &str = "ip -o addr show";
/// Fallback for systems without iproute2.
pub const LIST_ADDRESSES_FALLBACK: &str = "ifconfig -a";
pub const FIND_FQDN: &str = "hostname -f";

/// Extracts every IPv4/IPv6 address from `ip addr` or `ifconfig` output.
///
/// First-seen order is preserved and duplicates are dropped; the caller
/// relies on ordering for its first-reachable-wins contract. Loopback is
/// kept — excluding it is the resolver's job, not the parser's.
pub fn parse_addresses(output: &str) -> Vec<IpAddr> {
    let mut addresses: Vec<IpAddr> = Vec::new();

    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            if token != "inet" && token != "inet6" {
                continue;
            }
            let Some(mut value) = tokens.next() else {
                break;
            };
            // Old ifconfig prints "inet6 addr: fe80::..." with a space.
            if value == "addr:" {
                let Some(next) = tokens.next() else {
                    break;
                };
                value = next;
            }
            if let Some(addr) = parse_address_token(value) {
                if !addresses.contains(&addr) {
                    addresses.push(addr);
                }
            }
        }
    }

    addresses
}

/// Normalizes one address token: strips the legacy `addr:` prefix, a CIDR
/// suffix, and an IPv6 zone id.
fn parse_address_token(token: &str) -> Option<IpAddr> {
    let token: &str = token.strip_prefix("addr:").unwrap_or(token);
    let token: &str = token.split('/').next()?;
    let token: &str = token.split('%').next()?;
    token.parse::<IpAddr>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
