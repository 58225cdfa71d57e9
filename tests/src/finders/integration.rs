#![cfg(test)]
use std::net::IpAddr;

use findr_common::config::Config;
use findr_common::error::DiscoveryError;
use findr_common::state::{ConnectionState, TransportKind};
use findr_core::finder;
use findr_core::source::{CandidateAddressSource, FqdnSource, discover_fqdn};
use findr_remote::{posix, windows};

use crate::fakes::FakeExec;

const IP_ADDR_OUTPUT: &str = "\
1: lo    inet 127.0.0.1/8 scope host lo
2: eth0    inet 10.0.0.5/24 brd 10.0.0.255 scope global eth0
3: eth1    inet 192.168.56.12/24 brd 192.168.56.255 scope global eth1
";

const IFCONFIG_OUTPUT: &str = "\
eth0      Link encap:Ethernet  HWaddr 00:16:3e:74:5e:2c
          inet addr:10.0.0.5  Bcast:10.0.0.255  Mask:255.255.255.0
";

const IPCONFIG_OUTPUT: &str = "\
Ethernet adapter Ethernet:

   IPv4 Address. . . . . . . . . . . : 10.0.0.9(Preferred)
   Subnet Mask . . . . . . . . . . . : 255.255.255.0
";

fn ssh_state(platform: Option<&str>) -> ConnectionState {
    let mut state = ConnectionState::new(TransportKind::Ssh, "localhost");
    state.platform = platform.map(str::to_string);
    state
}

fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[tokio::test]
async fn posix_finder_lists_addresses_in_interface_order() {
    let exec = FakeExec::new(&[(posix::LIST_ADDRESSES, IP_ADDR_OUTPUT)]);
    let finder = finder::with_exec(&ssh_state(Some("ubuntu-22.04")), Box::new(exec));

    let addresses = finder
        .list_addresses(&ssh_state(Some("ubuntu-22.04")))
        .await
        .unwrap();

    assert_eq!(
        addresses,
        vec![addr("127.0.0.1"), addr("10.0.0.5"), addr("192.168.56.12")]
    );
}

#[tokio::test]
async fn posix_finder_falls_back_to_ifconfig_when_ip_is_missing() {
    let exec = FakeExec::new(&[(posix::LIST_ADDRESSES_FALLBACK, IFCONFIG_OUTPUT)]);
    let log = exec.log();
    let finder = finder::with_exec(&ssh_state(None), Box::new(exec));

    let addresses = finder.list_addresses(&ssh_state(None)).await.unwrap();

    assert_eq!(addresses, vec![addr("10.0.0.5")]);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            posix::LIST_ADDRESSES.to_string(),
            posix::LIST_ADDRESSES_FALLBACK.to_string()
        ]
    );
}

#[tokio::test]
async fn posix_finder_reports_discovery_error_when_both_commands_fail() {
    let exec = FakeExec::new(&[]);
    let finder = finder::with_exec(&ssh_state(None), Box::new(exec));

    let result = finder.list_addresses(&ssh_state(None)).await;

    assert!(matches!(
        result,
        Err(DiscoveryError::CommandFailed { .. })
    ));
}

#[tokio::test]
async fn platform_hint_routes_windows_instances_to_ipconfig() {
    let exec = FakeExec::new(&[(windows::LIST_ADDRESSES, IPCONFIG_OUTPUT)]);
    let state = ssh_state(Some("windows-2019"));
    let finder = finder::with_exec(&state, Box::new(exec));

    let addresses = finder.list_addresses(&state).await.unwrap();

    assert_eq!(addresses, vec![addr("10.0.0.9")]);
}

#[tokio::test]
async fn winrm_transport_is_a_distinct_unsupported_error() {
    let state = ConnectionState::new(TransportKind::Winrm, "localhost");

    let result = finder::for_transport(&state, &Config::default());

    assert!(matches!(
        result,
        Err(DiscoveryError::UnsupportedTransport {
            kind: TransportKind::Winrm
        })
    ));
}

#[tokio::test]
async fn fqdn_lookup_trims_the_command_output() {
    let exec = FakeExec::new(&[(posix::FIND_FQDN, "node1.example.test\n")]);
    let state = ssh_state(None);
    let finder = finder::with_exec(&state, Box::new(exec));

    assert_eq!(
        finder.find_fqdn(&state).await.unwrap(),
        "node1.example.test"
    );
}

#[tokio::test]
async fn failed_fqdn_lookup_becomes_an_explicit_none() {
    let exec = FakeExec::new(&[]);
    let state = ssh_state(None);
    let finder = finder::with_exec(&state, Box::new(exec));

    assert_eq!(discover_fqdn(&finder, &state).await, None);
}

#[tokio::test]
async fn empty_fqdn_output_is_an_error_not_an_empty_name() {
    let exec = FakeExec::new(&[(posix::FIND_FQDN, "  \n")]);
    let state = ssh_state(None);
    let finder = finder::with_exec(&state, Box::new(exec));

    assert!(finder.find_fqdn(&state).await.is_err());
}
