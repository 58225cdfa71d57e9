//! Privileged probe backend: ICMP echo over raw transport channels.
//!
//! One channel is opened per probe and torn down with it, so concurrent
//! resolutions never share socket state. The blocking pnet receive loop
//! runs on the blocking thread pool.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use pnet::packet::Packet;
use pnet::packet::icmp::{self, IcmpPacket, IcmpTypes};
use pnet::packet::icmpv6::Icmpv6Types;
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::transport::{
    self, TransportChannelType, TransportProtocol, TransportReceiver, TransportSender,
    icmp_packet_iter, icmpv6_packet_iter,
};
use tracing::debug;

use super::ReachabilityProbe;

const CHANNEL_BUFFER_SIZE: usize = 4096;
const ECHO_REQ_LEN: usize = 16;
const CHANNEL_TYPE_V4: TransportChannelType =
    TransportChannelType::Layer4(TransportProtocol::Ipv4(IpNextHeaderProtocols::Icmp));
const CHANNEL_TYPE_V6: TransportChannelType =
    TransportChannelType::Layer4(TransportProtocol::Ipv6(IpNextHeaderProtocols::Icmpv6));

pub struct IcmpProbe {
    probe_timeout: Duration,
}

impl IcmpProbe {
    /// Fails when no raw ICMP channel can be opened, which is the signal
    /// to fall back to the unprivileged backend.
    pub fn new(probe_timeout: Duration) -> anyhow::Result<Self> {
        open_channel(CHANNEL_TYPE_V4).context("opening ICMP transport channel")?;
        Ok(Self { probe_timeout })
    }
}

#[async_trait]
impl ReachabilityProbe for IcmpProbe {
    async fn is_reachable(&self, addr: IpAddr) -> bool {
        let timeout: Duration = self.probe_timeout;
        let result = tokio::task::spawn_blocking(move || match addr {
            IpAddr::V4(v4) => probe_v4(v4, timeout),
            IpAddr::V6(v6) => probe_v6(v6, timeout),
        })
        .await;

        match result {
            Ok(Ok(alive)) => alive,
            Ok(Err(e)) => {
                debug!("ICMP probe to {addr} failed: {e}");
                false
            }
            Err(e) => {
                debug!("ICMP probe task for {addr} panicked: {e}");
                false
            }
        }
    }
}

fn open_channel(
    channel_type: TransportChannelType,
) -> anyhow::Result<(TransportSender, TransportReceiver)> {
    let (tx, rx) = transport::transport_channel(CHANNEL_BUFFER_SIZE, channel_type)?;
    Ok((tx, rx))
}

fn probe_v4(addr: Ipv4Addr, timeout: Duration) -> anyhow::Result<bool> {
    let (mut tx, mut rx) = open_channel(CHANNEL_TYPE_V4)?;
    let identifier: u16 = rand::random();

    let mut buf = [0u8; ECHO_REQ_LEN];
    let mut echo = icmp::echo_request::MutableEchoRequestPacket::new(&mut buf)
        .context("failed to create echo request packet")?;
    echo.set_icmp_type(IcmpTypes::EchoRequest);
    echo.set_identifier(identifier);
    echo.set_sequence_number(0);
    echo.set_checksum(0);
    let csum = icmp::checksum(
        &IcmpPacket::new(echo.packet()).context("failed to reread echo request")?,
    );
    echo.set_checksum(csum);

    tx.send_to(echo.to_immutable(), IpAddr::V4(addr))?;

    let deadline: Instant = Instant::now() + timeout;
    let mut iter = icmp_packet_iter(&mut rx);
    loop {
        let remaining: Duration = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        match iter.next_with_timeout(remaining)? {
            Some((packet, source)) => {
                if source != IpAddr::V4(addr) || packet.get_icmp_type() != IcmpTypes::EchoReply {
                    continue;
                }
                let reply = icmp::echo_reply::EchoReplyPacket::new(packet.packet());
                if reply.is_some_and(|r| r.get_identifier() == identifier) {
                    return Ok(true);
                }
            }
            None => return Ok(false),
        }
    }
}

fn probe_v6(addr: Ipv6Addr, timeout: Duration) -> anyhow::Result<bool> {
    use pnet::packet::icmpv6::echo_request::MutableEchoRequestPacket;

    let (mut tx, mut rx) = open_channel(CHANNEL_TYPE_V6)?;
    let identifier: u16 = rand::random();

    let mut buf = [0u8; ECHO_REQ_LEN];
    let mut echo = MutableEchoRequestPacket::new(&mut buf)
        .context("failed to create ICMPv6 echo request packet")?;
    echo.set_icmpv6_type(Icmpv6Types::EchoRequest);
    echo.set_identifier(identifier);
    echo.set_sequence_number(0);
    // The kernel fills in ICMPv6 checksums on raw sockets.
    echo.set_checksum(0);

    tx.send_to(echo.to_immutable(), IpAddr::V6(addr))?;

    let deadline: Instant = Instant::now() + timeout;
    let mut iter = icmpv6_packet_iter(&mut rx);
    loop {
        let remaining: Duration = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        match iter.next_with_timeout(remaining)? {
            Some((packet, source)) => {
                if source != IpAddr::V6(addr)
                    || packet.get_icmpv6_type() != Icmpv6Types::EchoReply
                {
                    continue;
                }
                let reply = pnet::packet::icmpv6::echo_reply::EchoReplyPacket::new(packet.packet());
                if reply.is_some_and(|r| r.get_identifier() == identifier) {
                    return Ok(true);
                }
            }
            None => return Ok(false),
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
