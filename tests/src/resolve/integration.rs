#![cfg(test)]
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use findr_common::error::ResolveError;
use findr_common::state::{ConnectionState, TransportKind};
use findr_core::resolver::AddressResolver;

use crate::fakes::{FakeSource, RecordingProbe};

fn state() -> ConnectionState {
    ConnectionState::new(TransportKind::Ssh, "localhost")
}

fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[tokio::test]
async fn first_reachable_candidate_wins_and_later_ones_are_never_probed() {
    let source = FakeSource::with_addresses(&["10.0.0.4", "10.0.0.5", "10.0.0.6"]);
    let probe = RecordingProbe::reachable(&["10.0.0.5", "10.0.0.6"]);
    let log = probe.log();
    let resolver = AddressResolver::new(Box::new(source), Box::new(probe));

    let result = resolver.resolve(&state()).await;

    assert_eq!(result, Ok(addr("10.0.0.5")));
    assert_eq!(
        *log.lock().unwrap(),
        vec![addr("10.0.0.4"), addr("10.0.0.5")],
        "probing must stop at the first reachable candidate"
    );
}

#[tokio::test]
async fn loopback_candidates_are_skipped_without_probing() {
    let source = FakeSource::with_addresses(&["127.0.0.1", "10.0.0.5", "10.0.0.6"]);
    let probe = RecordingProbe::reachable(&["10.0.0.6"]);
    let log = probe.log();
    let resolver = AddressResolver::new(Box::new(source), Box::new(probe));

    let result = resolver.resolve(&state()).await;

    assert_eq!(result, Ok(addr("10.0.0.6")));
    assert!(
        !log.lock().unwrap().contains(&addr("127.0.0.1")),
        "loopback must never be probed"
    );
}

#[tokio::test]
async fn loopback_only_candidates_fail_with_none_reachable() {
    let source = FakeSource::with_addresses(&["127.0.0.1", "::1"]);
    let probe = RecordingProbe::reachable(&["127.0.0.1", "::1"]);
    let log = probe.log();
    let resolver = AddressResolver::new(Box::new(source), Box::new(probe));

    let result = resolver.resolve(&state()).await;

    assert_eq!(
        result,
        Err(ResolveError::NoneReachable {
            attempted: Vec::new()
        })
    );
    assert!(log.lock().unwrap().is_empty(), "no probe should be sent");
}

#[tokio::test]
async fn single_unreachable_candidate_reports_the_attempted_list() {
    let source = FakeSource::with_addresses(&["10.0.0.5"]);
    let resolver =
        AddressResolver::new(Box::new(source), Box::new(RecordingProbe::none_reachable()));

    let result = resolver.resolve(&state()).await;

    assert_eq!(
        result,
        Err(ResolveError::NoneReachable {
            attempted: vec![addr("10.0.0.5")]
        })
    );
}

#[tokio::test]
async fn empty_candidate_list_is_distinct_from_none_reachable() {
    let resolver = AddressResolver::new(
        Box::new(FakeSource::empty()),
        Box::new(RecordingProbe::none_reachable()),
    );

    let result = resolver.resolve(&state()).await;

    assert_eq!(result, Err(ResolveError::NoCandidates));
}

#[tokio::test]
async fn unavailable_backend_fails_without_probing() {
    let probe = RecordingProbe::reachable(&["10.0.0.5"]);
    let log = probe.log();
    let resolver = AddressResolver::new(Box::new(FakeSource::unavailable()), Box::new(probe));

    let result = resolver.resolve(&state()).await;

    assert!(matches!(result, Err(ResolveError::DiscoveryUnavailable(_))));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_calls_with_fixed_fakes_are_idempotent() {
    let source = FakeSource::with_addresses(&["10.0.0.4", "10.0.0.5"]);
    let probe = RecordingProbe::reachable(&["10.0.0.5"]);
    let resolver = AddressResolver::new(Box::new(source), Box::new(probe));

    let first = resolver.resolve(&state()).await;
    let second = resolver.resolve(&state()).await;

    assert_eq!(first, second);
    assert_eq!(first, Ok(addr("10.0.0.5")));
}

#[tokio::test]
async fn raised_stop_flag_aborts_before_the_next_probe() {
    let source = FakeSource::with_addresses(&["10.0.0.5", "10.0.0.6"]);
    let probe = RecordingProbe::reachable(&["10.0.0.6"]);
    let log = probe.log();

    let flag = Arc::new(AtomicBool::new(true));
    let resolver =
        AddressResolver::new(Box::new(source), Box::new(probe)).with_stop_flag(flag);

    let result = resolver.resolve(&state()).await;

    assert_eq!(
        result,
        Err(ResolveError::Aborted {
            attempted: Vec::new()
        })
    );
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn zero_deadline_aborts_with_the_attempted_so_far_list() {
    let source = FakeSource::with_addresses(&["10.0.0.5", "10.0.0.6"]);
    let resolver = AddressResolver::new(
        Box::new(source),
        Box::new(RecordingProbe::none_reachable()),
    )
    .with_deadline(Duration::ZERO);

    let result = resolver.resolve(&state()).await;

    // The deadline is checked between candidates; with a zero budget the
    // first check already trips.
    assert_eq!(
        result,
        Err(ResolveError::Aborted {
            attempted: Vec::new()
        })
    );
}

#[tokio::test]
async fn generous_deadline_does_not_interfere() {
    let source = FakeSource::with_addresses(&["10.0.0.5"]);
    let probe = RecordingProbe::reachable(&["10.0.0.5"]);
    let resolver = AddressResolver::new(Box::new(source), Box::new(probe))
        .with_deadline(Duration::from_secs(60));

    let result = resolver.resolve(&state()).await;

    assert_eq!(result, Ok(addr("10.0.0.5")));
}
