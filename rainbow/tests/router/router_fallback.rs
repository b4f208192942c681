use rainbow::Asset;

use crate::helpers::{failing, rainbow_with, returning};

#[tokio::test]
async fn first_success_stops_the_chain() {
    let a = failing("a", "timeout");
    let b = returning("b", 500);
    let c = returning("c", 20);
    let rainbow = rainbow_with(&[a.clone(), b.clone(), c.clone()]);

    let (obs, report) = rainbow
        .acquire_with_report(&Asset::bitcoin())
        .await
        .unwrap();

    assert_eq!(obs.len(), 500);
    assert_eq!(report.provider.as_str(), "b");
    assert_eq!(report.observations, 500);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].provider_name(), Some("a"));
    assert_eq!(a.calls(), 1);
    assert_eq!(b.calls(), 1);
    assert_eq!(c.calls(), 0);
}

#[tokio::test]
async fn hanging_provider_after_success_is_never_polled() {
    let first = returning("first", 30);
    let hang = rainbow_mock::MockConnector::builder()
        .name("hang")
        .hangs()
        .build();
    let rainbow = rainbow_with(&[first, hang.clone()]);

    let obs = rainbow.acquire(&Asset::bitcoin()).await.unwrap();
    assert_eq!(obs.len(), 30);
    assert_eq!(hang.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_failure_still_falls_back() {
    let slow = rainbow_mock::MockConnector::builder()
        .name("slow")
        .delay(std::time::Duration::from_secs(30))
        .fails("503")
        .build();
    let fast = returning("fast", 10);
    let rainbow = rainbow_with(&[slow.clone(), fast]);

    let obs = rainbow.acquire(&Asset::bitcoin()).await.unwrap();
    assert_eq!(obs.len(), 10);
    assert_eq!(slow.calls(), 1);
}
