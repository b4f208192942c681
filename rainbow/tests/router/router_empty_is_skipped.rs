use rainbow::{Asset, RainbowError};
use rainbow_mock::MockConnector;

use crate::helpers::{rainbow_with, returning};

#[tokio::test]
async fn empty_history_result_is_skipped() {
    let empty = MockConnector::builder().name("empty").empty().build();
    let filled = returning("filled", 40);
    let rainbow = rainbow_with(&[empty.clone(), filled]);

    let (obs, report) = rainbow
        .acquire_with_report(&Asset::bitcoin())
        .await
        .unwrap();
    assert_eq!(obs.len(), 40);
    assert_eq!(report.provider.as_str(), "filled");
    assert_eq!(
        report.failures,
        vec![RainbowError::provider("empty", "returned no observations")]
    );
    assert_eq!(empty.calls(), 1);
}

#[tokio::test]
async fn only_empty_providers_fail() {
    let rainbow = rainbow_with(&[
        MockConnector::builder().name("e1").empty().build(),
        MockConnector::builder().name("e2").empty().build(),
    ]);
    let err = rainbow.acquire(&Asset::bitcoin()).await.unwrap_err();
    assert!(matches!(err, RainbowError::AllProvidersFailed(ref es) if es.len() == 2));
}
