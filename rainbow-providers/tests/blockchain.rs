use httpmock::prelude::*;
use rainbow_core::{Asset, Observation, PriceConnector, RainbowError};
use rainbow_providers::BlockchainInfoConnector;

fn connector(server: &MockServer) -> BlockchainInfoConnector {
    BlockchainInfoConnector::new()
        .unwrap()
        .with_base_url(&server.base_url())
        .unwrap()
}

#[tokio::test]
async fn parses_values_in_seconds() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/charts/market-price")
                .query_param("format", "json")
                .query_param("cors", "true");
            then.status(200).body(
                r#"{"status":"ok","name":"Market Price (USD)","unit":"USD","values":[{"x":1231459200,"y":0.0},{"x":1713571200,"y":64000.5}]}"#,
            );
        })
        .await;

    let obs = connector(&server).history(&Asset::bitcoin()).await.unwrap();
    mock.assert_async().await;

    assert_eq!(
        obs,
        vec![
            Observation::new(1_231_459_200_000, 0.0),
            Observation::new(1_713_571_200_000, 64_000.5),
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_provider_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/charts/market-price");
            then.status(500);
        })
        .await;

    let err = connector(&server)
        .history(&Asset::bitcoin())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RainbowError::provider("blockchain-info", "Blockchain.info 500")
    );
}

#[tokio::test]
async fn missing_values_is_bad_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/charts/market-price");
            then.status(200).body(r#"{"status":"error"}"#);
        })
        .await;

    let err = connector(&server)
        .history(&Asset::bitcoin())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RainbowError::provider("blockchain-info", "Blockchain bad payload")
    );
}

#[tokio::test]
async fn other_assets_fail_without_a_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/charts/market-price");
            then.status(200).body(r#"{"values":[]}"#);
        })
        .await;

    let err = connector(&server)
        .history(&Asset::new("ethereum", "ETH"))
        .await
        .unwrap_err();
    assert_eq!(err.provider_name(), Some("blockchain-info"));
    mock.assert_hits_async(0).await;
}
