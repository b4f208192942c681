use rainbow::{Asset, RainbowError};

use crate::helpers::{failing, rainbow_with};

#[tokio::test]
async fn aggregate_lists_every_failure_in_order() {
    let rainbow = rainbow_with(&[
        failing("CoinGecko", "CoinGecko 429"),
        failing("CoinCap", "CoinCap bad payload"),
        failing("Blockchain.info", "Blockchain.info 503"),
    ]);

    let err = rainbow.prepare(&Asset::bitcoin()).await.unwrap_err();
    let msg = err.to_string();

    let first = msg.find("CoinGecko 429").expect("first reason");
    let second = msg.find("CoinCap bad payload").expect("second reason");
    let third = msg.find("Blockchain.info 503").expect("third reason");
    assert!(first < second && second < third, "{msg}");
    assert!(msg.starts_with("all data providers failed"));

    match err {
        RainbowError::AllProvidersFailed(es) => {
            assert_eq!(es.len(), 3);
            assert!(es.iter().all(RainbowError::is_recoverable));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn single_failing_provider_is_still_aggregated() {
    let rainbow = rainbow_with(&[failing("only", "connection refused")]);
    let err = rainbow.acquire(&Asset::bitcoin()).await.unwrap_err();
    assert_eq!(
        err,
        RainbowError::AllProvidersFailed(vec![RainbowError::provider(
            "only",
            "connection refused"
        )])
    );
}
