use rainbow::{Asset, Observation, RainbowError};
use rainbow_mock::MockConnector;

use crate::helpers::{failing, rainbow_with, returning};

#[tokio::test]
async fn end_to_end_thousand_points() {
    let rainbow = rainbow_with(&[returning("synthetic", 1000)]);
    let (prepared, report) = rainbow
        .prepare_with_report(&Asset::bitcoin())
        .await
        .unwrap();

    assert_eq!(report.provider.as_str(), "synthetic");
    assert_eq!(prepared.len(), 1000);
    assert_eq!(prepared.bands().curves().len(), 8);
    assert!(prepared.bands().curves().iter().all(|c| c.len() == 1000));
    assert!(prepared.events().len() <= 4);
    assert!(prepared.rows().windows(2).all(|w| w[0].ts <= w[1].ts));
    for row in prepared.rows() {
        assert!(row.boundaries.windows(2).all(|w| w[0] < w[1]));
    }
    assert!(prepared.min_y() >= 1.0);
    assert!(prepared.current_band().is_some());
}

#[tokio::test]
async fn full_range_history_reports_all_halvings() {
    let rainbow = rainbow_with(&[std::sync::Arc::new(MockConnector::new())]);
    let prepared = rainbow.prepare(&Asset::bitcoin()).await.unwrap();
    let labels: Vec<&str> = prepared.events().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["First halving", "Second halving", "Third halving", "Fourth halving"]
    );
}

#[tokio::test]
async fn insufficient_data_does_not_fall_back() {
    let sparse = MockConnector::builder()
        .name("sparse")
        .returns(vec![
            Observation::new(1_000, 1.0),
            Observation::new(2_000, f64::NAN),
            Observation::new(3_000, 3.0),
        ])
        .build();
    let backup = returning("backup", 100);
    let rainbow = rainbow_with(&[sparse, backup.clone()]);

    let err = rainbow.prepare(&Asset::bitcoin()).await.unwrap_err();
    assert_eq!(err, RainbowError::insufficient_data(3, 2));
    assert_eq!(backup.calls(), 0);
}

#[tokio::test]
async fn failures_before_winner_are_reported() {
    let rainbow = rainbow_with(&[
        failing("down", "CoinGecko 500"),
        returning("up", 50),
    ]);
    let (prepared, report) = rainbow
        .prepare_with_report(&Asset::bitcoin())
        .await
        .unwrap();
    assert_eq!(prepared.len(), 50);
    assert_eq!(report.failures[0].to_string(), "down: CoinGecko 500");
}
