use rainbow::{Asset, Rainbow, RainbowConfig, RainbowError, ReferenceEvent};

use crate::helpers::{day, returning};

#[test]
fn build_without_connectors_is_invalid() {
    let res = Rainbow::builder().build();
    assert!(matches!(res, Err(RainbowError::InvalidArg(_))));
}

#[test]
fn build_rejects_unordered_multipliers() {
    let res = Rainbow::builder()
        .with_connector(returning("a", 5))
        .multipliers([0.0, -1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .build();
    assert!(matches!(res, Err(RainbowError::InvalidArg(_))));
}

#[tokio::test]
async fn custom_configuration_flows_through() {
    let events = vec![ReferenceEvent::new("Mid", day(2018, 6, 1))];
    let rainbow = Rainbow::builder()
        .with_connector(returning("a", 300))
        .multipliers([-2.0, -1.5, -1.0, -0.5, 0.5, 1.0, 1.5, 2.0])
        .reference_events(events.clone())
        .min_y_floor(0.0)
        .build()
        .unwrap();

    let prepared = rainbow.prepare(&Asset::bitcoin()).await.unwrap();
    assert_eq!(prepared.multipliers()[0], -2.0);
    assert_eq!(prepared.events(), events.as_slice());
    assert_eq!(rainbow.config().min_y_floor, 0.0);
}

#[test]
fn config_from_json() {
    let cfg: RainbowConfig = serde_json::from_str(
        r#"{
            "multipliers": [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0],
            "reference_events": [],
            "min_y_floor": 0.5
        }"#,
    )
    .unwrap();
    let rainbow = Rainbow::builder()
        .with_connector(returning("a", 5))
        .config(cfg.clone())
        .build()
        .unwrap();
    assert_eq!(rainbow.config(), &cfg);
}
