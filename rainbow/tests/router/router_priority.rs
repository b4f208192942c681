use rainbow::{Asset, PriceConnector, ProviderKey, Rainbow};

use crate::helpers::returning;

#[tokio::test]
async fn preferred_provider_is_tried_first() {
    let a = returning("a", 10);
    let b = returning("b", 20);
    let c = returning("c", 30);
    let rainbow = Rainbow::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .with_connector(c.clone())
        .prefer(&[c.key()])
        .build()
        .unwrap();

    assert_eq!(rainbow.provider_order(), vec!["c", "a", "b"]);
    let obs = rainbow.acquire(&Asset::bitcoin()).await.unwrap();
    assert_eq!(obs.len(), 30);
    assert_eq!(a.calls(), 0);
}

#[test]
fn unknown_and_duplicate_keys_are_dropped() {
    let a = returning("a", 10);
    let b = returning("b", 20);
    let rainbow = Rainbow::builder()
        .with_connector(a)
        .with_connector(b)
        .prefer(&[
            ProviderKey::new("missing"),
            ProviderKey::new("b"),
            ProviderKey::new("b"),
        ])
        .build()
        .unwrap();
    assert_eq!(rainbow.provider_order(), vec!["b", "a"]);
}

#[test]
fn registration_order_without_preferences() {
    let rainbow = Rainbow::builder()
        .with_connector(returning("x", 3))
        .with_connector(returning("y", 3))
        .with_connector(returning("z", 3))
        .build()
        .unwrap();
    assert_eq!(rainbow.provider_order(), vec!["x", "y", "z"]);
}
