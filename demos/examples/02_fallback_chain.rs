use std::sync::Arc;

use rainbow::{Asset, PriceConnector, Rainbow, RainbowError};
use rainbow_demos::common::{get_connectors, use_mock};
use rainbow_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A provider that is always down, placed ahead of the real chain.
    let down = MockConnector::builder()
        .name("always-down")
        .fails("503 Service Unavailable")
        .build();

    let mut builder = Rainbow::builder().with_connector(down.clone());
    for c in get_connectors()? {
        builder = builder.with_connector(c);
    }
    let rainbow = builder.build()?;
    println!("attempt order: {:?}", rainbow.provider_order());

    let (prepared, report) = rainbow.prepare_with_report(&Asset::bitcoin()).await?;
    println!("served by {} with {} rows", report.provider, prepared.len());
    for failure in &report.failures {
        println!("  skipped: {failure}");
    }

    // Nothing left to fall back on: every failure is reported in attempt order.
    let broken = Rainbow::builder()
        .with_connector(down)
        .with_connector(MockConnector::builder().name("empty").empty().build())
        .build()?;
    match broken.prepare(&Asset::bitcoin()).await {
        Err(e @ RainbowError::AllProvidersFailed(_)) => println!("expected failure: {e}"),
        other => println!("unexpected outcome: {other:?}"),
    }

    // Prefer a specific provider when running live.
    if !use_mock() {
        let chain = get_connectors()?;
        let last: Arc<dyn PriceConnector> = Arc::clone(&chain[chain.len() - 1]);
        let preferred = chain
            .into_iter()
            .fold(Rainbow::builder(), |b, c| b.with_connector(c))
            .prefer(&[last.key()])
            .build()?;
        println!("preferred order: {:?}", preferred.provider_order());
    }

    Ok(())
}
