use rainbow::{Asset, Rainbow};
use rainbow_demos::common::get_connectors;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,rainbow=trace,rainbow_core=trace,rainbow_providers=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let rainbow = get_connectors()?
        .into_iter()
        .fold(Rainbow::builder(), |b, c| b.with_connector(c))
        .build()?;

    let prepared = rainbow.prepare(&Asset::bitcoin()).await?;
    tracing::info!(rows = prepared.len(), "done");

    Ok(())
}
