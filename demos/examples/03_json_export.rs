use rainbow::{Asset, Rainbow, RainbowConfig};
use rainbow_demos::common::get_connectors;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration can come from JSON; here a symmetric band set without events.
    let cfg: RainbowConfig = serde_json::from_str(
        r#"{
            "multipliers": [-3.5, -2.5, -1.5, -0.5, 0.5, 1.5, 2.5, 3.5],
            "reference_events": [],
            "min_y_floor": 1.0
        }"#,
    )?;

    let rainbow = get_connectors()?
        .into_iter()
        .fold(Rainbow::builder(), |b, c| b.with_connector(c))
        .config(cfg)
        .build()?;

    let prepared = rainbow.prepare(&Asset::bitcoin()).await?;
    let tail: Vec<_> = prepared.rows().iter().rev().take(3).collect();
    println!("{}", serde_json::to_string_pretty(&tail)?);
    println!("current band: {:?}", prepared.current_band());

    Ok(())
}
