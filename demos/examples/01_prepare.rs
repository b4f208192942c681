use rainbow::{Asset, Band, Rainbow};
use rainbow_demos::common::get_connectors;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rainbow = get_connectors()?
        .into_iter()
        .fold(Rainbow::builder(), |b, c| b.with_connector(c))
        .build()?;

    let (prepared, report) = rainbow.prepare_with_report(&Asset::bitcoin()).await?;
    println!(
        "{} daily points from {} ({} provider(s) failed first)",
        prepared.len(),
        report.provider,
        report.failures.len()
    );

    let fit = prepared.fit();
    println!(
        "ln(price) = {:.3e}·i² + {:.3e}·i + {:.3}   σ = {:.4}",
        fit.a,
        fit.b,
        fit.c,
        prepared.residuals().std_dev
    );

    if let Some(latest) = prepared.latest() {
        println!("\nlatest {}  price {:.2}", latest.ts.date_naive(), latest.price);
        for band in Band::ALL.iter().rev() {
            let k = band.index();
            let marker = if latest.band() == *band { "  <==" } else { "" };
            println!(
                "  {:<26} {:>12.2} .. {:>12.2}{marker}",
                band.label(),
                latest.boundaries[k],
                latest.boundaries[k + 1]
            );
        }
    }

    for event in prepared.events() {
        println!("{}: {}", event.label, event.at.date_naive());
    }
    println!("min_y hint: {:.2}", prepared.min_y());

    Ok(())
}
