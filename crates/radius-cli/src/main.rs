//! Presentation collaborator: run one proximity search from the command line
//! and print the ranked table.

use clap::Parser;
use radius_core::Address;
use radius_search::SearchService;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "radius-cli")]
#[command(about = "Find the nearest service providers to an address")]
struct Cli {
    /// Street line of the search address.
    #[arg(long)]
    street: String,

    #[arg(long)]
    city: String,

    /// State code or name.
    #[arg(long)]
    state: String,

    /// ZIP code; omitted from the geocode query when empty.
    #[arg(long, default_value = "")]
    zip: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = radius_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let mut service = SearchService::new(&config)?;
    service.start().await?;

    let address = Address::new(&cli.street, &cli.city, &cli.state, &cli.zip);
    tracing::info!(address = %address.query_string(), "searching");
    let outcome = service.search(&address).await?;

    println!(
        "centre: {:.6}, {:.6}",
        outcome.centre.latitude, outcome.centre.longitude
    );
    println!("{} nearest providers:", outcome.ranked.len());
    for record in &outcome.ranked {
        println!(
            "{}\t{}\t{}",
            record.name,
            record.phone.as_deref().unwrap_or("-"),
            record.address
        );
    }

    Ok(())
}
