//! Exports the BSSIDs broadcast by every wireless access point in a Meraki
//! organization to a flat CSV file, one row per enabled basic service set.

mod bssid_report;
mod config;
mod errors;
mod meraki_fetch;

use crate::config::ScraperConfig;
use crate::errors::BssidScraperError;
use tokio::time::Instant;
use tracing::{error, info};

/// Start the tracing/logging system. All diagnostics go to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BssidScraperError> {
    let now = Instant::now();
    init_tracing();
    info!("Meraki BSSID Export");

    // Load the configuration
    let config = ScraperConfig::load().map_err(|e| {
        error!("Unable to determine the output location");
        error!("{e:?}");
        BssidScraperError::CannotLoadConfig
    })?;

    // Inventory, then one status fetch per access point
    let devices = meraki_fetch::load_wireless_inventory(&config).await?;
    let mut records = meraki_fetch::fetch_all_statuses(&config, &devices).await?;

    info!("Writing CSV file: {}", config.csv_path.display());
    bssid_report::write_bssid_report(&config.csv_path, &mut records)?;
    info!("Finished writing CSV file");

    // Print timings
    let elapsed = now.elapsed();
    info!(
        "BSSID export completed in {:.3} seconds",
        elapsed.as_secs_f32()
    );

    Ok(())
}
