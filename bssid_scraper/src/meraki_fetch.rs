use crate::bssid_report::{service_sets_to_records, BssidRecord};
use crate::config::ScraperConfig;
use crate::errors::BssidScraperError;
use futures::future::join_all;
use meraki::{Device, MerakiError};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Upper bound on in-flight status requests. The dashboard budgets roughly
/// ten requests per second per organization; staying below that keeps the
/// 429 path exceptional.
const CONCURRENT_STATUS_FETCHES: usize = 8;

fn log_meraki_error(context: &str, e: &MerakiError) {
    if e.is_api_error() {
        error!("Meraki API error while {context}");
    } else {
        error!("Unexpected error while {context}");
    }
    error!("{e:?}");
}

/// Load the organization's wireless device inventory from the dashboard.
/// Requires a valid configuration with working token data.
pub async fn load_wireless_inventory(
    config: &ScraperConfig,
) -> Result<Vec<Device>, BssidScraperError> {
    info!(
        "Loading wireless device inventory for organization {}",
        config.org_id
    );
    let devices =
        meraki::load_org_wireless_devices(&config.api_url, &config.api_key, &config.org_id)
            .await
            .map_err(|e| {
                log_meraki_error("downloading the device inventory", &e);
                BssidScraperError::MerakiConnectError
            })?;
    info!("Loaded {} wireless devices", devices.len());
    Ok(devices)
}

/// Fetch every device's wireless status concurrently and flatten the
/// enabled service sets. Each fetch produces its own record sub-list;
/// sub-lists are merged once all of them have settled, so a single failing
/// device fails the whole batch before anything is written.
pub async fn fetch_all_statuses(
    config: &ScraperConfig,
    devices: &[Device],
) -> Result<Vec<BssidRecord>, BssidScraperError> {
    let semaphore = Arc::new(Semaphore::new(CONCURRENT_STATUS_FETCHES));
    let mut futures = Vec::new();
    for device in devices {
        futures.push(fetch_device_records(config, device, semaphore.clone()));
    }

    let results: Result<Vec<Vec<BssidRecord>>, BssidScraperError> =
        join_all(futures).await.into_iter().collect();
    let records: Vec<BssidRecord> = results?.into_iter().flatten().collect();

    info!(
        "Collected {} enabled service sets from {} devices",
        records.len(),
        devices.len()
    );
    Ok(records)
}

async fn fetch_device_records(
    config: &ScraperConfig,
    device: &Device,
    semaphore: Arc<Semaphore>,
) -> Result<Vec<BssidRecord>, BssidScraperError> {
    let _permit = semaphore.acquire().await.map_err(|e| {
        error!("Status fetch pool closed unexpectedly");
        error!("{e:?}");
        BssidScraperError::MerakiConnectError
    })?;

    let status =
        meraki::load_device_wireless_status(&config.api_url, &config.api_key, &device.serial)
            .await
            .map_err(|e| {
                log_meraki_error(
                    &format!("fetching wireless status for {}", device.serial),
                    &e,
                );
                BssidScraperError::MerakiConnectError
            })?;

    Ok(service_sets_to_records(&device.name_or_serial(), &status))
}
