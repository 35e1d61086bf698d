use crate::errors::BssidScraperError;
use meraki::DeviceWirelessStatus;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

/// Represents one enabled broadcast network in the meraki_bssids.csv file.
/// Field order is the CSV column order; the derived ordering sorts rows by
/// device name, then SSID, then BSSID.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BssidRecord {
    pub device_name: String,
    pub ssid_name: String,
    pub bssid: String,
    pub band: String,
}

/// Projects a device's wireless status into flat report records, keeping
/// only service sets that are currently enabled.
pub fn service_sets_to_records(
    device_name: &str,
    status: &DeviceWirelessStatus,
) -> Vec<BssidRecord> {
    status
        .enabled_service_sets()
        .iter()
        .map(|bss| BssidRecord {
            device_name: device_name.to_string(),
            ssid_name: bss.ssid_name_or_blank(),
            bssid: bss.bssid_or_blank(),
            band: bss.band_or_blank(),
        })
        .collect()
}

/// Writes the BSSID report.
///
/// Rows are sorted before the write so successive runs over the same
/// network diff cleanly. The file is truncated on open and carries no
/// header row.
pub fn write_bssid_report(
    path: &Path,
    records: &mut Vec<BssidRecord>,
) -> Result<(), BssidScraperError> {
    records.sort();

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| {
            error!("Unable to open {} for writing", path.display());
            error!("{e:?}");
            BssidScraperError::CsvError
        })?;

    for record in records.iter() {
        writer.serialize(record).map_err(|e| {
            error!("Unable to serialize record {record:?}");
            error!("{e:?}");
            BssidScraperError::CsvError
        })?;
    }
    writer.flush().map_err(|e| {
        error!("Unable to flush CSV file");
        error!("{e:?}");
        BssidScraperError::CsvError
    })?;
    info!("Wrote {} lines to {}", records.len(), path.display());

    Ok(())
}
