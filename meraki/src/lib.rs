/// Meraki Dashboard Data Structures
///
/// Strong-typed implementation of the subset of the Meraki Dashboard API
/// used by the BSSID export: the organization device inventory and the
/// per-device wireless status endpoint.

mod rest; // REST HTTP services
mod device; // Dashboard data definition for an inventory device
mod wireless; // Dashboard data definition for a device's wireless status
mod error;

pub use device::Device;
pub use error::MerakiError;
pub use wireless::{BasicServiceSet, DeviceWirelessStatus};

use self::rest::{dashboard_request_get_all_pages, dashboard_request_get_one};

/// Loads the complete wireless device inventory for an organization,
/// following pagination links until every page has been fetched.
pub async fn load_org_wireless_devices(
    api: &str,
    key: &str,
    org_id: &str,
) -> Result<Vec<Device>, MerakiError> {
    dashboard_request_get_all_pages(
        &format!("organizations/{org_id}/devices?productTypes[]=wireless&perPage=1000"),
        key,
        api,
    )
    .await
}

/// Loads the current wireless status (basic service sets) for one device.
pub async fn load_device_wireless_status(
    api: &str,
    key: &str,
    serial: &str,
) -> Result<DeviceWirelessStatus, MerakiError> {
    dashboard_request_get_one(&format!("devices/{serial}/wireless/status"), key, api).await
}
