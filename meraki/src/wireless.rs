use serde::Deserialize;

/// Current wireless status of one access point, as returned by the
/// per-device wireless status endpoint.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct DeviceWirelessStatus {
    pub basicServiceSets: Option<Vec<BasicServiceSet>>,
}

impl DeviceWirelessStatus {
    /// Service sets currently enabled on the device. Radios with no SSID
    /// configured report entries with enabled=false; those are skipped.
    pub fn enabled_service_sets(&self) -> Vec<&BasicServiceSet> {
        if let Some(sets) = &self.basicServiceSets {
            sets.iter().filter(|bss| bss.is_enabled()).collect()
        } else {
            Vec::new()
        }
    }
}

/// One broadcast network instance on one radio/band of an access point.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct BasicServiceSet {
    pub ssidName: Option<String>,
    pub ssidNumber: Option<i64>,
    pub enabled: Option<bool>,
    pub band: Option<String>,
    pub bssid: Option<String>,
    pub channel: Option<i64>,
    pub channelWidth: Option<String>,
    pub power: Option<String>,
    pub visible: Option<bool>,
    pub broadcasting: Option<bool>,
}

impl BasicServiceSet {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn ssid_name_or_blank(&self) -> String {
        self.ssidName.clone().unwrap_or_default()
    }

    pub fn bssid_or_blank(&self) -> String {
        self.bssid.clone().unwrap_or_default()
    }

    pub fn band_or_blank(&self) -> String {
        self.band.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_JSON: &str = r#"{
        "basicServiceSets": [
            {
                "ssidName": "Corp",
                "ssidNumber": 0,
                "enabled": true,
                "band": "5",
                "bssid": "aa:bb:cc:dd:ee:ff",
                "channel": 36,
                "channelWidth": "80",
                "power": "17 dBm",
                "visible": true,
                "broadcasting": true
            },
            {
                "ssidName": "Unconfigured SSID 2",
                "ssidNumber": 1,
                "enabled": false,
                "band": "2.4",
                "bssid": "aa:bb:cc:dd:ee:00",
                "visible": true,
                "broadcasting": false
            }
        ]
    }"#;

    #[test]
    fn test_status_deserializes() {
        let status: DeviceWirelessStatus = serde_json::from_str(STATUS_JSON).unwrap();
        let sets = status.basicServiceSets.as_ref().unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].ssid_name_or_blank(), "Corp");
        assert_eq!(sets[0].bssid_or_blank(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(sets[0].band_or_blank(), "5");
    }

    #[test]
    fn test_enabled_filtering() {
        let status: DeviceWirelessStatus = serde_json::from_str(STATUS_JSON).unwrap();
        let enabled = status.enabled_service_sets();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].ssid_name_or_blank(), "Corp");
    }

    #[test]
    fn test_missing_service_sets_yields_empty() {
        let status: DeviceWirelessStatus = serde_json::from_str("{}").unwrap();
        assert!(status.enabled_service_sets().is_empty());
    }

    #[test]
    fn test_absent_enabled_flag_is_disabled() {
        let bss: BasicServiceSet =
            serde_json::from_str(r#"{"ssidName": "Ghost", "band": "2.4"}"#).unwrap();
        assert!(!bss.is_enabled());
    }
}
