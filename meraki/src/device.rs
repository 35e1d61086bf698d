use serde::Deserialize;

/// One row of the organization device inventory. Everything except the
/// serial is optional; the dashboard omits fields it has no value for.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct Device {
    pub serial: String,
    pub name: Option<String>,
    pub mac: Option<String>,
    pub model: Option<String>,
    pub networkId: Option<String>,
    pub productType: Option<String>,
    pub firmware: Option<String>,
    pub lanIp: Option<String>,
    pub address: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Device {
    pub fn get_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if !name.is_empty() {
                return Some(name.clone());
            }
        }
        None
    }

    /// Display name for reports. Unnamed access points fall back to their
    /// serial so the name column is never blank.
    pub fn name_or_serial(&self) -> String {
        self.get_name().unwrap_or_else(|| self.serial.clone())
    }

    pub fn get_model(&self) -> Option<String> {
        if let Some(model) = &self.model {
            return Some(model.clone());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY_JSON: &str = r#"[
        {
            "serial": "Q2XX-AAAA-0001",
            "name": "Lobby AP",
            "mac": "00:18:0a:aa:bb:01",
            "model": "MR46",
            "networkId": "N_1234",
            "productType": "wireless",
            "firmware": "wireless-29-5-1",
            "lanIp": "10.0.0.21",
            "tags": ["lobby"]
        },
        {
            "serial": "Q2XX-AAAA-0002",
            "name": null,
            "productType": "wireless"
        }
    ]"#;

    #[test]
    fn test_inventory_deserializes() {
        let devices: Vec<Device> = serde_json::from_str(INVENTORY_JSON).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].serial, "Q2XX-AAAA-0001");
        assert_eq!(devices[0].get_name(), Some("Lobby AP".to_string()));
        assert_eq!(devices[0].get_model(), Some("MR46".to_string()));
    }

    #[test]
    fn test_unnamed_device_falls_back_to_serial() {
        let devices: Vec<Device> = serde_json::from_str(INVENTORY_JSON).unwrap();
        assert_eq!(devices[1].get_name(), None);
        assert_eq!(devices[1].name_or_serial(), "Q2XX-AAAA-0002");
    }

    #[test]
    fn test_named_device_uses_name() {
        let devices: Vec<Device> = serde_json::from_str(INVENTORY_JSON).unwrap();
        assert_eq!(devices[0].name_or_serial(), "Lobby AP");
    }

    #[test]
    fn test_empty_name_treated_as_unnamed() {
        let device: Device =
            serde_json::from_str(r#"{"serial": "Q2XX-AAAA-0003", "name": ""}"#).unwrap();
        assert_eq!(device.name_or_serial(), "Q2XX-AAAA-0003");
    }
}
