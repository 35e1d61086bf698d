use crate::errors::BssidScraperError;
use std::path::PathBuf;

/// Default dashboard endpoint. Override with MERAKI_API_URL for regional
/// clusters (api.meraki.cn, api.gov-meraki.com).
const DEFAULT_API_URL: &str = "https://api.meraki.com/api/v1";

const CSV_FILE_NAME: &str = "meraki_bssids.csv";

/// Runtime configuration, read from the environment at process start.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub org_id: String,
    pub api_key: String,
    pub api_url: String,
    pub csv_path: PathBuf,
}

impl ScraperConfig {
    /// Reads ORG_ID and API_KEY from the environment and derives the CSV
    /// output path from the executable's own directory. Missing credentials
    /// are not rejected here: an empty key surfaces as a 401 at the
    /// dashboard boundary.
    pub fn load() -> Result<Self, BssidScraperError> {
        let org_id = std::env::var("ORG_ID").unwrap_or_default();
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        let api_url =
            std::env::var("MERAKI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let exe = std::env::current_exe().map_err(|_| BssidScraperError::CannotLoadConfig)?;
        let csv_path = exe
            .parent()
            .ok_or(BssidScraperError::CannotLoadConfig)?
            .join(CSV_FILE_NAME);

        Ok(Self {
            org_id,
            api_key,
            api_url,
            csv_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load() {
        std::env::set_var("ORG_ID", "549236");
        std::env::set_var("API_KEY", "0123456789abcdef");
        let config = ScraperConfig::load().unwrap();
        assert_eq!(config.org_id, "549236");
        assert_eq!(config.api_key, "0123456789abcdef");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.csv_path.file_name().unwrap().to_str().unwrap(),
            CSV_FILE_NAME
        );
        assert!(config.csv_path.parent().is_some());
    }
}
